use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::config::Settings;

const KEY_BEST_SCORE: &str = "best_score";
const KEY_SETTINGS: &str = "settings";

/// Per-user profile store backing the best score and settings.
///
/// Schema: profile(meta_key TEXT PRIMARY KEY, meta_value TEXT). Settings
/// are stored as one JSON blob under `settings`; the best score as decimal
/// text under `best_score`.
///
/// Callers treat the whole store as optional: any failure here is logged
/// and the game runs on without persistence.
pub struct Profile {
    data_dir: PathBuf,
    conn: Connection,
}

impl Profile {
    /// Create or open the profile under `dir`, ensuring the schema exists.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let data_dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("creating {}", data_dir.display()))?;
        let conn = Connection::open(data_dir.join("profile.db"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS profile (
                meta_key TEXT PRIMARY KEY,
                meta_value TEXT NOT NULL
            );",
        )?;
        Ok(Self { data_dir, conn })
    }

    pub fn best_score(&self) -> Result<u64> {
        match self.get(KEY_BEST_SCORE)? {
            Some(text) => Ok(text.parse().unwrap_or(0)),
            None => Ok(0),
        }
    }

    pub fn set_best_score(&mut self, score: u64) -> Result<()> {
        self.set(KEY_BEST_SCORE, &score.to_string())
    }

    /// Stored settings, or defaults when absent. An unparsable blob counts
    /// as a failure so the caller can log it.
    pub fn settings(&self) -> Result<Settings> {
        match self.get(KEY_SETTINGS)? {
            Some(blob) => {
                let settings: Settings =
                    serde_json::from_str(&blob).context("parsing stored settings")?;
                Ok(settings)
            }
            None => Ok(Settings::default()),
        }
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        let blob = serde_json::to_string(settings)?;
        self.set(KEY_SETTINGS, &blob)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT meta_value FROM profile WHERE meta_key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO profile (meta_key, meta_value) VALUES (?1, ?2)
             ON CONFLICT(meta_key) DO UPDATE SET meta_value=excluded.meta_value",
            params![key, value],
        )?;
        Ok(())
    }
}
