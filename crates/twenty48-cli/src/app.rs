use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::warn;
use rand::rngs::StdRng;
use twenty48_core::{GameSession, Move};

use crate::config::Settings;
use crate::input::{action_for_key, SwipeTracker, UserAction};
use crate::storage::Profile;
use crate::ui::{self, Tui};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Shell state around one [`GameSession`]: settings, best score, the
/// optional profile store, and the input/animation bookkeeping.
///
/// Moves are serialized by the event loop: each one runs to completion
/// (apply, spawn, redraw) before the next event is read.
pub struct App {
    pub session: GameSession,
    pub settings: Settings,
    pub best: u64,
    profile: Option<Profile>,
    rng: StdRng,
    swipe: SwipeTracker,
    cue_until: Option<Instant>,
}

impl App {
    pub fn new(settings: Settings, profile: Option<Profile>, mut rng: StdRng) -> Self {
        let best = profile.as_ref().map_or(0, |p| {
            p.best_score().unwrap_or_else(|e| {
                warn!("reading best score: {e:#}");
                0
            })
        });
        let session = GameSession::new(&mut rng);
        let mut app = Self {
            session,
            settings,
            best,
            profile,
            rng,
            swipe: SwipeTracker::default(),
            cue_until: None,
        };
        app.arm_cue();
        app
    }

    /// Event loop: redraw, wait for input, apply. Returns once the player
    /// quits; persists the profile on the way out.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match action_for_key(key) {
                    Some(UserAction::Quit) => break,
                    Some(UserAction::NewGame) => self.new_game(),
                    Some(UserAction::Move(mv)) => self.play(mv),
                    None => {}
                },
                Event::Mouse(mouse) if self.settings.swipe_enabled => {
                    if let Some(mv) = self.swipe.observe(mouse) {
                        self.play(mv);
                    }
                }
                _ => {}
            }
        }
        self.persist();
        Ok(())
    }

    fn play(&mut self, direction: Move) {
        if self.session.is_over() {
            return;
        }
        let outcome = self.session.apply(direction, &mut self.rng);
        if !outcome.moved {
            return;
        }
        if self.session.score() > self.best {
            self.best = self.session.score();
        }
        if outcome.score_gained > 0 {
            self.ring_bell();
        }
        self.arm_cue();
    }

    fn new_game(&mut self) {
        self.session.restart(&mut self.rng);
        self.arm_cue();
    }

    /// True while the new-tile highlight should still be shown.
    pub fn cue_active(&self) -> bool {
        self.cue_until.is_some_and(|until| Instant::now() < until)
    }

    fn arm_cue(&mut self) {
        if self.settings.animations {
            self.cue_until =
                Some(Instant::now() + Duration::from_millis(self.settings.animation_speed_ms));
        }
    }

    /// Terminal bell on merges. Fire-and-forget: failures never reach the
    /// game state.
    fn ring_bell(&self) {
        if !self.settings.sound {
            return;
        }
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }

    /// Write best score and settings back to the profile, if one opened.
    /// Errors are logged and dropped.
    pub fn persist(&mut self) {
        let Some(profile) = self.profile.as_mut() else {
            return;
        };
        if let Err(e) = profile.set_best_score(self.best) {
            warn!("saving best score: {e:#}");
        }
        if let Err(e) = profile.save_settings(&self.settings) {
            warn!("saving settings: {e:#}");
        }
    }
}
