use std::io;

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use crate::app::App;

const CELL_WIDTH: usize = 9;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub fn setup_terminal(mouse: bool) -> Result<Tui> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    if mouse {
        crossterm::execute!(io::stdout(), EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal(mouse: bool) -> Result<()> {
    if mouse {
        crossterm::execute!(io::stdout(), DisableMouseCapture)?;
    }
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new(format!(
        "Score {}   Best {}   Highest tile {}",
        app.session.score(),
        app.best,
        app.session.highest_tile()
    ))
    .block(Block::default().borders(Borders::ALL).title("twenty48"))
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let board = Paragraph::new(board_text(app))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(board, chunks[1]);

    let controls = if app.settings.swipe_enabled {
        "Arrows/WASD or mouse swipe to move, r to restart, q to quit"
    } else {
        "Arrows/WASD to move, r to restart, q to quit"
    };
    let footer = Paragraph::new(controls)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);

    if app.session.is_over() {
        draw_game_over(f, chunks[1]);
    }
}

fn draw_game_over(f: &mut Frame, area: Rect) {
    let overlay = centered_rect(area, 44, 4);
    let text = Text::from(vec![
        Line::from("Game over - no moves left."),
        Line::from("Press r to play again, q to quit."),
    ]);
    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Game over"))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    f.render_widget(Clear, overlay);
    f.render_widget(widget, overlay);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn board_text(app: &App) -> Text<'static> {
    let mut lines = Vec::new();
    for (r, row) in app.session.grid().rows().iter().enumerate() {
        let mut pad = Vec::new();
        let mut mid = Vec::new();
        for (c, &value) in row.iter().enumerate() {
            let style = tile_style(value, &app.settings.theme);
            let highlight = app.cue_active() && app.session.last_spawn() == Some((r, c));
            let mid_style = if highlight {
                style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                style
            };
            pad.push(Span::styled(" ".repeat(CELL_WIDTH), style));
            pad.push(Span::raw(" "));
            mid.push(Span::styled(cell_label(value), mid_style));
            mid.push(Span::raw(" "));
        }
        lines.push(Line::from(pad.clone()));
        lines.push(Line::from(mid));
        lines.push(Line::from(pad));
        lines.push(Line::from(""));
    }
    Text::from(lines)
}

fn cell_label(value: u32) -> String {
    if value == 0 {
        format!("{:^CELL_WIDTH$}", "\u{b7}")
    } else {
        format!("{value:^CELL_WIDTH$}")
    }
}

/// Style for one cell, keyed by value tier and theme. Unknown themes render
/// as "classic".
fn tile_style(value: u32, theme: &str) -> Style {
    match theme {
        "plain" => plain_style(value),
        "mono" => mono_style(value),
        _ => classic_style(value),
    }
}

fn classic_style(value: u32) -> Style {
    if value == 0 {
        return Style::default()
            .bg(Color::Rgb(0x1e, 0x29, 0x3b))
            .fg(Color::Rgb(0x47, 0x55, 0x69));
    }
    let bg = match value {
        2 => Color::Rgb(0xf5, 0xf5, 0xf5),
        4 => Color::Rgb(0xff, 0xd3, 0xb6),
        8 => Color::Rgb(0xff, 0xad, 0x60),
        16 => Color::Rgb(0xff, 0x8c, 0x42),
        32 => Color::Rgb(0xff, 0x6f, 0x61),
        64 => Color::Rgb(0xff, 0x3e, 0x4d),
        128 => Color::Rgb(0xa7, 0x8b, 0xfa),
        256 => Color::Rgb(0x7c, 0x3a, 0xed),
        512 => Color::Rgb(0x4f, 0x46, 0xe5),
        1024 => Color::Rgb(0x43, 0x38, 0xca),
        2048 => Color::Rgb(0x1d, 0x4e, 0xd8),
        _ => Color::Rgb(0x38, 0xbd, 0xf8),
    };
    let fg = if value >= 128 {
        Color::Rgb(0xf8, 0xfa, 0xfc)
    } else {
        Color::Rgb(0x0a, 0x0a, 0x0a)
    };
    Style::default().bg(bg).fg(fg)
}

fn plain_style(value: u32) -> Style {
    let fg = match value {
        0 => Color::DarkGray,
        2 | 4 => Color::White,
        8 | 16 => Color::Yellow,
        32 | 64 => Color::LightRed,
        128 | 256 => Color::Magenta,
        512 | 1024 => Color::LightBlue,
        _ => Color::LightCyan,
    };
    Style::default().fg(fg)
}

fn mono_style(value: u32) -> Style {
    if value == 0 {
        Style::default().fg(Color::DarkGray)
    } else if value >= 128 {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
