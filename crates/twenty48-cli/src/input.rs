use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use twenty48_core::Move;

/// Minimum dominant-axis displacement, in pixels, for a drag to register as
/// a swipe.
pub const SWIPE_THRESHOLD_PX: i32 = 30;

// Rough size of one terminal cell in pixels, used to scale drag distances
// measured in rows/columns up to the pixel threshold.
const CELL_WIDTH_PX: i32 = 9;
const CELL_HEIGHT_PX: i32 = 18;

/// What the player asked for, decoded from a raw input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Move(Move),
    NewGame,
    Quit,
}

/// Arrow keys and WASD move; `r` restarts; `q`/Esc quits.
pub fn action_for_key(key: KeyEvent) -> Option<UserAction> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(UserAction::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UserAction::NewGame),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(UserAction::Move(Move::Up)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Some(UserAction::Move(Move::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            Some(UserAction::Move(Move::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Some(UserAction::Move(Move::Right))
        }
        _ => None,
    }
}

/// Resolve a drag displacement (in pixels) into a move. The axis with the
/// larger absolute delta picks horizontal vs. vertical, the sign picks the
/// direction, and anything under [`SWIPE_THRESHOLD_PX`] is ignored.
pub fn swipe_direction(dx: i32, dy: i32) -> Option<Move> {
    if dx.abs() >= dy.abs() {
        if dx.abs() < SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if dx > 0 { Move::Right } else { Move::Left })
    } else {
        if dy.abs() < SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if dy > 0 { Move::Down } else { Move::Up })
    }
}

/// Tracks a left-button drag between press and release and resolves it into
/// a swipe. Cell coordinates are scaled to approximate pixels before the
/// threshold applies.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<(i32, i32)>,
}

impl SwipeTracker {
    pub fn observe(&mut self, event: MouseEvent) -> Option<Move> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((i32::from(event.column), i32::from(event.row)));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (ox, oy) = self.origin.take()?;
                let dx = (i32::from(event.column) - ox) * CELL_WIDTH_PX;
                let dy = (i32::from(event.row) - oy) * CELL_HEIGHT_PX;
                swipe_direction(dx, dy)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEventKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_and_wasd_map_to_moves() {
        assert_eq!(
            action_for_key(key(KeyCode::Up)),
            Some(UserAction::Move(Move::Up))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('a'))),
            Some(UserAction::Move(Move::Left))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('S'))),
            Some(UserAction::Move(Move::Down))
        );
        assert_eq!(action_for_key(key(KeyCode::Char('q'))), Some(UserAction::Quit));
        assert_eq!(action_for_key(key(KeyCode::Char('r'))), Some(UserAction::NewGame));
        assert_eq!(action_for_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn swipe_requires_threshold() {
        assert_eq!(swipe_direction(29, 0), None);
        assert_eq!(swipe_direction(30, 0), Some(Move::Right));
        assert_eq!(swipe_direction(-30, 0), Some(Move::Left));
        assert_eq!(swipe_direction(0, 29), None);
        assert_eq!(swipe_direction(0, 30), Some(Move::Down));
        assert_eq!(swipe_direction(0, -45), Some(Move::Up));
        assert_eq!(swipe_direction(0, 0), None);
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(swipe_direction(40, 31), Some(Move::Right));
        assert_eq!(swipe_direction(31, -40), Some(Move::Up));
        // Ties go to the horizontal axis.
        assert_eq!(swipe_direction(-35, 35), Some(Move::Left));
    }

    #[test]
    fn tracker_resolves_press_release_pairs() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(
            tracker.observe(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)),
            None
        );
        // 6 columns right ~= 54 px, past the threshold.
        assert_eq!(
            tracker.observe(mouse(MouseEventKind::Up(MouseButton::Left), 16, 5)),
            Some(Move::Right)
        );
        // Release without a press is ignored.
        assert_eq!(
            tracker.observe(mouse(MouseEventKind::Up(MouseButton::Left), 16, 5)),
            None
        );
        // Short drags stay under the threshold.
        tracker.observe(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        assert_eq!(
            tracker.observe(mouse(MouseEventKind::Up(MouseButton::Left), 12, 5)),
            None
        );
    }

    #[test]
    fn vertical_cell_drags_scale_to_pixels() {
        let mut tracker = SwipeTracker::default();
        tracker.observe(mouse(MouseEventKind::Down(MouseButton::Left), 4, 10));
        // 2 rows down ~= 36 px vertical vs 0 horizontal.
        assert_eq!(
            tracker.observe(mouse(MouseEventKind::Up(MouseButton::Left), 4, 12)),
            Some(Move::Down)
        );
    }
}
