use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the drill loop should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Advance,
    Quit,
    Redraw,
}

/// Screen cells covered by the drawn card, in terminal columns/rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardArea {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl CardArea {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.left
            && u32::from(column) < u32::from(self.left) + u32::from(self.width)
            && row >= self.top
            && u32::from(row) < u32::from(self.top) + u32::from(self.height)
    }
}

/// Normalize a raw terminal event. Space/Enter or a left click on the card
/// advance, `q`/Esc/Ctrl-C quit, a resize asks for a redraw, everything else
/// is dropped.
pub fn classify(event: &Event, card: &CardArea) -> Option<Signal> {
    match event {
        Event::Key(key) => classify_key(key),
        Event::Mouse(mouse) => classify_mouse(mouse, card),
        Event::Resize(_, _) => Some(Signal::Redraw),
        _ => None,
    }
}

fn classify_key(key: &KeyEvent) -> Option<Signal> {
    // Release and repeat events would double-advance one press.
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Signal::Advance),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Signal::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Signal::Quit),
        _ => None,
    }
}

fn classify_mouse(mouse: &MouseEvent, card: &CardArea) -> Option<Signal> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if card.contains(mouse.column, mouse.row) => {
            Some(Signal::Advance)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    const CARD: CardArea = CardArea { left: 10, top: 2, width: 37, height: 11 };

    fn mouse_at(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE })
    }

    fn mouse(kind: MouseEventKind) -> Event {
        mouse_at(kind, 12, 4)
    }

    fn classify(event: &Event) -> Option<Signal> {
        super::classify(event, &CARD)
    }

    #[test]
    fn space_and_enter_advance() {
        assert_eq!(classify(&key(KeyCode::Char(' '), KeyEventKind::Press)), Some(Signal::Advance));
        assert_eq!(classify(&key(KeyCode::Enter, KeyEventKind::Press)), Some(Signal::Advance));
    }

    #[test]
    fn release_and_repeat_are_ignored() {
        assert_eq!(classify(&key(KeyCode::Enter, KeyEventKind::Release)), None);
        assert_eq!(classify(&key(KeyCode::Char(' '), KeyEventKind::Repeat)), None);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(classify(&key(KeyCode::Char('q'), KeyEventKind::Press)), Some(Signal::Quit));
        assert_eq!(classify(&key(KeyCode::Esc, KeyEventKind::Press)), Some(Signal::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(classify(&ctrl_c), Some(Signal::Quit));
    }

    #[test]
    fn other_keys_are_dropped() {
        assert_eq!(classify(&key(KeyCode::Char('x'), KeyEventKind::Press)), None);
        assert_eq!(classify(&key(KeyCode::Char('c'), KeyEventKind::Press)), None);
    }

    #[test]
    fn left_click_advances() {
        assert_eq!(classify(&mouse(MouseEventKind::Down(MouseButton::Left))), Some(Signal::Advance));
        assert_eq!(classify(&mouse(MouseEventKind::Up(MouseButton::Left))), None);
        assert_eq!(classify(&mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(classify(&mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn click_outside_card_is_dropped() {
        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(classify(&mouse_at(down, 9, 4)), None);
        assert_eq!(classify(&mouse_at(down, 47, 4)), None);
        assert_eq!(classify(&mouse_at(down, 12, 1)), None);
        assert_eq!(classify(&mouse_at(down, 12, 13)), None);
        assert_eq!(classify(&mouse_at(down, 10, 2)), Some(Signal::Advance));
        assert_eq!(classify(&mouse_at(down, 46, 12)), Some(Signal::Advance));
    }

    #[test]
    fn card_area_at_screen_edge_does_not_overflow() {
        let edge = CardArea { left: u16::MAX - 1, top: u16::MAX - 1, width: 5, height: 5 };
        assert!(edge.contains(u16::MAX, u16::MAX));
        assert!(!edge.contains(0, 0));
    }

    #[test]
    fn resize_redraws() {
        assert_eq!(classify(&Event::Resize(80, 24)), Some(Signal::Redraw));
    }
}
