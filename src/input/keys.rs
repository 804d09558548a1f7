use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// Virtual-key codes understood by the dispatcher.
pub const VK_SPACE: u32 = 32;
pub const VK_LEFT: u32 = 37;
pub const VK_RIGHT: u32 = 39;
pub const VK_0: u32 = 48;
pub const VK_9: u32 = 57;
pub const VK_A: u32 = 65;
pub const VK_B: u32 = 66;
pub const VK_F: u32 = 70;
pub const VK_G: u32 = 71;
pub const VK_R: u32 = 82;

/// Keys that end the session instead of reaching the dispatcher.
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Translates a terminal key into its virtual-key code.
///
/// Letters map to their upper-case ASCII value regardless of shift, the
/// same way a keyboard reports them. Keys with no code return `None`.
pub fn virtual_key(code: KeyCode) -> Option<u32> {
    match code {
        KeyCode::Char(' ') => Some(VK_SPACE),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(c as u32),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase() as u32),
        KeyCode::Left => Some(VK_LEFT),
        KeyCode::Right => Some(VK_RIGHT),
        KeyCode::Up => Some(38),
        KeyCode::Down => Some(40),
        KeyCode::Enter => Some(13),
        KeyCode::Tab => Some(9),
        KeyCode::Backspace => Some(8),
        KeyCode::F(n) if (1..=24).contains(&n) => Some(111 + n as u32),
        _ => None,
    }
}

/// Rows for the `keys` command and the help text.
pub const KEY_HELP: &[(&str, &str)] = &[
    ("0-9", "set level to digit x 10%"),
    ("a", "set level to 100%"),
    ("r / g / b", "toggle red / green / blue"),
    ("space, →", "level +10% (100% wraps to 0%)"),
    ("←", "level -10% (0% wraps to 100%)"),
    ("f", "request full-screen window"),
    ("q, Esc", "quit"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_case_insensitive() {
        assert_eq!(virtual_key(KeyCode::Char('r')), Some(VK_R));
        assert_eq!(virtual_key(KeyCode::Char('R')), Some(VK_R));
        assert_eq!(virtual_key(KeyCode::Char('f')), Some(VK_F));
        assert_eq!(virtual_key(KeyCode::Char('a')), Some(VK_A));
    }

    #[test]
    fn test_digits_arrows_and_space() {
        assert_eq!(virtual_key(KeyCode::Char('0')), Some(VK_0));
        assert_eq!(virtual_key(KeyCode::Char('9')), Some(VK_9));
        assert_eq!(virtual_key(KeyCode::Char(' ')), Some(VK_SPACE));
        assert_eq!(virtual_key(KeyCode::Left), Some(VK_LEFT));
        assert_eq!(virtual_key(KeyCode::Right), Some(VK_RIGHT));
        assert_eq!(virtual_key(KeyCode::F(11)), Some(122));
        assert_eq!(virtual_key(KeyCode::Home), None);
        // '%' shares its ASCII value with the left-arrow code.
        assert_eq!(virtual_key(KeyCode::Char('%')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)));
    }
}
