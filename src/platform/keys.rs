//! Keyboard shortcuts

/// Editor action bound to a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Erase,
    Draw,
    Animate,
    StopAnimation,
    Reset,
}

impl Shortcut {
    /// Map a keydown to a shortcut. Chords (Ctrl/Cmd/Alt held) belong to the
    /// browser, and auto-repeat would restart the action on every tick.
    pub fn from_key(key: &str, modified: bool, repeat: bool) -> Option<Self> {
        if modified || repeat {
            return None;
        }
        match key {
            "e" | "E" => Some(Shortcut::Erase),
            "d" | "D" => Some(Shortcut::Draw),
            "a" | "A" => Some(Shortcut::Animate),
            "s" | "S" | "Escape" => Some(Shortcut::StopAnimation),
            "r" | "R" => Some(Shortcut::Reset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys() {
        assert_eq!(Shortcut::from_key("a", false, false), Some(Shortcut::Animate));
        assert_eq!(Shortcut::from_key("E", false, false), Some(Shortcut::Erase));
        assert_eq!(Shortcut::from_key("d", false, false), Some(Shortcut::Draw));
        assert_eq!(Shortcut::from_key("r", false, false), Some(Shortcut::Reset));
        assert_eq!(Shortcut::from_key("Escape", false, false), Some(Shortcut::StopAnimation));
        assert_eq!(Shortcut::from_key("x", false, false), None);
    }

    #[test]
    fn test_chords_are_left_to_browser() {
        // Ctrl/Cmd+A (select all) and Ctrl/Cmd+R (reload)
        assert_eq!(Shortcut::from_key("a", true, false), None);
        assert_eq!(Shortcut::from_key("r", true, false), None);
    }

    #[test]
    fn test_auto_repeat_ignored() {
        assert_eq!(Shortcut::from_key("a", false, true), None);
        assert_eq!(Shortcut::from_key("r", false, true), None);
    }
}
