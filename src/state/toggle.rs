/// Open/closed state shared by the FAQ accordion entries and the mobile menu.
///
/// Each holder owns its own value; toggling one never affects another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggle {
    open: bool,
}

impl Toggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Closed regardless of the prior state. Nav links use this so the
    /// mobile menu never stays open after navigating.
    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!Toggle::default().is_open());
    }

    #[test]
    fn double_toggle_round_trips() {
        let t = Toggle::default();
        assert!(t.toggled().is_open());
        assert_eq!(t.toggled().toggled(), t);
    }

    #[test]
    fn close_is_unconditional() {
        assert!(!Toggle::default().toggled().closed().is_open());
        assert!(!Toggle::default().closed().is_open());
    }

    #[test]
    fn instances_are_independent() {
        let a = Toggle::default().toggled();
        let b = Toggle::default();
        assert!(a.is_open());
        assert!(!b.is_open());
    }
}
