/// An irreversible boolean: starts `Pending`, settles exactly once.
///
/// The preloader holds one of these; the single allowed transition is
/// enforced by the type instead of by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OneShot {
    #[default]
    Pending,
    Settled,
}

impl OneShot {
    /// Perform the transition. Returns true only the first time.
    pub fn settle(&mut self) -> bool {
        match self {
            Self::Pending => {
                *self = Self::Settled;
                true
            }
            Self::Settled => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending() {
        assert!(OneShot::default().is_pending());
        assert!(!OneShot::default().is_settled());
    }

    #[test]
    fn settles_exactly_once() {
        let mut state = OneShot::default();
        assert!(state.settle());
        assert!(state.is_settled());
        // Repeated settles are no-ops and report so.
        assert!(!state.settle());
        assert!(!state.settle());
        assert!(state.is_settled());
    }
}
