//! Resolution statistics.
//!
//! This module provides the `ResolutionStats` struct which records what a
//! single resolution looked at.

/// Observable work done during one `resolve_with_stats()` call.
///
/// Useful for debugging why a rule did or did not win.
/// The struct is `Copy` to allow cheap cloning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    /// Number of entities inspected.
    pub entities_checked: u32,

    /// Number of entities that matched the actor.
    pub entities_matched: u32,

    /// Order of the winning entity, if any matched.
    pub winning_order: Option<u32>,
}

impl ResolutionStats {
    /// Create a new stats tracker initialized to zero.
    #[inline]
    pub const fn new() -> Self {
        ResolutionStats {
            entities_checked: 0,
            entities_matched: 0,
            winning_order: None,
        }
    }

    #[inline]
    pub fn inc_checked(&mut self) {
        self.entities_checked = self.entities_checked.saturating_add(1);
    }

    #[inline]
    pub fn inc_matched(&mut self) {
        self.entities_matched = self.entities_matched.saturating_add(1);
    }

    /// Returns `true` if the fallback decided.
    #[inline]
    pub fn fell_back(&self) -> bool {
        self.winning_order.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = ResolutionStats::default();
        assert_eq!(stats.entities_checked, 0);
        assert_eq!(stats.entities_matched, 0);
        assert!(stats.fell_back());
    }

    #[test]
    fn test_stats_increment() {
        let mut stats = ResolutionStats::new();

        stats.inc_checked();
        stats.inc_checked();
        stats.inc_matched();
        assert_eq!(stats.entities_checked, 2);
        assert_eq!(stats.entities_matched, 1);

        stats.winning_order = Some(10);
        assert!(!stats.fell_back());
    }
}
