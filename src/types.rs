//! Core type definitions for access resolution.
//!
//! Identifiers are owned newtypes; resolution only borrows them.

use std::fmt;

/// The effect of an access rule or decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Effect {
    /// Access is allowed.
    Allow,
    /// Access is denied.
    #[default]
    Deny,
}

impl Effect {
    /// Returns `true` if this effect is `Allow`.
    #[inline]
    pub fn is_allow(&self) -> bool {
        matches!(self, Effect::Allow)
    }

    /// Returns `true` if this effect is `Deny`.
    #[inline]
    pub fn is_deny(&self) -> bool {
        matches!(self, Effect::Deny)
    }

    /// Map the stored `allow_or_deny` flag to an effect.
    #[inline]
    pub const fn from_allow(allow_or_deny: bool) -> Self {
        if allow_or_deny {
            Effect::Allow
        } else {
            Effect::Deny
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Allow => f.write_str("allow"),
            Effect::Deny => f.write_str("deny"),
        }
    }
}

/// A specific account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u64);

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// A corp, keyed by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CorpId(pub String);

impl CorpId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CorpId {
    fn from(name: &str) -> Self {
        CorpId(name.to_owned())
    }
}

impl From<String> for CorpId {
    fn from(name: String) -> Self {
        CorpId(name)
    }
}

impl fmt::Display for CorpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corp:{}", self.0)
    }
}

/// A named capability or role, e.g. `loot_tracker_admin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PermissionId(pub String);

impl PermissionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PermissionId {
    fn from(name: &str) -> Self {
        PermissionId(name.to_owned())
    }
}

impl From<String> for PermissionId {
    fn from(name: String) -> Self {
        PermissionId(name)
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "perm:{}", self.0)
    }
}

/// Why a decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The entity at `index` had the highest order among the matches.
    Matched {
        /// Position of the winning entity in the evaluated list.
        index: usize,
        /// Its order.
        order: u32,
    },
    /// Nothing matched; the fallback effect was applied.
    NoMatchingEntity,
}

/// The result of resolving a set of entities for an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The final effect (Allow or Deny).
    pub effect: Effect,
    /// What produced the effect.
    pub reason: Reason,
}

impl Decision {
    /// Create a new decision.
    #[inline]
    pub const fn new(effect: Effect, reason: Reason) -> Self {
        Decision { effect, reason }
    }

    /// Decision produced by a winning entity.
    #[inline]
    pub const fn matched(effect: Effect, index: usize, order: u32) -> Self {
        Decision::new(effect, Reason::Matched { index, order })
    }

    /// Decision produced by the fallback.
    #[inline]
    pub const fn fallback(effect: Effect) -> Self {
        Decision::new(effect, Reason::NoMatchingEntity)
    }

    /// Returns `true` if this decision allows access.
    #[inline]
    pub fn is_allow(&self) -> bool {
        self.effect.is_allow()
    }

    /// Returns `true` if this decision denies access.
    #[inline]
    pub fn is_deny(&self) -> bool {
        self.effect.is_deny()
    }

    /// The winning order, if an entity matched.
    pub fn order(&self) -> Option<u32> {
        match self.reason {
            Reason::Matched { order, .. } => Some(order),
            Reason::NoMatchingEntity => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect() {
        assert!(Effect::Allow.is_allow());
        assert!(!Effect::Allow.is_deny());
        assert!(!Effect::Deny.is_allow());
        assert!(Effect::Deny.is_deny());
        assert_eq!(Effect::default(), Effect::Deny);
    }

    #[test]
    fn test_effect_from_flag() {
        assert_eq!(Effect::from_allow(true), Effect::Allow);
        assert_eq!(Effect::from_allow(false), Effect::Deny);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(UserId(7).to_string(), "user:7");
        assert_eq!(CorpId::from("GOOSE").to_string(), "corp:GOOSE");
        assert_eq!(PermissionId::from("loot_tracker").to_string(), "perm:loot_tracker");
    }

    #[test]
    fn test_decision() {
        let allow = Decision::matched(Effect::Allow, 2, 10);
        assert!(allow.is_allow());
        assert!(!allow.is_deny());
        assert_eq!(allow.order(), Some(10));

        let deny = Decision::fallback(Effect::Deny);
        assert!(!deny.is_allow());
        assert!(deny.is_deny());
        assert_eq!(deny.reason, Reason::NoMatchingEntity);
        assert_eq!(deny.order(), None);
    }
}
