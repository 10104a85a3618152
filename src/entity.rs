//! Access rules and actor matching.
//!
//! A `PermissibleEntity` names any combination of user, corp and
//! permission. Every populated field must match the actor; an entity with
//! nothing populated matches everyone.

use crate::priority::{compute_priority, Specificity};
use crate::types::{CorpId, Effect, PermissionId, UserId};

/// The subject of an access check.
///
/// Built once per request from the user's characters and permission
/// groups, then reused across every check in that request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    user: UserId,
    corps: Vec<CorpId>,
    permissions: Vec<PermissionId>,
}

impl Actor {
    /// An actor with no corps and no permissions.
    pub fn new(user: impl Into<UserId>) -> Self {
        Actor {
            user: user.into(),
            corps: Vec::new(),
            permissions: Vec::new(),
        }
    }

    /// Add a corp membership.
    pub fn in_corp(mut self, corp: impl Into<CorpId>) -> Self {
        let corp = corp.into();
        if !self.corps.contains(&corp) {
            self.corps.push(corp);
        }
        self
    }

    /// Add a held permission.
    pub fn with_permission(mut self, permission: impl Into<PermissionId>) -> Self {
        let permission = permission.into();
        if !self.permissions.contains(&permission) {
            self.permissions.push(permission);
        }
        self
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn corps(&self) -> &[CorpId] {
        &self.corps
    }

    pub fn permissions(&self) -> &[PermissionId] {
        &self.permissions
    }

    pub fn is_in_corp(&self, corp: &CorpId) -> bool {
        self.corps.iter().any(|c| c == corp)
    }

    pub fn has_permission(&self, permission: &PermissionId) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// An access-control rule.
///
/// Fields are private so `order` can never drift from the fields it is
/// computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissibleEntity {
    user: Option<UserId>,
    corp: Option<CorpId>,
    permission: Option<PermissionId>,
    effect: Effect,
    order: u32,
    built_in: bool,
}

impl PermissibleEntity {
    /// Create an entity; its order is computed immediately.
    pub fn new(
        user: Option<UserId>,
        corp: Option<CorpId>,
        permission: Option<PermissionId>,
        effect: Effect,
    ) -> Self {
        let mut entity = PermissibleEntity {
            user,
            corp,
            permission,
            effect,
            order: 0,
            built_in: false,
        };
        entity.recompute_order();
        entity
    }

    pub fn allow_user(user: impl Into<UserId>) -> Self {
        Self::new(Some(user.into()), None, None, Effect::Allow)
    }

    pub fn deny_user(user: impl Into<UserId>) -> Self {
        Self::new(Some(user.into()), None, None, Effect::Deny)
    }

    pub fn allow_corp(corp: impl Into<CorpId>) -> Self {
        Self::new(None, Some(corp.into()), None, Effect::Allow)
    }

    pub fn deny_corp(corp: impl Into<CorpId>) -> Self {
        Self::new(None, Some(corp.into()), None, Effect::Deny)
    }

    pub fn allow_perm(permission: impl Into<PermissionId>) -> Self {
        Self::new(None, None, Some(permission.into()), Effect::Allow)
    }

    pub fn deny_perm(permission: impl Into<PermissionId>) -> Self {
        Self::new(None, None, Some(permission.into()), Effect::Deny)
    }

    pub fn allow_everyone() -> Self {
        Self::new(None, None, None, Effect::Allow)
    }

    pub fn deny_everyone() -> Self {
        Self::new(None, None, None, Effect::Deny)
    }

    /// Mark this entity as a built-in grant of its owning object.
    pub fn built_in(mut self) -> Self {
        self.built_in = true;
        self
    }

    pub fn user(&self) -> Option<UserId> {
        self.user
    }

    pub fn corp(&self) -> Option<&CorpId> {
        self.corp.as_ref()
    }

    pub fn permission(&self) -> Option<&PermissionId> {
        self.permission.as_ref()
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// The stored `allow_or_deny` flag.
    pub fn allow_or_deny(&self) -> bool {
        self.effect.is_allow()
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn is_built_in(&self) -> bool {
        self.built_in
    }

    pub fn specificity(&self) -> Specificity {
        Specificity::of(
            self.user.is_some(),
            self.corp.is_some(),
            self.permission.is_some(),
        )
    }

    pub fn set_user(&mut self, user: Option<UserId>) {
        self.user = user;
        self.recompute_order();
    }

    pub fn set_corp(&mut self, corp: Option<CorpId>) {
        self.corp = corp;
        self.recompute_order();
    }

    pub fn set_permission(&mut self, permission: Option<PermissionId>) {
        self.permission = permission;
        self.recompute_order();
    }

    pub fn set_effect(&mut self, effect: Effect) {
        self.effect = effect;
        self.recompute_order();
    }

    /// Recompute `order` from the current fields.
    ///
    /// Returns `true` if the stored order changed.
    pub fn recompute_order(&mut self) -> bool {
        let order = compute_priority(self);
        let changed = order != self.order;
        self.order = order;
        changed
    }

    /// Overwrite the stored order without recomputing it.
    ///
    /// Only for rows read back from storage, which may predate the
    /// scoring table. Run a backfill to repair them.
    pub fn with_stored_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Check whether every populated field matches the actor.
    pub fn matches(&self, actor: &Actor) -> bool {
        self.user.map_or(true, |u| u == actor.user())
            && self.corp.as_ref().map_or(true, |c| actor.is_in_corp(c))
            && self
                .permission
                .as_ref()
                .map_or(true, |p| actor.has_permission(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goose_member() -> Actor {
        Actor::new(1u64)
            .in_corp("GOOSE")
            .with_permission("loot_tracker")
    }

    #[test]
    fn test_everyone_matches_anyone() {
        let e = PermissibleEntity::allow_everyone();
        assert!(e.matches(&goose_member()));
        assert!(e.matches(&Actor::new(99u64)));
        assert_eq!(e.order(), 0);
    }

    #[test]
    fn test_user_matcher() {
        let e = PermissibleEntity::allow_user(1u64);
        assert!(e.matches(&goose_member()));
        assert!(!e.matches(&Actor::new(2u64)));
    }

    #[test]
    fn test_corp_matcher() {
        let e = PermissibleEntity::deny_corp("GOOSE");
        assert!(e.matches(&goose_member()));
        assert!(!e.matches(&Actor::new(1u64).in_corp("ALT")));
        assert!(!e.matches(&Actor::new(1u64)));
    }

    #[test]
    fn test_permission_matcher() {
        let e = PermissibleEntity::allow_perm("loot_tracker");
        assert!(e.matches(&goose_member()));
        assert!(!e.matches(&Actor::new(1u64).with_permission("ship_price_admin")));
    }

    #[test]
    fn test_all_fields_must_match() {
        let e = PermissibleEntity::new(
            Some(UserId(1)),
            Some(CorpId::from("GOOSE")),
            Some(PermissionId::from("loot_tracker_admin")),
            Effect::Allow,
        );
        assert_eq!(e.order(), 20);
        assert!(!e.matches(&goose_member()));
        assert!(e.matches(&goose_member().with_permission("loot_tracker_admin")));
    }

    #[test]
    fn test_setters_recompute_order() {
        let mut e = PermissibleEntity::allow_user(1u64);
        assert_eq!(e.order(), 10);

        e.set_corp(Some(CorpId::from("GOOSE")));
        assert_eq!(e.order(), 15);

        e.set_effect(Effect::Deny);
        assert_eq!(e.order(), 16);
        assert!(!e.allow_or_deny());

        e.set_user(None);
        assert_eq!(e.order(), 6);

        e.set_permission(Some(PermissionId::from("basic_access")));
        assert_eq!(e.order(), 8);
    }

    #[test]
    fn test_stale_order_is_repaired() {
        let mut e = PermissibleEntity::allow_perm("basic_access").with_stored_order(0);
        assert_eq!(e.order(), 0);
        assert!(e.recompute_order());
        assert_eq!(e.order(), 3);
        assert!(!e.recompute_order());
    }

    #[test]
    fn test_built_in_flag() {
        let e = PermissibleEntity::allow_user(1u64).built_in();
        assert!(e.is_built_in());
        assert!(!PermissibleEntity::allow_user(1u64).is_built_in());
    }

    #[test]
    fn test_actor_dedups_memberships() {
        let a = Actor::new(1u64).in_corp("GOOSE").in_corp("GOOSE");
        assert_eq!(a.corps().len(), 1);
        let a = a.with_permission("x").with_permission("x");
        assert_eq!(a.permissions().len(), 1);
    }
}
