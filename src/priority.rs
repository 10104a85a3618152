//! Specificity scoring for permissible entities.
//!
//! Every entity gets an integer `order`. When several entities match the
//! same actor, the highest order decides. Any rule naming a user outranks
//! every rule that does not, so the table is not a field count.

use crate::entity::PermissibleEntity;
use crate::types::Effect;

/// Lowest possible order: the allow-everyone rule.
pub const MIN_PRIORITY: u32 = 0;

/// Highest possible order: a deny naming user, corp and permission.
pub const MAX_PRIORITY: u32 = 21;

/// Which identifying fields of an entity are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specificity {
    /// No matcher set, matches everyone.
    Everyone,
    /// Permission only.
    Permission,
    /// Corp only.
    Corp,
    /// Corp and permission.
    CorpPermission,
    /// User only.
    User,
    /// User and permission.
    UserPermission,
    /// User and corp.
    UserCorp,
    /// User, corp and permission.
    UserCorpPermission,
}

impl Specificity {
    /// All eight field combinations, lowest score first.
    pub const ALL: [Specificity; 8] = [
        Specificity::Everyone,
        Specificity::Permission,
        Specificity::Corp,
        Specificity::CorpPermission,
        Specificity::User,
        Specificity::UserPermission,
        Specificity::UserCorp,
        Specificity::UserCorpPermission,
    ];

    /// Classify by which of user, corp and permission are set.
    pub const fn of(user: bool, corp: bool, permission: bool) -> Self {
        match (user, corp, permission) {
            (true, false, false) => Specificity::User,
            (true, false, true) => Specificity::UserPermission,
            (true, true, false) => Specificity::UserCorp,
            (true, true, true) => Specificity::UserCorpPermission,
            (false, true, false) => Specificity::Corp,
            (false, true, true) => Specificity::CorpPermission,
            (false, false, true) => Specificity::Permission,
            (false, false, false) => Specificity::Everyone,
        }
    }

    /// Score before the deny adjustment.
    pub const fn base_score(self) -> u32 {
        match self {
            Specificity::User => 10,
            Specificity::UserPermission => 12,
            Specificity::UserCorp => 15,
            Specificity::UserCorpPermission => 20,
            Specificity::Corp => 5,
            Specificity::CorpPermission => 7,
            Specificity::Permission => 3,
            Specificity::Everyone => 0,
        }
    }

    pub const fn has_user(self) -> bool {
        matches!(
            self,
            Specificity::User
                | Specificity::UserPermission
                | Specificity::UserCorp
                | Specificity::UserCorpPermission
        )
    }

    pub const fn has_corp(self) -> bool {
        matches!(
            self,
            Specificity::Corp
                | Specificity::CorpPermission
                | Specificity::UserCorp
                | Specificity::UserCorpPermission
        )
    }

    pub const fn has_permission(self) -> bool {
        matches!(
            self,
            Specificity::Permission
                | Specificity::CorpPermission
                | Specificity::UserPermission
                | Specificity::UserCorpPermission
        )
    }
}

/// Order for a field combination and effect.
///
/// A deny scores one above the allow at the same specificity, so it
/// overrides it.
#[inline]
pub const fn priority_for(specificity: Specificity, effect: Effect) -> u32 {
    match effect {
        Effect::Allow => specificity.base_score(),
        Effect::Deny => specificity.base_score() + 1,
    }
}

/// Compute the order of an entity from its populated fields and effect.
#[inline]
pub fn compute_priority(entity: &PermissibleEntity) -> u32 {
    priority_for(entity.specificity(), entity.effect())
}
