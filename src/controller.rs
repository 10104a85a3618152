//! Per-object access controllers.
//!
//! Each controlled object (a fleet, a price list, a data set) owns a
//! `CrudAccessController` with one entity list per capability. The
//! owning object seeds built-in admin grants that cannot be revoked, plus
//! default grants that staff may later edit.

use std::fmt;

use crate::entity::{Actor, PermissibleEntity};
use crate::error::{AclError, Result};
use crate::resolve::{resolve, Fallback};
use crate::types::{Decision, Reason};

/// What an actor is trying to do with a controlled object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    View,
    Use,
    Edit,
    Delete,
    Admin,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::View,
        Capability::Use,
        Capability::Edit,
        Capability::Delete,
        Capability::Admin,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Capability::View => "view",
            Capability::Use => "use",
            Capability::Edit => "edit",
            Capability::Delete => "delete",
            Capability::Admin => "admin",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Access rules for one controlled object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrudAccessController {
    viewable_by: Vec<PermissibleEntity>,
    usable_by: Vec<PermissibleEntity>,
    editable_by: Vec<PermissibleEntity>,
    deletable_by: Vec<PermissibleEntity>,
    adminable_by: Vec<PermissibleEntity>,
    fallback: Fallback,
}

impl CrudAccessController {
    /// An empty controller. Nobody can do anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A controller seeded with the owning object's built-in admins.
    pub fn wrapper(adminable_by: impl IntoIterator<Item = PermissibleEntity>) -> Self {
        CrudAccessController {
            adminable_by: adminable_by.into_iter().map(|e| e.built_in()).collect(),
            ..Self::default()
        }
    }

    /// Add the owning object's default grants.
    pub fn with_defaults(
        mut self,
        defaults: impl IntoIterator<Item = (Capability, PermissibleEntity)>,
    ) -> Self {
        for (capability, entity) in defaults {
            self.grant(capability, entity);
        }
        self
    }

    /// Set the effect applied when nothing matches.
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback
    }

    pub fn entities(&self, capability: Capability) -> &[PermissibleEntity] {
        match capability {
            Capability::View => &self.viewable_by,
            Capability::Use => &self.usable_by,
            Capability::Edit => &self.editable_by,
            Capability::Delete => &self.deletable_by,
            Capability::Admin => &self.adminable_by,
        }
    }

    fn entities_mut(&mut self, capability: Capability) -> &mut Vec<PermissibleEntity> {
        match capability {
            Capability::View => &mut self.viewable_by,
            Capability::Use => &mut self.usable_by,
            Capability::Edit => &mut self.editable_by,
            Capability::Delete => &mut self.deletable_by,
            Capability::Admin => &mut self.adminable_by,
        }
    }

    /// Add a grant or revocation for `capability`.
    pub fn grant(&mut self, capability: Capability, mut entity: PermissibleEntity) {
        entity.recompute_order();
        tracing::debug!(
            %capability,
            order = entity.order(),
            effect = %entity.effect(),
            "granting entity"
        );
        self.entities_mut(capability).push(entity);
    }

    /// Remove the grant at `index` of `capability`'s list.
    pub fn revoke(&mut self, capability: Capability, index: usize) -> Result<PermissibleEntity> {
        let list = self.entities_mut(capability);
        let len = list.len();
        let Some(entity) = list.get(index) else {
            return Err(AclError::NoSuchGrant {
                capability,
                index,
                len,
            });
        };
        if entity.is_built_in() {
            return Err(AclError::BuiltIn { capability, index });
        }
        tracing::debug!(%capability, index, "revoking entity");
        Ok(list.remove(index))
    }

    /// Resolve `capability`'s own list only.
    pub fn decide_strict(&self, actor: &Actor, capability: Capability) -> Decision {
        resolve(self.entities(capability), actor, self.fallback)
    }

    /// Resolve `capability`, treating a matched admin allow as granting it.
    ///
    /// An admin allow that only came from the fallback implies nothing.
    pub fn decide(&self, actor: &Actor, capability: Capability) -> Decision {
        if capability != Capability::Admin {
            let admin = self.decide_strict(actor, Capability::Admin);
            if admin.is_allow() && matches!(admin.reason, Reason::Matched { .. }) {
                return admin;
            }
        }
        self.decide_strict(actor, capability)
    }

    pub fn can(&self, actor: &Actor, capability: Capability) -> bool {
        self.decide(actor, capability).is_allow()
    }

    pub fn can_strict(&self, actor: &Actor, capability: Capability) -> bool {
        self.decide_strict(actor, capability).is_allow()
    }

    pub fn can_view(&self, actor: &Actor) -> bool {
        self.can(actor, Capability::View)
    }

    pub fn can_use(&self, actor: &Actor) -> bool {
        self.can(actor, Capability::Use)
    }

    /// With `strict`, admins do not implicitly hold edit.
    pub fn can_edit(&self, actor: &Actor, strict: bool) -> bool {
        if strict {
            self.can_strict(actor, Capability::Edit)
        } else {
            self.can(actor, Capability::Edit)
        }
    }

    pub fn can_delete(&self, actor: &Actor) -> bool {
        self.can(actor, Capability::Delete)
    }

    pub fn can_admin(&self, actor: &Actor) -> bool {
        self.can(actor, Capability::Admin)
    }

    /// Every entity with the capability it is attached to.
    pub fn iter(&self) -> impl Iterator<Item = (Capability, &PermissibleEntity)> {
        Capability::ALL
            .into_iter()
            .flat_map(move |c| self.entities(c).iter().map(move |e| (c, e)))
    }
}

/// Something guarded by a [`CrudAccessController`].
pub trait AccessControlled {
    fn access_controller(&self) -> &CrudAccessController;
}

impl AccessControlled for CrudAccessController {
    fn access_controller(&self) -> &CrudAccessController {
        self
    }
}

/// Keep only the items on which `actor` holds `capability`.
pub fn filter_controlled<'a, T, I>(items: I, actor: &Actor, capability: Capability) -> Vec<&'a T>
where
    T: AccessControlled + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| item.access_controller().can(actor, capability))
        .collect()
}
