//! # goosegate
//!
//! Specificity-ranked allow/deny access rules.
//!
//! A [`PermissibleEntity`] grants or denies a capability to some
//! combination of user, corp and permission group. Each entity carries an
//! `order` computed from which of those fields it names; when several
//! entities match an [`Actor`], the highest order decides and a deny beats
//! an allow at the same order.
//!
//! ```
//! use goosegate::{Actor, Capability, CrudAccessController, PermissibleEntity};
//!
//! let fleet = CrudAccessController::wrapper([PermissibleEntity::allow_user(1u64)])
//!     .with_defaults([
//!         (Capability::View, PermissibleEntity::allow_perm("loot_tracker")),
//!         (Capability::View, PermissibleEntity::deny_corp("ALT")),
//!     ]);
//!
//! let member = Actor::new(2u64).with_permission("loot_tracker");
//! assert!(fleet.can_view(&member));
//!
//! let alt = Actor::new(3u64).in_corp("ALT").with_permission("loot_tracker");
//! assert!(!fleet.can_view(&alt));
//!
//! assert!(fleet.can_admin(&Actor::new(1u64)));
//! ```

pub mod backfill;
pub mod controller;
pub mod entity;
pub mod error;
pub mod priority;
pub mod resolve;
pub mod stats;
pub mod store;
pub mod types;

pub use backfill::{backfill_orders, BackfillReport};
pub use controller::{filter_controlled, AccessControlled, Capability, CrudAccessController};
pub use entity::{Actor, PermissibleEntity};
pub use error::{AclError, StoreError};
pub use priority::{compute_priority, priority_for, Specificity, MAX_PRIORITY, MIN_PRIORITY};
pub use resolve::{resolve, resolve_with_stats, Fallback};
pub use stats::ResolutionStats;
pub use store::{EntityId, EntityStore, MemoryStore};
pub use types::{CorpId, Decision, Effect, PermissionId, Reason, UserId};
