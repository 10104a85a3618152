//! Illustrative scenario: a fleet with owner, loot-tracker members and a
//! blocked alt corp.
//!
//! 1. The owner and loot-tracker admins are built-in admins.
//! 2. Anyone with `loot_tracker` may view and join.
//! 3. A corp deny blocks joining; a user allow re-admits one pilot.

use goosegate::{Actor, Capability, CrudAccessController, PermissibleEntity};

const LOOT_TRACKER: &str = "loot_tracker";
const LOOT_TRACKER_ADMIN: &str = "loot_tracker_admin";

fn main() {
    let mut fleet = CrudAccessController::wrapper([
        PermissibleEntity::allow_user(1u64),
        PermissibleEntity::allow_perm(LOOT_TRACKER_ADMIN),
    ])
    .with_defaults([
        (Capability::View, PermissibleEntity::allow_perm(LOOT_TRACKER)),
        (Capability::Use, PermissibleEntity::allow_perm(LOOT_TRACKER)),
    ]);

    fleet.grant(Capability::Use, PermissibleEntity::deny_corp("ALT"));
    fleet.grant(Capability::Use, PermissibleEntity::allow_user(42u64));

    println!("--- goosegate fleet access ---");
    for (capability, entity) in fleet.iter() {
        println!(
            "{capability:>6}: {:?} {:?} {:?} -> {} (order {})",
            entity.user(),
            entity.corp(),
            entity.permission(),
            entity.effect(),
            entity.order()
        );
    }

    let member = Actor::new(2u64).in_corp("GOOSE").with_permission(LOOT_TRACKER);
    let alt = Actor::new(3u64).in_corp("ALT").with_permission(LOOT_TRACKER);
    let trusted_alt = Actor::new(42u64).in_corp("ALT").with_permission(LOOT_TRACKER);

    for (name, actor) in [("member", &member), ("alt", &alt), ("trusted alt", &trusted_alt)] {
        let decision = fleet.decide(actor, Capability::Use);
        println!("{name} joins: {} ({:?})", decision.effect, decision.reason);
    }
    assert!(fleet.can_use(&member));
    assert!(!fleet.can_use(&alt));
    assert!(fleet.can_use(&trusted_alt));

    // Built-in grants stay put.
    if let Err(err) = fleet.revoke(Capability::Admin, 0) {
        println!("revoking owner: {err}");
    }
}
