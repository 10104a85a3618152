//! Property tests for the priority table and resolution.

use goosegate::{
    compute_priority, resolve, Actor, CorpId, Effect, Fallback, PermissibleEntity, PermissionId,
    Reason, UserId, MAX_PRIORITY, MIN_PRIORITY,
};
use proptest::prelude::*;

fn arb_effect() -> impl Strategy<Value = Effect> {
    prop_oneof![Just(Effect::Allow), Just(Effect::Deny)]
}

fn entity_with(user: bool, corp: bool, permission: bool, effect: Effect) -> PermissibleEntity {
    PermissibleEntity::new(
        user.then_some(UserId(1)),
        corp.then_some(CorpId::from("GOOSE")),
        permission.then_some(PermissionId::from("loot_tracker")),
        effect,
    )
}

fn arb_entity() -> impl Strategy<Value = PermissibleEntity> {
    (
        prop::option::of(1u64..4),
        prop::option::of(prop::sample::select(vec!["GOOSE", "ALT"])),
        prop::option::of(prop::sample::select(vec!["loot_tracker", "basic_access"])),
        arb_effect(),
    )
        .prop_map(|(user, corp, permission, effect)| {
            PermissibleEntity::new(
                user.map(UserId),
                corp.map(CorpId::from),
                permission.map(PermissionId::from),
                effect,
            )
        })
}

proptest! {
    #[test]
    fn adding_a_field_never_lowers_priority(
        user in any::<bool>(),
        corp in any::<bool>(),
        permission in any::<bool>(),
        effect in arb_effect(),
    ) {
        let base = compute_priority(&entity_with(user, corp, permission, effect));
        prop_assert!(compute_priority(&entity_with(true, corp, permission, effect)) >= base);
        prop_assert!(compute_priority(&entity_with(user, true, permission, effect)) >= base);
        prop_assert!(compute_priority(&entity_with(user, corp, true, effect)) >= base);
    }

    #[test]
    fn deny_is_exactly_one_above_allow(
        user in any::<bool>(),
        corp in any::<bool>(),
        permission in any::<bool>(),
    ) {
        let allow = compute_priority(&entity_with(user, corp, permission, Effect::Allow));
        let deny = compute_priority(&entity_with(user, corp, permission, Effect::Deny));
        prop_assert_eq!(deny, allow + 1);
    }

    #[test]
    fn priority_stays_in_bounds(entity in arb_entity()) {
        let p = entity.order();
        prop_assert!((MIN_PRIORITY..=MAX_PRIORITY).contains(&p));
        prop_assert_eq!(p, compute_priority(&entity));
    }

    #[test]
    fn winner_has_maximal_order_among_matches(
        entities in prop::collection::vec(arb_entity(), 0..12),
        user in 1u64..4,
        in_goose in any::<bool>(),
        has_loot in any::<bool>(),
    ) {
        let mut actor = Actor::new(user);
        if in_goose {
            actor = actor.in_corp("GOOSE");
        }
        if has_loot {
            actor = actor.with_permission("loot_tracker");
        }

        let decision = resolve(&entities, &actor, Fallback::DENY);
        let matching: Vec<&PermissibleEntity> =
            entities.iter().filter(|e| e.matches(&actor)).collect();

        match decision.reason {
            Reason::NoMatchingEntity => {
                prop_assert!(matching.is_empty());
                prop_assert_eq!(decision.effect, Effect::Deny);
            }
            Reason::Matched { index, order } => {
                let max = matching.iter().map(|e| e.order()).max();
                prop_assert_eq!(Some(order), max);
                prop_assert!(entities[index].matches(&actor));
                let deny_at_max = matching
                    .iter()
                    .any(|e| e.order() == order && e.effect().is_deny());
                let expected = if deny_at_max { Effect::Deny } else { Effect::Allow };
                prop_assert_eq!(decision.effect, expected);
            }
        }
    }
}
