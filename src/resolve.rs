//! Rule resolution: highest order wins, deny breaks ties.
//!
//! Resolution is a single linear pass over borrowed entities and never
//! allocates.

use crate::entity::{Actor, PermissibleEntity};
use crate::stats::ResolutionStats;
use crate::types::{Decision, Effect};

/// The effect applied when no entity matches the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fallback(pub Effect);

impl Fallback {
    /// Fail closed. This is the default.
    pub const DENY: Fallback = Fallback(Effect::Deny);
    /// Fail open.
    pub const ALLOW: Fallback = Fallback(Effect::Allow);

    #[inline]
    pub const fn effect(self) -> Effect {
        self.0
    }
}

/// Resolve the effective decision of `entities` for `actor`.
pub fn resolve<'e, I>(entities: I, actor: &Actor, fallback: Fallback) -> Decision
where
    I: IntoIterator<Item = &'e PermissibleEntity>,
{
    resolve_with_stats(entities, actor, fallback).0
}

/// Like [`resolve`], also reporting what was inspected.
pub fn resolve_with_stats<'e, I>(
    entities: I,
    actor: &Actor,
    fallback: Fallback,
) -> (Decision, ResolutionStats)
where
    I: IntoIterator<Item = &'e PermissibleEntity>,
{
    let mut stats = ResolutionStats::new();
    let mut best: Option<(usize, &PermissibleEntity)> = None;

    for (index, entity) in entities.into_iter().enumerate() {
        stats.inc_checked();
        if !entity.matches(actor) {
            continue;
        }
        stats.inc_matched();

        let wins = match best {
            None => true,
            Some((_, current)) => outranks(entity, current),
        };
        if wins {
            best = Some((index, entity));
        }
    }

    let decision = match best {
        Some((index, entity)) => {
            stats.winning_order = Some(entity.order());
            Decision::matched(entity.effect(), index, entity.order())
        }
        None => Decision::fallback(fallback.effect()),
    };

    tracing::trace!(
        user = %actor.user(),
        effect = %decision.effect,
        checked = stats.entities_checked,
        matched = stats.entities_matched,
        "resolved access"
    );

    (decision, stats)
}

/// Higher order wins; at equal order a deny beats an allow.
/// Earlier entities win otherwise.
#[inline]
fn outranks(candidate: &PermissibleEntity, current: &PermissibleEntity) -> bool {
    match candidate.order().cmp(&current.order()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => candidate.effect().is_deny() && current.effect().is_allow(),
    }
}
