//! JSON reports printed by the CLI.

use goosegate::{
    backfill_orders, AclError, Actor, Capability, CrudAccessController, Decision, EntityId,
    EntityStore, MemoryStore, PermissibleEntity, Reason,
};
use serde::Serialize;

use crate::ast::AccessFile;
use crate::loader::LoadError;

/// One entity with the order a backfill assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    pub controller: String,
    pub capability: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    pub allow_or_deny: bool,
    pub built_in: bool,
    pub order: u32,
}

/// Run every entity in the file through the order backfill.
pub fn order_rows(file: &AccessFile) -> Result<Vec<OrderRow>, AclError> {
    let mut store = MemoryStore::new();
    let mut owners: Vec<(EntityId, String, Capability)> = Vec::new();

    for def in &file.controllers {
        for (capability, entity) in def.grants() {
            // Rows arrive without an order, as they would from a fresh table.
            let id = store.insert(entity.to_entity().with_stored_order(0));
            owners.push((id, def.name.clone(), capability));
        }
    }

    let report = backfill_orders(&mut store)?;
    tracing::info!(
        scanned = report.scanned,
        changed = report.changed,
        "computed orders"
    );

    let mut rows = Vec::with_capacity(owners.len());
    for (id, controller, capability) in owners {
        let entity = store
            .get(id)
            .map_err(|source| AclError::Store { id, source })?;
        if let Some(entity) = entity {
            rows.push(OrderRow::new(controller, capability, &entity));
        }
    }
    Ok(rows)
}

impl OrderRow {
    fn new(controller: String, capability: Capability, entity: &PermissibleEntity) -> Self {
        OrderRow {
            controller,
            capability: capability.to_string(),
            user: entity.user().map(|u| u.0),
            corp: entity.corp().map(|c| c.as_str().to_owned()),
            permission: entity.permission().map(|p| p.as_str().to_owned()),
            allow_or_deny: entity.allow_or_deny(),
            built_in: entity.is_built_in(),
            order: entity.order(),
        }
    }
}

/// Outcome of a single access check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub controller: String,
    pub user: u64,
    pub capability: String,
    pub strict: bool,
    pub allowed: bool,
    /// `matched` or `fallback`.
    pub reason: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Evaluate one capability for one actor against a named controller.
pub fn check(
    file: &AccessFile,
    controller: &str,
    user: u64,
    capability: Capability,
    strict: bool,
) -> Result<CheckReport, LoadError> {
    let access: CrudAccessController = file.controller(controller)?;
    let actor: Actor = file.actor(user)?;

    let decision: Decision = if strict {
        access.decide_strict(&actor, capability)
    } else {
        access.decide(&actor, capability)
    };

    Ok(CheckReport {
        controller: controller.to_owned(),
        user,
        capability: capability.to_string(),
        strict,
        allowed: decision.is_allow(),
        reason: match decision.reason {
            Reason::Matched { .. } => "matched",
            Reason::NoMatchingEntity => "fallback",
        },
        order: decision.order(),
    })
}
