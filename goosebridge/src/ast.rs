//! Access file AST types
//!
//! These types mirror the YAML access file one to one.
//! Kept deliberately simple - this is data, not behavior.

use serde::{Deserialize, Serialize};

/// Root of an access file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AccessFile {
    /// Effect when no entity matches. Defaults to deny.
    #[serde(default)]
    pub fallback: EffectName,
    #[serde(default)]
    pub controllers: Vec<ControllerDef>,
    #[serde(default)]
    pub actors: Vec<ActorDef>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectName {
    Allow,
    #[default]
    Deny,
}

/// One controlled object and its per-capability grants.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerDef {
    pub name: String,
    /// Overrides the file-level fallback for this controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<EffectName>,
    #[serde(default)]
    pub view: Vec<EntityDef>,
    // `use` is a keyword
    #[serde(default, rename = "use")]
    pub use_: Vec<EntityDef>,
    #[serde(default)]
    pub edit: Vec<EntityDef>,
    #[serde(default)]
    pub delete: Vec<EntityDef>,
    #[serde(default)]
    pub admin: Vec<EntityDef>,
}

/// A single grant or revocation.
///
/// There is no `order` key: orders are always computed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(default = "allow")]
    pub effect: EffectName,
    #[serde(default)]
    pub built_in: bool,
}

fn allow() -> EffectName {
    EffectName::Allow
}

/// A user with their corp memberships and held permissions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ActorDef {
    pub user: u64,
    #[serde(default)]
    pub corps: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}
