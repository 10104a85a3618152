//! Translation from access file AST into goosegate types.

use std::collections::BTreeMap;

use goosegate::{
    Actor, Capability, CorpId, CrudAccessController, Effect, Fallback, PermissibleEntity,
    PermissionId, UserId,
};

use crate::ast::{AccessFile, ActorDef, ControllerDef, EffectName, EntityDef};
use crate::loader::LoadError;

impl From<EffectName> for Effect {
    fn from(name: EffectName) -> Self {
        match name {
            EffectName::Allow => Effect::Allow,
            EffectName::Deny => Effect::Deny,
        }
    }
}

impl EntityDef {
    pub fn to_entity(&self) -> PermissibleEntity {
        let entity = PermissibleEntity::new(
            self.user.map(UserId),
            self.corp.as_deref().map(CorpId::from),
            self.permission.as_deref().map(PermissionId::from),
            self.effect.into(),
        );
        if self.built_in {
            entity.built_in()
        } else {
            entity
        }
    }
}

impl ControllerDef {
    /// Grants per capability, in file order.
    pub fn grants(&self) -> impl Iterator<Item = (Capability, &EntityDef)> {
        [
            (Capability::View, &self.view),
            (Capability::Use, &self.use_),
            (Capability::Edit, &self.edit),
            (Capability::Delete, &self.delete),
            (Capability::Admin, &self.admin),
        ]
        .into_iter()
        .flat_map(|(capability, defs)| defs.iter().map(move |s| (capability, s)))
    }

    pub fn to_controller(&self, default_fallback: EffectName) -> CrudAccessController {
        let fallback = self.fallback.unwrap_or(default_fallback);
        self.grants().fold(
            CrudAccessController::new().with_fallback(Fallback(fallback.into())),
            |mut controller, (capability, def)| {
                controller.grant(capability, def.to_entity());
                controller
            },
        )
    }
}

impl ActorDef {
    pub fn to_actor(&self) -> Actor {
        let actor = self
            .corps
            .iter()
            .fold(Actor::new(self.user), |a, corp| a.in_corp(corp.as_str()));
        self.permissions
            .iter()
            .fold(actor, |a, perm| a.with_permission(perm.as_str()))
    }
}

impl AccessFile {
    pub fn fallback(&self) -> Fallback {
        Fallback(self.fallback.into())
    }

    /// Every controller by name.
    pub fn controllers(&self) -> Result<BTreeMap<String, CrudAccessController>, LoadError> {
        let mut out = BTreeMap::new();
        for def in &self.controllers {
            if out.contains_key(&def.name) {
                return Err(LoadError::DuplicateController(def.name.clone()));
            }
            out.insert(def.name.clone(), def.to_controller(self.fallback));
        }
        Ok(out)
    }

    pub fn controller(&self, name: &str) -> Result<CrudAccessController, LoadError> {
        self.controllers()?
            .remove(name)
            .ok_or_else(|| LoadError::UnknownController(name.to_owned()))
    }

    /// Every actor by user id.
    pub fn actors(&self) -> Result<BTreeMap<u64, Actor>, LoadError> {
        let mut out = BTreeMap::new();
        for def in &self.actors {
            if out.contains_key(&def.user) {
                return Err(LoadError::DuplicateActor(def.user));
            }
            out.insert(def.user, def.to_actor());
        }
        Ok(out)
    }

    pub fn actor(&self, user: u64) -> Result<Actor, LoadError> {
        self.actors()?
            .remove(&user)
            .ok_or(LoadError::UnknownActor(user))
    }
}
