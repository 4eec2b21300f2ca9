//! The named-group registry of all actors in the current scene

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::actor::Actor;

/// Cast roles. Robots and Banners hold exactly one actor during active
/// play; Artifacts holds zero or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Robots,
    Banners,
    Artifacts,
}

impl Role {
    /// Fixed draw order for [`Cast::all_actors`].
    pub const ALL: [Role; 3] = [Role::Banners, Role::Robots, Role::Artifacts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Robots => "robots",
            Role::Banners => "banners",
            Role::Artifacts => "artifacts",
        }
    }
}

/// Role -> insertion-ordered actors. The cast hands out actor ids; an id is
/// never reused for its lifetime.
#[derive(Debug, Clone, Default)]
pub struct Cast {
    groups: HashMap<Role, Vec<Actor>>,
    next_id: u32,
}

impl Cast {
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
            next_id: 1,
        }
    }

    /// Add an actor under a role, assigning it a fresh id. Returns the id.
    pub fn add_actor(&mut self, role: Role, mut actor: Actor) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        actor.id = id;
        self.groups.entry(role).or_default().push(actor);
        id
    }

    /// Remove the actor with the given id from a role, keeping order.
    pub fn remove_actor(&mut self, role: Role, id: u32) -> Option<Actor> {
        let group = self.groups.get_mut(&role)?;
        let index = group.iter().position(|actor| actor.id == id)?;
        Some(group.remove(index))
    }

    /// Actors under a role, in insertion order.
    pub fn actors(&self, role: Role) -> &[Actor] {
        self.groups.get(&role).map(Vec::as_slice).unwrap_or_default()
    }

    /// Look up one actor by role and id.
    pub fn actor(&self, role: Role, id: u32) -> Option<&Actor> {
        self.actors(role).iter().find(|actor| actor.id == id)
    }

    pub fn actor_mut(&mut self, role: Role, id: u32) -> Option<&mut Actor> {
        self.groups
            .get_mut(&role)?
            .iter_mut()
            .find(|actor| actor.id == id)
    }

    /// The first actor under a role.
    ///
    /// # Panics
    ///
    /// Panics if the role is empty. Robots and Banners are required setup;
    /// a missing one is a setup bug, not a runtime condition.
    pub fn first_actor(&self, role: Role) -> &Actor {
        self.actors(role)
            .first()
            .unwrap_or_else(|| panic!("no actors in role {:?}", role.as_str()))
    }

    /// Mutable variant of [`Cast::first_actor`].
    ///
    /// # Panics
    ///
    /// Panics if the role is empty.
    pub fn first_actor_mut(&mut self, role: Role) -> &mut Actor {
        self.groups
            .get_mut(&role)
            .and_then(|group| group.first_mut())
            .unwrap_or_else(|| panic!("no actors in role {:?}", role.as_str()))
    }

    /// All actors across every role, in fixed role order then insertion
    /// order. Stable within a tick; used for drawing.
    pub fn all_actors(&self) -> Vec<&Actor> {
        Role::ALL
            .iter()
            .flat_map(|role| self.actors(*role))
            .collect()
    }
}
