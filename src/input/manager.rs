//! Input domain: the process-wide input manager.
//!
//! At most one `InputManager` is live per world. It is stored as a resource,
//! so it outlives `GameState` transitions and is torn down only by the
//! instance that created it.

use bevy::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::input::PlayerInput;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Identity of one created input manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputManagerError {
    /// Another manager is already live; the new one was discarded.
    AlreadyExists(InstanceId),
}

impl std::fmt::Display for InputManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputManagerError::AlreadyExists(id) => {
                write!(f, "input manager {:?} is already live", id)
            }
        }
    }
}

impl std::error::Error for InputManagerError {}

#[derive(Resource, Debug)]
pub struct InputManager {
    id: InstanceId,
}

impl InputManager {
    /// Create the manager unless one is already live.
    pub fn create(world: &mut World) -> Result<InstanceId, InputManagerError> {
        if let Some(existing) = Self::instance(world) {
            return Err(InputManagerError::AlreadyExists(existing.id));
        }

        let id = InstanceId(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed));
        world.insert_resource(InputManager { id });
        Ok(id)
    }

    /// The live manager, if one has been created.
    pub fn instance(world: &World) -> Option<&InputManager> {
        world.get_resource::<InputManager>()
    }

    /// Remove the manager, but only if `id` is the live instance.
    /// The shared snapshot is reset so no stale press outlives it.
    /// Returns whether anything was removed.
    pub fn teardown(world: &mut World, id: InstanceId) -> bool {
        if Self::instance(world).is_some_and(|manager| manager.id == id) {
            world.remove_resource::<InputManager>();
            if let Some(mut input) = world.get_resource_mut::<PlayerInput>() {
                *input = PlayerInput::default();
            }
            true
        } else {
            false
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }
}
