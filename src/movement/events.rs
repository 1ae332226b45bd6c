//! Movement domain: messages for controller transitions.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A jump impulse was applied.
#[derive(Debug)]
pub struct PlayerJumped {
    pub controller: Entity,
}

impl Message for PlayerJumped {}

/// A variable-height jump settled on the ground.
#[derive(Debug)]
pub struct PlayerLanded {
    pub controller: Entity,
}

impl Message for PlayerLanded {}
