//! Movement domain: system modules for locomotion updates.

pub(crate) mod movement;

pub(crate) use movement::{drive_controllers, log_motor_events, update_controllers};
