//! Movement domain: engine-agnostic player motor.
//!
//! The motor is split along the two host callbacks. `frame_update` runs once
//! per rendered frame: it samples input, queues requests and refreshes the
//! grounded flag. `fixed_update` runs once per physics step and is the only
//! place the body's velocity is touched.
//!
//! Behaviors that span several steps are explicit phases:
//! braking is `HorizontalPhase::Braking`, the variable-height fall is
//! `JumpPhase::Landing`. Each phase exists at most once per motor.

use bevy::prelude::*;

use crate::input::{InputAxis, InputButton, InputSource};
use crate::movement::body::{ForceMode, MotorBody, PhysicsQuery};
use crate::movement::{GameLayer, MovementParams, SpeedLimitMode};

/// Below this horizontal speed braking snaps straight to zero.
pub const BRAKE_SNAP_SPEED: f32 = 0.1;

/// Sprite height divided by this gives the grounded ray length.
pub const GROUND_RAY_DIVISOR: f32 = 1.4;

/// Grounded ray length for a sprite of `size` drawn at `scale`.
pub fn ground_ray_length(size: Vec2, scale: Vec3) -> f32 {
    (size.y * scale.y).abs() / GROUND_RAY_DIVISOR
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalPhase {
    #[default]
    Idle,
    Moving,
    Braking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Idle,
    /// Impulse accepted, applied on the next physics step.
    Pending,
    /// Variable-height gravity modifiers until the body settles.
    Landing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Horizontal,
    Vertical,
}

/// Coarse summary of what the motor is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotorState {
    #[default]
    None,
    Climbing,
    Jumping,
}

/// Downward ray used for the grounded check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundRay {
    pub origin: Vec2,
    pub length: f32,
}

/// Timing and world constants for one physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    pub dt: f32,
    pub gravity: Vec2,
}

/// Transitions that completed during a physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub jumped: bool,
    pub landed: bool,
    pub stopped: bool,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerMotor {
    horizontal: HorizontalPhase,
    jump: JumpPhase,
    climbing: bool,
    grounded: bool,
    speed_limit: f32,
    queued_force: Vec2,
    velocity: Vec2,
}

impl PlayerMotor {
    pub fn new(params: &MovementParams) -> Self {
        Self {
            horizontal: HorizontalPhase::Idle,
            jump: JumpPhase::Idle,
            climbing: false,
            grounded: false,
            speed_limit: params.speed_limit,
            queued_force: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    pub fn horizontal_phase(&self) -> HorizontalPhase {
        self.horizontal
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.jump
    }

    pub fn is_climbing(&self) -> bool {
        self.climbing
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Speed cap currently in effect.
    pub fn speed_limit(&self) -> f32 {
        self.speed_limit
    }

    /// Body velocity as last observed: after physics integration each
    /// frame, and after the motor's own changes each physics step.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Record the body velocity seen by the host this frame.
    pub fn observe_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn state(&self) -> MotorState {
        if self.jump != JumpPhase::Idle {
            MotorState::Jumping
        } else if self.climbing {
            MotorState::Climbing
        } else {
            MotorState::None
        }
    }

    /// Start moving along `direction`. Horizontal movement cancels braking.
    pub fn request_move(&mut self, direction: MoveDirection) {
        match direction {
            MoveDirection::Horizontal => self.horizontal = HorizontalPhase::Moving,
            MoveDirection::Vertical => {
                if !self.climbing {
                    debug!("Climbing started");
                }
                self.climbing = true;
            }
        }
    }

    /// Queue a jump. Only accepted while grounded.
    pub fn request_jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.jump = JumpPhase::Pending;
        true
    }

    /// Recompute the grounded flag from a downward ray that ignores the
    /// player layer.
    pub fn check_grounded(&mut self, world: &impl PhysicsQuery, ray: GroundRay) -> bool {
        self.grounded = world
            .raycast(
                ray.origin,
                Dir2::NEG_Y,
                ray.length,
                GameLayer::ground_query_mask(),
            )
            .is_some();
        self.grounded
    }

    /// Per-frame half: input, grounded check and speed limit.
    pub fn frame_update(
        &mut self,
        params: &MovementParams,
        input: &impl InputSource,
        world: &impl PhysicsQuery,
        ray: GroundRay,
    ) {
        if input.axis(InputAxis::Horizontal) != 0.0 {
            self.request_move(MoveDirection::Horizontal);
        }

        if params.allow_climb && input.axis(InputAxis::Vertical) != 0.0 {
            self.request_move(MoveDirection::Vertical);
        }

        // Uses the grounded flag from the previous frame.
        if input.button_down(InputButton::Jump) && self.request_jump() {
            debug!("Jump accepted");
        }

        self.check_grounded(world, ray);

        // TODO: ease between the two limits instead of switching instantly.
        self.speed_limit = if self.grounded {
            params.speed_limit
        } else {
            params.on_air_speed_limit
        };

        if self.climbing {
            let y_axis = input.axis(InputAxis::Vertical);
            if y_axis != 0.0 {
                self.queued_force += Vec2::new(0.0, y_axis * params.move_acceleration);
            } else {
                self.climbing = false;
                debug!("Climbing stopped");
            }
        }
    }

    /// Per-physics-step half: every velocity change happens here.
    pub fn fixed_update(
        &mut self,
        params: &MovementParams,
        input: &impl InputSource,
        body: &mut impl MotorBody,
        step: FixedStep,
    ) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        if self.queued_force != Vec2::ZERO {
            body.add_force(self.queued_force, ForceMode::Force);
            self.queued_force = Vec2::ZERO;
        }

        match self.jump {
            JumpPhase::Pending => {
                body.add_force(Vec2::new(0.0, params.jump_force), ForceMode::Impulse);
                self.jump = if params.use_mario_jump {
                    JumpPhase::Landing
                } else {
                    JumpPhase::Idle
                };
                outcome.jumped = true;
            }
            JumpPhase::Landing => outcome.landed = self.land_step(params, input, body, step),
            JumpPhase::Idle => {}
        }

        match self.horizontal {
            HorizontalPhase::Moving => {
                let x_axis = input.axis(InputAxis::Horizontal);
                if x_axis != 0.0 {
                    self.accelerate(params, body, x_axis);
                } else {
                    self.horizontal = HorizontalPhase::Braking;
                    outcome.stopped = self.brake_step(params, body, step.dt);
                }
            }
            HorizontalPhase::Braking => outcome.stopped = self.brake_step(params, body, step.dt),
            HorizontalPhase::Idle => {}
        }

        self.velocity = body.velocity();
        outcome
    }

    fn accelerate(&self, params: &MovementParams, body: &mut impl MotorBody, x_axis: f32) {
        let velocity = body.velocity();
        let speed = match params.speed_limit_mode {
            SpeedLimitMode::TotalSpeed => velocity.length(),
            SpeedLimitMode::Horizontal => velocity.x.abs(),
        };

        // Soft cap: stop adding once at the limit, but never clamp down.
        if speed < self.speed_limit {
            body.set_velocity(velocity + Vec2::X * x_axis * params.move_acceleration);
        }
    }

    /// Returns true once horizontal velocity has reached zero.
    fn brake_step(&mut self, params: &MovementParams, body: &mut impl MotorBody, dt: f32) -> bool {
        let mut velocity = body.velocity();

        if velocity.x != 0.0 {
            if velocity.x.abs() <= BRAKE_SNAP_SPEED {
                velocity.x = 0.0;
            } else {
                let decel = params.brake_speed * dt;
                velocity.x = if velocity.x > 0.0 {
                    (velocity.x - decel).max(0.0)
                } else {
                    (velocity.x + decel).min(0.0)
                };
            }
            body.set_velocity(velocity);
        }

        if velocity.x == 0.0 {
            self.horizontal = HorizontalPhase::Idle;
            debug!("Braking finished");
            true
        } else {
            false
        }
    }

    /// Returns true when the landing phase ends.
    fn land_step(
        &mut self,
        params: &MovementParams,
        input: &impl InputSource,
        body: &mut impl MotorBody,
        step: FixedStep,
    ) -> bool {
        let mut velocity = body.velocity();

        if velocity.y == 0.0 && self.grounded {
            self.jump = JumpPhase::Idle;
            debug!("Landed");
            return true;
        }

        // Falling takes precedence; at most one modifier per step.
        if velocity.y < 0.0 {
            velocity.y += step.gravity.y * (params.fall_multiplier - 1.0) * step.dt;
        } else if velocity.y > 0.0 && !input.button_held(InputButton::Jump) {
            velocity.y += step.gravity.y * (params.low_jump_multiplier - 1.0) * step.dt;
        }
        body.set_velocity(velocity);

        false
    }
}
