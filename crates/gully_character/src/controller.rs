//! Character controller orchestrator
//!
//! Owns the [`CharacterState`] and runs every subsystem in a fixed order
//! each tick:
//!
//! 1. grounded classification from the physics query
//! 2. fall tracking (lethal falls, landings)
//! 3. health window decay
//! 4. jump system (ground reset or coyote/hover, then input)
//! 5. movement integration (or hurt/dead override)
//! 6. external move + resolve
//! 7. collision reactions (stomp bounce)
//! 8. animation selection
//!
//! All transitions resolve synchronously within the tick and come back in
//! the [`TickReport`]; nothing is deferred, so death can preempt any
//! in-flight hurt sequence deterministically.

use crate::animation::{self, AnimationKey};
use crate::collision;
use crate::config::CharacterConfig;
use crate::error::Result;
use crate::events::{CameraRequest, DeathCause, TickEvent, TickReport};
use crate::fall::FallEvent;
use crate::input::InputFrame;
use crate::jump::{self, HoverChange};
use crate::movement;
use crate::state::{CharacterState, Facing, LifeCycle};
use glam::Vec2;
use gully_combat::{DamageInfo, DamageOutcome, HealthEvent, HealthState};
use gully_physics::KinematicBody;

/// Shake bursts requested on a hard landing after death.
const DEATH_SHAKE_BURSTS: u32 = 6;

/// The character-control core. The only component exposed to the outside
/// world; everything else is driven from its tick.
pub struct CharacterController {
    config: CharacterConfig,
    state: CharacterState,
}

impl CharacterController {
    /// Build a controller at a spawn point.
    pub fn new(config: CharacterConfig, spawn: Vec2) -> Result<Self> {
        config.validate()?;
        let health = HealthState::new(config.max_health)
            .with_invincibility_on_hit(config.invincibility_duration)
            .with_hurt_lock(config.hurt_lock_duration);
        Ok(Self {
            state: CharacterState::new(spawn, health),
            config,
        })
    }

    /// The configuration this controller runs with.
    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    /// Read access to the full character state.
    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    /// Current health.
    pub fn health(&self) -> i32 {
        self.state.health.current
    }

    /// Alive or dead.
    pub fn life_cycle(&self) -> LifeCycle {
        self.state.life_cycle()
    }

    /// Current facing.
    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    /// Advance the character by one simulation tick.
    ///
    /// `gravity` is the downward acceleration (positive, Y points down).
    /// A negative `delta` is clamped to zero rather than rejected.
    pub fn tick(
        &mut self,
        delta: f32,
        input: &InputFrame,
        gravity: f32,
        body: &mut dyn KinematicBody,
    ) -> TickReport {
        let delta = delta.max(0.0);
        let input = input.clamped();
        let mut events = Vec::new();

        if self.state.health.is_dead() {
            return self.death_tick(delta, gravity, body);
        }

        // Grounded is derived from the physics query, never carried over
        let grounded = body.on_floor();
        self.state.grounded = grounded;
        self.state.position = body.position();

        // Fall tracking fires lethal falls mid-air, on the crossing tick
        match self.state.fall.update(
            grounded,
            self.state.velocity.y,
            self.state.position.y,
            self.config.lethal_fall_distance,
        ) {
            Some(FallEvent::Lethal) => {
                self.kill(DeathCause::LethalFall, &mut events);
            }
            Some(FallEvent::Landed { distance }) => {
                events.push(TickEvent::Landed {
                    fall_distance: distance,
                });
                if self.state.was_airborne
                    && self.state.previous_velocity_y > self.config.landing_velocity_threshold
                {
                    self.state.landing = true;
                    self.state.landing_timer = self.config.landing_stun_time;
                    log::debug!("hard landing after {distance} units");
                }
            }
            None => {}
        }

        // Hurt/invincibility windows decay before input is gated on them
        for expired in self.state.health.update(delta) {
            events.push(match expired {
                HealthEvent::HurtEnded => TickEvent::HurtEnded,
                HealthEvent::InvincibilityEnded => TickEvent::InvincibilityEnded,
            });
        }

        // Jump bookkeeping
        if grounded {
            jump::ground_reset(&mut self.state, &self.config);
            self.state.was_airborne = false;
            // Keeps the floor query stable between ticks
            self.state.velocity.y = movement::GROUND_STICK_VELOCITY;
        } else {
            jump::decay_coyote(&mut self.state, delta);
            match jump::update_hover(&mut self.state, &self.config, body.on_ceiling(), delta) {
                HoverChange::Started => events.push(TickEvent::ApexHoverStarted),
                HoverChange::Ended => {
                    // The hover zeroed vertical speed: measure any further
                    // fall from this height
                    self.state.fall.rearm(self.state.position.y);
                    events.push(TickEvent::ApexHoverEnded);
                }
                HoverChange::None => {}
            }
        }

        // Input processing and horizontal control are suppressed while
        // hurt or dead
        let can_act = self.state.can_act();
        let mut camera = None;
        if can_act {
            jump::refresh_buffer(&mut self.state, &self.config, &input, delta);
            jump::process_input(&mut self.state, &self.config, &input);

            let zoom = movement::horizontal(&mut self.state, &self.config, &input, delta);
            camera = Some(CameraRequest::Zoom { target: zoom });
        } else {
            movement::hurt_drag(&mut self.state, &self.config);
        }
        movement::vertical(&mut self.state, &self.config, gravity, delta);

        // Captured before the move so next tick's landing can classify how
        // hard the touchdown was
        self.state.previous_velocity_y = self.state.velocity.y;

        // External move + resolve
        let result = body.move_and_resolve(self.state.velocity, delta);
        self.state.position = result.position;
        self.state.velocity = result.velocity;

        // Reactions to what the move touched
        if collision::respond(&mut self.state, &self.config, &result) {
            self.state.fall.clear();
            body.set_position(self.state.position);
            events.push(TickEvent::Bounced);
        }

        // Animation beat bookkeeping, then the pure selection
        if self.state.velocity.y > movement::FALLING_THRESHOLD {
            self.state.double_jump_starting = false;
        }
        if !self.state.grounded
            && !self.state.apex_locked
            && self.state.velocity.y > movement::FALLING_THRESHOLD
        {
            self.state.fall_anim_timer += delta;
        } else {
            self.state.fall_anim_timer = 0.0;
        }

        let animation = animation::select(&self.state, &self.config);
        if matches!(animation, AnimationKey::JumpFall | AnimationKey::DoubleJumpFall) {
            self.state.apex_just_ended = false;
        }

        TickReport {
            animation,
            facing: self.state.facing,
            position: self.state.position,
            velocity: self.state.velocity,
            health: self.state.health.current,
            life_cycle: self.state.life_cycle(),
            camera,
            events,
        }
    }

    /// Apply a hit. Logically instant, applied between ticks.
    ///
    /// Dropped silently while dead or invincible. A surviving hit starts
    /// the hurt/invincible windows and shoves the character away from its
    /// facing.
    pub fn damage(&mut self, info: DamageInfo) -> Vec<TickEvent> {
        let mut events = Vec::new();
        match self.state.health.apply_damage(&info) {
            DamageOutcome::Ignored => {}
            DamageOutcome::Fatal => {
                events.push(TickEvent::HealthChanged(0));
                events.push(TickEvent::Died(DeathCause::HealthDepleted));
                log::info!("character died: health depleted");
            }
            DamageOutcome::Hurt { remaining } => {
                events.push(TickEvent::HealthChanged(remaining));
                if info.knockback {
                    self.state.velocity = Vec2::new(
                        self.config.knockback.x * -self.state.facing.sign(),
                        self.config.knockback.y,
                    );
                }
                log::debug!("took {} damage, {remaining} remaining", info.amount);
            }
        }
        events
    }

    /// Kill outright, bypassing the invincibility window. Used by
    /// instant-death hazards; killing a corpse is a no-op.
    pub fn trigger_death(&mut self) -> Vec<TickEvent> {
        let mut events = Vec::new();
        self.kill(DeathCause::Hazard, &mut events);
        events
    }

    /// Return from the dead at full health. A no-op while alive.
    pub fn revive(&mut self) -> Vec<TickEvent> {
        if !self.state.health.revive() {
            return Vec::new();
        }
        self.state.landing = false;
        self.state.landing_timer = 0.0;
        self.state.fall.clear();
        vec![
            TickEvent::HealthChanged(self.state.health.current),
            TickEvent::Revived,
        ]
    }

    fn kill(&mut self, cause: DeathCause, events: &mut Vec<TickEvent>) {
        if self.state.health.kill() {
            events.push(TickEvent::HealthChanged(0));
            events.push(TickEvent::Died(cause));
            log::info!("character died: {cause:?}");
        }
    }

    /// Reduced tick while dead: no control, gravity until the body rests,
    /// one shake request on the first hard landing.
    fn death_tick(
        &mut self,
        delta: f32,
        gravity: f32,
        body: &mut dyn KinematicBody,
    ) -> TickReport {
        let grounded = body.on_floor();
        self.state.grounded = grounded;
        self.state.velocity.x = 0.0;

        let mut camera = None;
        if !grounded {
            self.state.velocity.y += gravity * delta;
        } else {
            if self.state.previous_velocity_y > self.config.landing_velocity_threshold {
                camera = Some(CameraRequest::Shake {
                    intensity: self.config.death_shake_intensity,
                    duration: self.config.death_shake_duration,
                    bursts: DEATH_SHAKE_BURSTS,
                });
            }
            self.state.velocity.y = 0.0;
        }

        // Captured before the move: the solver zeroes velocity on the
        // landing step, and the shake needs the impact speed
        self.state.previous_velocity_y = self.state.velocity.y;

        let result = body.move_and_resolve(self.state.velocity, delta);
        self.state.position = result.position;
        self.state.velocity = result.velocity;

        TickReport {
            animation: AnimationKey::Death,
            facing: self.state.facing,
            position: self.state.position,
            velocity: self.state.velocity,
            health: 0,
            life_cycle: LifeCycle::Dead,
            camera,
            events: Vec::new(),
        }
    }
}
