//! End-to-end controller tests over a scripted kinematic body.

use approx::assert_relative_eq;
use glam::Vec2;
use gully_character::prelude::*;

const DT: f32 = 1.0 / 60.0;
const GRAVITY: f32 = 980.0;

/// Minimal kinematic body: an optional infinite floor, injectable contacts.
/// The floor/ceiling queries reflect the last resolved move, the way a real
/// solver exposes its last slide.
struct TestBody {
    position: Vec2,
    grounded: bool,
    floor_y: Option<f32>,
    pending_contacts: Vec<Contact>,
}

impl TestBody {
    fn on_floor_at(y: f32) -> Self {
        Self {
            position: Vec2::new(0.0, y),
            grounded: true,
            floor_y: Some(y),
            pending_contacts: Vec::new(),
        }
    }

    fn floating_at(y: f32) -> Self {
        Self {
            position: Vec2::new(0.0, y),
            grounded: false,
            floor_y: None,
            pending_contacts: Vec::new(),
        }
    }

    fn falling_onto_floor(start_y: f32, floor_y: f32) -> Self {
        Self {
            position: Vec2::new(0.0, start_y),
            grounded: false,
            floor_y: Some(floor_y),
            pending_contacts: Vec::new(),
        }
    }

    fn touch_hostile_from_above(&mut self) {
        self.pending_contacts
            .push(Contact::new(Vec2::new(0.0, -1.0), BodyTag::Hostile));
    }
}

impl KinematicBody for TestBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn on_floor(&self) -> bool {
        self.grounded
    }

    fn on_ceiling(&self) -> bool {
        false
    }

    fn on_wall(&self) -> bool {
        false
    }

    fn move_and_resolve(&mut self, velocity: Vec2, delta: f32) -> MoveResult {
        let mut position = self.position + velocity * delta;
        let mut resolved = velocity;
        let mut grounded = false;

        if let Some(floor) = self.floor_y {
            if position.y >= floor && velocity.y >= 0.0 {
                position.y = floor;
                resolved.y = 0.0;
                grounded = true;
            }
        }

        self.position = position;
        self.grounded = grounded;
        MoveResult {
            position,
            velocity: resolved,
            grounded,
            on_ceiling: false,
            on_wall: false,
            contacts: std::mem::take(&mut self.pending_contacts),
        }
    }
}

fn controller_at(spawn: Vec2) -> CharacterController {
    CharacterController::new(CharacterConfig::default(), spawn).unwrap()
}

/// Scenario: walked off a ledge, pressed jump shortly after. Both the
/// buffer and the coyote window are open, so the jump is honored.
#[test]
fn buffered_coyote_jump_is_honored() {
    let mut c = controller_at(Vec2::ZERO);
    let mut body = TestBody::on_floor_at(0.0);

    // Settle on the floor, then pull it away
    c.tick(DT, &InputFrame::idle(), 0.0, &mut body);
    body.floor_y = None;
    c.tick(DT, &InputFrame::idle(), 0.0, &mut body);

    // ~0.05s into the fall, inside both grace windows
    let report = c.tick(0.05, &InputFrame::idle().pressing_jump(), 0.0, &mut body);

    assert_relative_eq!(report.velocity.y, c.config().jump_velocity);
    assert_eq!(c.state().jump_count, 1);
}

#[test]
fn late_jump_after_coyote_expiry_is_ignored() {
    let mut c = controller_at(Vec2::ZERO);
    let mut body = TestBody::on_floor_at(0.0);

    c.tick(DT, &InputFrame::idle(), 0.0, &mut body);
    body.floor_y = None;
    c.tick(DT, &InputFrame::idle(), 0.0, &mut body);

    // Let the coyote window run out
    for _ in 0..30 {
        c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
    }
    c.tick(DT, &InputFrame::idle().pressing_jump(), GRAVITY, &mut body);

    assert_eq!(c.state().jump_count, 0);
    assert!(c.state().velocity.y > 0.0);
}

/// Scenario: continuous fall past the lethal distance. Death fires on the
/// crossing tick, mid-air, not on landing.
#[test]
fn lethal_fall_kills_on_the_crossing_tick() {
    let mut c = controller_at(Vec2::ZERO);
    let mut body = TestBody::floating_at(0.0);

    let mut died_tick = None;
    for tick in 0..2000 {
        let report = c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
        if report
            .events
            .contains(&TickEvent::Died(DeathCause::LethalFall))
        {
            // Same-tick guarantees: life cycle and animation flip at once
            assert_eq!(report.life_cycle, LifeCycle::Dead);
            assert_eq!(report.animation, AnimationKey::Death);
            // Still airborne: the kill was not deferred to a landing
            assert!(!body.on_floor());
            died_tick = Some(tick);
            break;
        }
    }
    let died_tick = died_tick.expect("fall never turned lethal");

    // The crossing happened just past the lethal distance
    assert!(body.position().y > c.config().lethal_fall_distance);
    assert!(died_tick > 10);
}

#[test]
fn short_fall_is_not_lethal() {
    let mut c = controller_at(Vec2::new(0.0, -1000.0));
    let mut body = TestBody::falling_onto_floor(-1000.0, 0.0);

    for _ in 0..200 {
        let report = c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
        assert_eq!(report.life_cycle, LifeCycle::Alive);
        if c.state().grounded {
            return;
        }
    }
    panic!("never landed");
}

/// Scenario: double jump, hover once at the apex, fall; the near-zero
/// velocity right after the hover must not re-lock.
#[test]
fn apex_hover_engages_once_per_airborne_span() {
    let mut c = controller_at(Vec2::ZERO);
    let mut body = TestBody::on_floor_at(0.0);

    c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
    c.tick(DT, &InputFrame::idle().pressing_jump(), GRAVITY, &mut body);
    assert_eq!(c.state().jump_count, 1);

    // Second jump a few ticks into the rise
    for _ in 0..5 {
        c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
    }
    c.tick(DT, &InputFrame::idle().pressing_jump(), GRAVITY, &mut body);
    assert_eq!(c.state().jump_count, 2);

    let mut hover_starts = 0;
    let mut hover_ticks = 0;
    for _ in 0..2000 {
        let report = c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
        if report.events.contains(&TickEvent::ApexHoverStarted) {
            hover_starts += 1;
        }
        if c.state().apex_locked {
            hover_ticks += 1;
            // The lock and full gravity are mutually exclusive
            assert_eq!(report.velocity.y, 0.0);
            assert_eq!(report.animation, AnimationKey::DoubleJumpApex);
        }
        if c.state().grounded {
            break;
        }
    }

    assert!(c.state().grounded, "never landed");
    assert_eq!(hover_starts, 1);
    // Held for roughly max_float_time worth of ticks
    let expected = (c.config().max_float_time / DT).round() as i32;
    assert!((hover_ticks - expected).abs() <= 1);
}

/// Scenario: damage, i-frame window, dropped second hit.
#[test]
fn damage_cycle_with_iframes() {
    let mut c = controller_at(Vec2::ZERO);
    let mut body = TestBody::floating_at(0.0);

    let events = c.damage(DamageInfo::new(20));
    assert!(events.contains(&TickEvent::HealthChanged(80)));
    assert_eq!(c.health(), 80);
    assert!(c.state().health.is_hurt());

    // Hurt lockout runs 0.3s; a couple of extra ticks absorb float drift
    let mut hurt_ended_at = None;
    for tick in 1..=18 {
        let report = c.tick(0.05, &InputFrame::idle(), 0.0, &mut body);
        if report.events.contains(&TickEvent::HurtEnded) {
            hurt_ended_at = Some(tick as f32 * 0.05);
        }
        // A hit at t=0.5 lands inside the 0.8s window and is dropped
        if tick == 10 {
            assert!(c.damage(DamageInfo::new(20)).is_empty());
            assert_eq!(c.health(), 80);
        }
        if report.events.contains(&TickEvent::InvincibilityEnded) {
            assert!((tick as f32 * 0.05 - 0.8).abs() < 0.051);
        }
    }
    assert!((hurt_ended_at.unwrap() - 0.3).abs() < 0.051);

    // Window closed: damage lands again
    let events = c.damage(DamageInfo::new(20));
    assert!(events.contains(&TickEvent::HealthChanged(60)));
}

#[test]
fn hurt_lockout_suppresses_control() {
    let mut c = controller_at(Vec2::ZERO);
    let mut body = TestBody::on_floor_at(0.0);
    c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);

    c.damage(DamageInfo::new(20));
    let knocked_x = c.state().velocity.x;
    assert!(knocked_x < 0.0); // facing right, shoved left

    // Pushing toward +x during the lockout has no effect; the shove decays
    let report = c.tick(
        DT,
        &InputFrame::idle().with_axis(1.0, 0.0).pressing_jump(),
        GRAVITY,
        &mut body,
    );
    assert!(report.velocity.x.abs() < knocked_x.abs());
    assert_eq!(c.state().jump_count, 0);
    assert_eq!(report.animation, AnimationKey::Hurt);
}

/// Scenario: descending onto a hostile body grants a bounce and one fresh
/// jump; the same contact while rising is ignored.
#[test]
fn stomp_bounce_off_hostile_body() {
    let mut c = controller_at(Vec2::ZERO);
    let mut body = TestBody::floating_at(0.0);

    // A few ticks of descent
    for _ in 0..3 {
        c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
    }
    assert!(c.state().velocity.y > 0.0);
    assert!(c.state().fall.is_tracking());

    body.touch_hostile_from_above();
    let report = c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);

    assert!(report.events.contains(&TickEvent::Bounced));
    assert_relative_eq!(report.velocity.y, c.config().enemy_bounce_velocity);
    assert_eq!(c.state().jump_count, 1);
    assert!(!c.state().fall.is_tracking());

    // Rising through the same body: no second bounce
    body.touch_hostile_from_above();
    let report = c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
    assert!(!report.events.contains(&TickEvent::Bounced));
}

#[test]
fn hard_landing_applies_movement_penalty() {
    let mut c = controller_at(Vec2::new(0.0, -1500.0));
    let mut body = TestBody::falling_onto_floor(-1500.0, 0.0);

    let mut landed = false;
    for _ in 0..400 {
        let report = c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
        if let Some(TickEvent::Landed { fall_distance }) = report
            .events
            .iter()
            .find(|e| matches!(e, TickEvent::Landed { .. }))
        {
            assert!(*fall_distance > 1000.0);
            assert!(c.state().landing);
            assert_eq!(report.animation, AnimationKey::Land);
            landed = true;
            break;
        }
    }
    assert!(landed, "never landed");

    // The penalty expires on its own with neutral input
    for _ in 0..30 {
        c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
    }
    assert!(!c.state().landing);
}

#[test]
fn death_landing_requests_one_camera_shake() {
    let mut c = controller_at(Vec2::new(0.0, -1500.0));
    let mut body = TestBody::falling_onto_floor(-1500.0, 0.0);

    c.trigger_death();
    assert_eq!(c.life_cycle(), LifeCycle::Dead);

    let mut shakes = 0;
    for _ in 0..400 {
        let report = c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);
        assert_eq!(report.animation, AnimationKey::Death);
        if let Some(CameraRequest::Shake {
            intensity, bursts, ..
        }) = report.camera
        {
            assert_eq!(intensity, c.config().death_shake_intensity);
            assert_eq!(bursts, 6);
            shakes += 1;
        }
    }
    assert_eq!(shakes, 1);
}

#[test]
fn revive_restores_the_living_state() {
    let mut c = controller_at(Vec2::ZERO);
    let mut body = TestBody::on_floor_at(0.0);

    c.trigger_death();
    c.tick(DT, &InputFrame::idle(), GRAVITY, &mut body);

    let events = c.revive();
    assert!(events.contains(&TickEvent::Revived));
    assert!(events.contains(&TickEvent::HealthChanged(100)));
    assert_eq!(c.life_cycle(), LifeCycle::Alive);
    assert!(!c.state().landing);

    // Back under control
    let report = c.tick(DT, &InputFrame::idle().with_axis(1.0, 0.0), GRAVITY, &mut body);
    assert!(report.velocity.x > 0.0);
}

#[test]
fn sprinting_requests_camera_zoom() {
    let mut c = controller_at(Vec2::ZERO);
    let mut body = TestBody::on_floor_at(0.0);
    let input = InputFrame::idle().with_axis(1.0, 0.0).running();

    let mut saw_run_zoom = false;
    let mut last_animation = AnimationKey::Idle;
    for _ in 0..200 {
        let report = c.tick(DT, &input, GRAVITY, &mut body);
        if report.camera == Some(CameraRequest::Zoom { target: c.config().run_zoom }) {
            saw_run_zoom = true;
        }
        last_animation = report.animation;
    }
    assert!(saw_run_zoom);
    // At full run speed the sprint animation is showing
    assert_eq!(last_animation, AnimationKey::Sprint);
}

/// Health and jump-count bounds hold through a messy input script.
#[test]
fn invariants_hold_through_mixed_play() {
    let mut c = controller_at(Vec2::ZERO);
    let mut body = TestBody::on_floor_at(0.0);
    let config = c.config().clone();

    for tick in 0..600 {
        let mut input = InputFrame::idle();
        if tick % 7 == 0 {
            input = input.pressing_jump();
        }
        if tick % 11 == 0 {
            input = input.releasing_jump();
        }
        if tick % 3 == 0 {
            input = input.with_axis(if tick % 6 == 0 { 1.0 } else { -1.0 }, 0.0);
        }
        if tick % 5 == 0 {
            input = input.running();
        }
        if tick == 100 || tick == 101 || tick == 300 {
            c.damage(DamageInfo::new(15));
        }
        if tick == 450 {
            c.revive();
        }

        let report = c.tick(DT, &input, GRAVITY, &mut body);

        assert!(report.health >= 0 && report.health <= config.max_health);
        assert!(c.state().jump_count <= config.max_jumps);
        if c.state().health.is_hurt() {
            assert!(c.state().health.is_invincible());
        }
        if c.state().apex_locked {
            assert_eq!(report.velocity.y, 0.0);
        }
    }
}
