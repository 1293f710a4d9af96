//! Helicopter flight model: a hand-tuned kinematic heuristic, not rigid-body
//! physics.
//!
//! The helicopter flies a fixed-radius ring: forward input feeds an angular
//! phase (`mov_rate`) and horizontal position is recomputed from that phase
//! every airborne tick, so the craft can never leave the ring laterally.
//! Heading, bank and pitch are derived quantities; only altitude, forward
//! speed and the rotor rates carry state between ticks.

use engine_core::{wrap_degrees, Vec3};
use log::info;
use renderer::Rgb;

use crate::scene::{BODY_HEIGHT, FLOOR_TOP_Y, SKID_RADIUS};

/// Radius of the circular flight path.
pub const TRAJECTORY_RADIUS: f32 = 30.0;

/// Resting altitude: skids on the floor.
pub const MIN_ALTITUDE: f32 = FLOOR_TOP_Y + BODY_HEIGHT + SKID_RADIUS;

/// Hard ceiling.
pub const MAX_ALTITUDE: f32 = 40.0;

/// Climb/descent rate, world units per second.
pub const CLIMB_RATE: f32 = 4.0;

/// Maximum phase velocity along the ring, radians per second.
pub const MAX_FORWARD_SPEED: f32 = 0.8;

/// Forward acceleration while the key is held, radians per second squared.
pub const FORWARD_ACCEL: f32 = 0.4;

/// Passive deceleration once the key is released. Floors at zero, never
/// reverses.
pub const PASSIVE_DECEL: f32 = 0.15;

/// Below this altitude the passive deceleration is amplified by
/// `altitude / LANDING_THRESHOLD_ALTITUDE` per tick (taxi-to-stop).
pub const LANDING_THRESHOLD_ALTITUDE: f32 = 8.0;

/// Maximum bank (rotation.z) and pitch (rotation.x) at full forward speed.
pub const MAX_BANK_DEGREES: f32 = 30.0;
pub const MAX_PITCH_DEGREES: f32 = 15.0;

/// Rotor rate seeds applied on the first climb tick so spin-up is visibly
/// instantaneous, plus per-axis maxima, ramp and grounded decay rates (all
/// degrees/second, ramp and decay per second).
pub const MAIN_ROTOR_SEED_RATE: f32 = 120.0;
pub const TAIL_ROTOR_SEED_RATE: f32 = 180.0;
pub const MAIN_ROTOR_MAX_RATE: f32 = 1440.0;
pub const TAIL_ROTOR_MAX_RATE: f32 = 2160.0;
pub const ROTOR_SPINUP: f32 = 600.0;
pub const ROTOR_DECAY: f32 = 360.0;

/// Heading offset added to the trajectory phase angle.
const HEADING_OFFSET_DEGREES: f32 = 270.0;

/// One rotor axis: per-tick angular rate plus the unbounded accumulated
/// angle that drives visual spin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotor {
    /// Degrees per second.
    pub rate: f32,
    /// Accumulated degrees; wraps implicitly through periodic trig at render
    /// time.
    pub angle: f32,
}

impl Rotor {
    fn integrate(&mut self, dt: f32) {
        self.angle += self.rate * dt;
    }

    fn ramp(&mut self, drive: f32, max_rate: f32, dt: f32) {
        self.rate = (self.rate + ROTOR_SPINUP * drive * dt).min(max_rate);
    }

    fn decay(&mut self, dt: f32) {
        self.rate = (self.rate - ROTOR_DECAY * dt).max(0.0);
    }
}

/// Flat colors for the helicopter's parts.
#[derive(Debug, Clone, Copy)]
pub struct HeliPalette {
    pub body: Rgb,
    pub blade: Rgb,
    pub hub: Rgb,
    pub beam: Rgb,
}

impl Default for HeliPalette {
    fn default() -> Self {
        Self {
            body: Rgb::from_u8(207, 25, 25),
            blade: Rgb::from_u8(17, 203, 240),
            hub: Rgb::from_u8(227, 182, 20),
            beam: Rgb::from_u8(133, 133, 133),
        }
    }
}

/// Held directional input for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightInput {
    pub climb: bool,
    pub descend: bool,
    pub forward: bool,
}

impl FlightInput {
    pub fn from_input(input: &input::InputState) -> Self {
        Self {
            climb: input.is_climb_held(),
            descend: input.is_descend_held(),
            forward: input.is_forward_held(),
        }
    }
}

/// The player helicopter. Created once at startup, mutated every tick, never
/// destroyed.
#[derive(Debug, Clone)]
pub struct Helicopter {
    /// World position.
    pub position: Vec3,
    /// Euler degrees: x = pitch, y = heading, z = bank.
    pub rotation: Vec3,
    /// Phase velocity along the ring, radians per second.
    pub forward_speed: f32,
    /// Vertical speed, world units per second.
    pub vertical_speed: f32,
    /// Accumulated phase parameter; the angular argument of the trajectory.
    pub mov_rate: f32,
    pub main_rotor: Rotor,
    pub tail_rotor: Rotor,
    pub airborne: bool,
    /// Uniform model scale.
    pub scale: f32,
    pub palette: HeliPalette,
}

impl Default for Helicopter {
    fn default() -> Self {
        Self::new()
    }
}

impl Helicopter {
    /// Grounded on the ring at phase zero, rotors idle.
    pub fn new() -> Self {
        let mov_rate = 0.0_f32;
        Self {
            position: Vec3::new(
                TRAJECTORY_RADIUS * mov_rate.cos(),
                MIN_ALTITUDE,
                -TRAJECTORY_RADIUS * mov_rate.sin(),
            ),
            rotation: Vec3::new(0.0, heading_for_phase(mov_rate), 0.0),
            forward_speed: 0.0,
            vertical_speed: 0.0,
            mov_rate,
            main_rotor: Rotor::default(),
            tail_rotor: Rotor::default(),
            airborne: false,
            scale: 1.0,
            palette: HeliPalette::default(),
        }
    }

    /// Heading in degrees, `[0, 360)`.
    pub fn heading(&self) -> f32 {
        self.rotation.y
    }

    /// Forward speed normalized by the maximum, guarded against a zero
    /// maximum so bank/pitch can never go non-finite.
    pub fn speed_fraction(&self) -> f32 {
        if MAX_FORWARD_SPEED > 0.0 {
            (self.forward_speed / MAX_FORWARD_SPEED).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Advance one tick. `wind` is the current drift vector; it only touches
    /// an airborne craft.
    pub fn update(&mut self, input: &FlightInput, wind: Vec3, dt: f32) {
        if !self.airborne {
            if input.climb {
                self.lift_off();
            } else {
                self.update_grounded(dt);
                return;
            }
        }
        self.update_airborne(input, wind, dt);
    }

    fn lift_off(&mut self) {
        self.airborne = true;
        self.main_rotor.rate = self.main_rotor.rate.max(MAIN_ROTOR_SEED_RATE);
        self.tail_rotor.rate = self.tail_rotor.rate.max(TAIL_ROTOR_SEED_RATE);
        info!("lift-off at heading {:.0}°", self.heading());
    }

    fn update_grounded(&mut self, dt: f32) {
        // Spin-down and taxi to rest; no drift while grounded.
        self.vertical_speed = 0.0;
        self.forward_speed = (self.forward_speed - PASSIVE_DECEL * dt).max(0.0);
        self.main_rotor.decay(dt);
        self.tail_rotor.decay(dt);
        self.main_rotor.integrate(dt);
        self.tail_rotor.integrate(dt);
        self.apply_attitude();
    }

    fn update_airborne(&mut self, input: &FlightInput, wind: Vec3, dt: f32) {
        // Forward speed: ramp while held, passively bleed off otherwise.
        if input.forward {
            self.forward_speed = (self.forward_speed + FORWARD_ACCEL * dt).min(MAX_FORWARD_SPEED);
        } else {
            self.forward_speed = (self.forward_speed - PASSIVE_DECEL * dt).max(0.0);
            let altitude = self.position.y;
            if altitude < LANDING_THRESHOLD_ALTITUDE {
                self.forward_speed *= (altitude / LANDING_THRESHOLD_ALTITUDE).clamp(0.0, 1.0);
            }
        }

        // Ring trajectory: phase advances with forward speed, horizontal
        // position is recomputed from the phase.
        self.mov_rate += self.forward_speed * dt;
        self.position.x = TRAJECTORY_RADIUS * self.mov_rate.cos();
        self.position.z = -TRAJECTORY_RADIUS * self.mov_rate.sin();

        // Vertical: fixed climb/descent rates, symmetric clamp.
        self.vertical_speed = match (input.climb, input.descend) {
            (true, false) => CLIMB_RATE,
            (false, true) => -CLIMB_RATE,
            _ => 0.0,
        };
        self.position.y += self.vertical_speed * dt;

        // Wind touches all three axes while airborne.
        self.position += wind * dt;
        self.position.y = self.position.y.clamp(MIN_ALTITUDE, MAX_ALTITUDE);

        // Touch-down: descending into the minimum grounds the craft.
        if input.descend && self.position.y <= MIN_ALTITUDE {
            self.airborne = false;
            self.vertical_speed = 0.0;
            info!("touch-down at phase {:.2} rad", self.mov_rate);
        }

        // Rotors ramp toward their maxima, driven harder at speed.
        let drive = 1.0 + self.speed_fraction() + (self.vertical_speed.abs() / CLIMB_RATE);
        self.main_rotor.ramp(drive, MAIN_ROTOR_MAX_RATE, dt);
        self.tail_rotor.ramp(drive, TAIL_ROTOR_MAX_RATE, dt);
        self.main_rotor.integrate(dt);
        self.tail_rotor.integrate(dt);

        self.rotation.y = heading_for_phase(self.mov_rate);
        self.apply_attitude();
    }

    fn apply_attitude(&mut self) {
        let frac = self.speed_fraction();
        self.rotation.z = -MAX_BANK_DEGREES * frac;
        self.rotation.x = MAX_PITCH_DEGREES * frac;
    }
}

/// Heading for a trajectory phase: `atan2(-z, x)` in degrees plus a fixed
/// offset, wrapped into `[0, 360)`. With the nose on local -X this faces the
/// craft along its direction of travel.
fn heading_for_phase(mov_rate: f32) -> f32 {
    let x = TRAJECTORY_RADIUS * mov_rate.cos();
    let z = -TRAJECTORY_RADIUS * mov_rate.sin();
    wrap_degrees((-z).atan2(x).to_degrees() + HEADING_OFFSET_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::yaw_forward;

    const DT: f32 = 1.0 / 60.0;
    const CALM: Vec3 = Vec3::ZERO;

    fn climb() -> FlightInput {
        FlightInput {
            climb: true,
            ..Default::default()
        }
    }

    fn descend() -> FlightInput {
        FlightInput {
            descend: true,
            ..Default::default()
        }
    }

    fn forward() -> FlightInput {
        FlightInput {
            forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn default_state_is_grounded_and_idle() {
        let heli = Helicopter::new();
        assert!(!heli.airborne);
        assert_eq!(heli.forward_speed, 0.0);
        assert_eq!(heli.main_rotor.rate, 0.0);
        assert_eq!(heli.position.y, MIN_ALTITUDE);
        assert_eq!(heli.position.x, TRAJECTORY_RADIUS);
    }

    /// Ten climb ticks from rest: airborne after the first, altitude up by
    /// the documented increment each tick, rotor rates positive and
    /// non-decreasing.
    #[test]
    fn ten_climb_ticks_from_rest() {
        let mut heli = Helicopter::new();
        let mut altitude = heli.position.y;
        let mut main_rate = 0.0;
        for tick in 0..10 {
            heli.update(&climb(), CALM, DT);
            assert!(heli.airborne, "airborne from tick {tick}");
            let expected = (altitude + CLIMB_RATE * DT).min(MAX_ALTITUDE);
            assert!((heli.position.y - expected).abs() < 1e-5);
            altitude = heli.position.y;
            assert!(heli.main_rotor.rate > 0.0);
            assert!(heli.tail_rotor.rate > 0.0);
            assert!(heli.main_rotor.rate >= main_rate);
            main_rate = heli.main_rotor.rate;
        }
    }

    /// Climbing forever never exceeds the ceiling.
    #[test]
    fn altitude_clamps_at_ceiling() {
        let mut heli = Helicopter::new();
        for _ in 0..5000 {
            heli.update(&climb(), CALM, DT);
            assert!(heli.position.y <= MAX_ALTITUDE);
        }
        assert_eq!(heli.position.y, MAX_ALTITUDE);
    }

    /// Descending forever clamps at the minimum and grounds the craft within
    /// one tick of touching it.
    #[test]
    fn descent_grounds_at_minimum() {
        let mut heli = Helicopter::new();
        for _ in 0..120 {
            heli.update(&climb(), CALM, DT);
        }
        let mut grounded_tick = None;
        for tick in 0..5000 {
            heli.update(&descend(), CALM, DT);
            assert!(heli.position.y >= MIN_ALTITUDE);
            if heli.position.y <= MIN_ALTITUDE {
                grounded_tick = Some(tick);
                break;
            }
        }
        let tick = grounded_tick.expect("must reach minimum altitude");
        assert!(!heli.airborne, "grounded on the tick it reached minimum");
        assert_eq!(heli.position.y, MIN_ALTITUDE);
        // One extra idle tick must keep it grounded.
        heli.update(&FlightInput::default(), CALM, DT);
        assert!(!heli.airborne, "stays grounded after tick {tick}");
    }

    /// Once grounded, rotor rate is non-increasing until it hits exactly
    /// zero and stays there.
    #[test]
    fn rotor_decay_is_monotone_to_zero() {
        let mut heli = Helicopter::new();
        for _ in 0..300 {
            heli.update(&climb(), CALM, DT);
        }
        while heli.airborne {
            heli.update(&descend(), CALM, DT);
        }
        let mut last = heli.main_rotor.rate;
        assert!(last > 0.0);
        for _ in 0..0x4000 {
            heli.update(&FlightInput::default(), CALM, DT);
            assert!(heli.main_rotor.rate <= last);
            last = heli.main_rotor.rate;
        }
        assert_eq!(heli.main_rotor.rate, 0.0);
        assert_eq!(heli.tail_rotor.rate, 0.0);
        heli.update(&FlightInput::default(), CALM, DT);
        assert_eq!(heli.main_rotor.rate, 0.0);
    }

    /// In calm air the horizontal position stays on the ring exactly.
    #[test]
    fn trajectory_stays_on_the_ring() {
        let mut heli = Helicopter::new();
        let input = FlightInput {
            climb: true,
            forward: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            heli.update(&input, CALM, DT);
            let r2 = heli.position.x * heli.position.x + heli.position.z * heli.position.z;
            assert!((r2 - TRAJECTORY_RADIUS * TRAJECTORY_RADIUS).abs() < 1e-2);
        }
        assert!(heli.forward_speed > 0.0);
    }

    /// Releasing the forward key bleeds speed off without ever reversing.
    #[test]
    fn passive_deceleration_never_reverses() {
        let mut heli = Helicopter::new();
        let both = FlightInput {
            climb: true,
            forward: true,
            ..Default::default()
        };
        for _ in 0..600 {
            heli.update(&both, CALM, DT);
        }
        assert!((heli.forward_speed - MAX_FORWARD_SPEED).abs() < 1e-5);

        let mut last = heli.forward_speed;
        for _ in 0..5000 {
            heli.update(&climb(), CALM, DT);
            assert!(heli.forward_speed <= last);
            assert!(heli.forward_speed >= 0.0);
            last = heli.forward_speed;
        }
        assert_eq!(heli.forward_speed, 0.0);
    }

    /// Below the landing threshold the taxi scaling stops the craft much
    /// faster than plain passive deceleration.
    #[test]
    fn taxi_scaling_amplifies_low_altitude_deceleration() {
        let mut low = Helicopter::new();
        let accel = FlightInput {
            climb: true,
            forward: true,
            ..Default::default()
        };
        for _ in 0..30 {
            low.update(&accel, CALM, DT);
        }
        // Same speed, but one craft hovers above the threshold.
        let mut high = low.clone();
        high.position.y = LANDING_THRESHOLD_ALTITUDE + 10.0;

        let coast = FlightInput::default();
        for _ in 0..30 {
            low.update(&coast, CALM, DT);
            high.update(&coast, CALM, DT);
        }
        assert!(low.forward_speed < high.forward_speed);
    }

    /// Heading stays wrapped and tracks the direction of travel.
    #[test]
    fn heading_tracks_travel_direction() {
        let mut heli = Helicopter::new();
        let input = FlightInput {
            climb: true,
            forward: true,
            ..Default::default()
        };
        let mut prev = heli.position;
        for _ in 0..400 {
            heli.update(&input, CALM, DT);
            assert!(heli.heading() >= 0.0 && heli.heading() < 360.0);
            let step = heli.position - prev;
            let horizontal = Vec3::new(step.x, 0.0, step.z);
            if horizontal.length() > 1e-4 {
                let travel = horizontal.normalize();
                assert!(yaw_forward(heli.heading()).dot(travel) > 0.95);
            }
            prev = heli.position;
        }
    }

    /// Bank and pitch are zero at rest and maxed at full speed.
    #[test]
    fn attitude_is_linear_in_speed() {
        let mut heli = Helicopter::new();
        assert_eq!(heli.rotation.z, 0.0);
        let input = FlightInput {
            climb: true,
            forward: true,
            ..Default::default()
        };
        for _ in 0..600 {
            heli.update(&input, CALM, DT);
        }
        assert!((heli.rotation.z - (-MAX_BANK_DEGREES)).abs() < 1e-3);
        assert!((heli.rotation.x - MAX_PITCH_DEGREES).abs() < 1e-3);
    }

    /// Wind only drifts an airborne craft, and the altitude clamp contains
    /// vertical drift.
    #[test]
    fn wind_only_affects_airborne_craft() {
        let gust = Vec3::new(0.0, -5.0, 0.0);

        let mut grounded = Helicopter::new();
        grounded.update(&FlightInput::default(), gust, DT);
        assert_eq!(grounded.position.y, MIN_ALTITUDE);

        let mut flying = Helicopter::new();
        for _ in 0..10 {
            flying.update(&climb(), CALM, DT);
        }
        let before = flying.position.y;
        flying.update(&FlightInput::default(), gust, DT);
        assert!(flying.position.y < before);
        assert!(flying.position.y >= MIN_ALTITUDE);
        assert!(flying.airborne, "wind alone never grounds the craft");
    }

    /// Lift-off seeds both rotor rates so spin-up is visibly instantaneous.
    #[test]
    fn lift_off_seeds_rotor_rates() {
        let mut heli = Helicopter::new();
        heli.update(&climb(), CALM, DT);
        assert!(heli.main_rotor.rate >= MAIN_ROTOR_SEED_RATE);
        assert!(heli.tail_rotor.rate >= TAIL_ROTOR_SEED_RATE);
    }

    #[test]
    fn forward_input_does_nothing_while_grounded() {
        let mut heli = Helicopter::new();
        for _ in 0..60 {
            heli.update(&forward(), CALM, DT);
        }
        assert!(!heli.airborne);
        assert_eq!(heli.position.x, TRAJECTORY_RADIUS);
        assert_eq!(heli.mov_rate, 0.0);
    }
}
