//! Neon Phantom - a top-down stealth infiltration game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collision, guards, vision)
//! - `input`: Polled logical input state fed by the host
//! - `session`: Host-side session state machine (menu/level flow)

pub mod input;
pub mod session;
pub mod sim;

pub use input::{InputCode, InputState};
pub use session::{Session, SessionPhase};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (world units)
    pub const ARENA_WIDTH: f64 = 800.0;
    pub const ARENA_HEIGHT: f64 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f64 = 8.0;
    pub const PLAYER_SPEED: f64 = 3.0;

    /// Guard body radius (used for body-contact capture)
    pub const GUARD_RADIUS: f64 = 10.0;

    /// Walls are rendered this thick; collision uses half of it
    pub const WALL_WIDTH: f64 = 2.0;
    pub const WALL_HALF_WIDTH: f64 = WALL_WIDTH / 2.0;

    /// Cloak battery gauge
    pub const BATTERY_MAX: f64 = 100.0;
    pub const BATTERY_DRAIN_RATE: f64 = 0.5;
    pub const BATTERY_RECHARGE_RATE: f64 = 0.1;
    /// Minimum charge required to engage the cloak (hysteresis so a
    /// near-empty battery can't flicker on and off)
    pub const MIN_ACTIVATION_CHARGE: f64 = 15.0;

    /// Guard vision
    pub const NORMAL_VISION_DISTANCE: f64 = 200.0;
    /// Vision range multiplier while the player's cloak is engaged
    pub const DARKNESS_VISION_MULTIPLIER: f64 = 0.4;
    /// Rays per vision cone (RAY_COUNT + 1 cast, endpoints inclusive)
    pub const RAY_COUNT: u32 = 80;

    /// A guard within this distance of its target waypoint has arrived
    pub const WAYPOINT_ARRIVAL_THRESHOLD: f64 = 5.0;

    /// Logical time advanced per tick (animation-phase units)
    pub const TIME_STEP: f64 = 0.05;
    /// Capture checks are suppressed until this much logical time has
    /// elapsed, so the player is never caught on the spawn frame
    pub const GRACE_TIME: f64 = 1.0;
}
