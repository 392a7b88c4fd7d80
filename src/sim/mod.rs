//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical steps only, one `tick` call per host frame
//! - No randomness: state is a pure function of level data + input history
//! - No rendering or platform dependencies
//!
//! Hosts drive it by building a [`SimState`] from a [`Level`], calling
//! [`tick`] each frame with their [`InputState`](crate::input::InputState),
//! and rendering from [`Snapshot`]s.

pub mod collision;
pub mod geometry;
pub mod guard;
pub mod level;
pub mod state;
pub mod tick;
pub mod vision;

pub use guard::Guard;
pub use level::{Exit, GuardConfig, Level, Wall, campaign};
pub use state::{Battery, GuardView, Outcome, Player, SimState, Snapshot};
pub use tick::tick;
