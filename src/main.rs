//! Headless demo host
//!
//! Runs the built-in campaign without a renderer: a scripted "beeline"
//! pilot holds directional keys toward the exit (cloaking whenever the
//! battery allows) and the per-level outcomes are logged. Useful as a
//! smoke test of the whole core and as a reference for real hosts, which
//! drive the session the same way from an animation callback.

use neon_phantom::consts::*;
use neon_phantom::input::InputCode;
use neon_phantom::session::{Session, SessionPhase};
use neon_phantom::sim::Outcome;

/// Safety cap so a stuck pilot cannot spin forever
const MAX_TICKS_PER_LEVEL: u64 = 20_000;

fn main() {
    env_logger::init();

    let mut session = Session::new();
    session.start();

    while session.phase() != SessionPhase::Victory {
        let outcome = run_level(&mut session);
        match outcome {
            Outcome::ExitReached => session.next_level(),
            Outcome::Caught => {
                log::info!(
                    "demo pilot caught on level {}, stopping",
                    session.level_number()
                );
                break;
            }
            Outcome::Ongoing => {
                log::info!(
                    "demo pilot gave up on level {} after {} ticks",
                    session.level_number(),
                    MAX_TICKS_PER_LEVEL
                );
                break;
            }
        }
    }

    if session.phase() == SessionPhase::Victory {
        log::info!("demo pilot cleared the campaign");
    }
}

/// Play one level to a terminal outcome (or the tick cap)
fn run_level(session: &mut Session) -> Outcome {
    let level_number = session.level_number();
    log::info!("demo pilot starting level {level_number}");

    for _ in 0..MAX_TICKS_PER_LEVEL {
        steer(session);
        session.tick();

        let sim = match session.sim() {
            Some(sim) => sim,
            None => return Outcome::Ongoing,
        };
        if sim.outcome.is_terminal() {
            log::info!(
                "level {level_number}: {:?} after {} ticks (battery {:.0})",
                sim.outcome,
                sim.ticks,
                sim.battery.charge
            );
            return sim.outcome;
        }
    }

    Outcome::Ongoing
}

/// Hold the directional keys that point toward the exit, and keep the
/// cloak pressed while there is charge to spare
fn steer(session: &mut Session) {
    let Some(snapshot) = session.snapshot() else {
        return;
    };
    let Some(sim) = session.sim() else {
        return;
    };
    let to_exit = sim.level.exit.position - snapshot.player_position;

    for code in [
        InputCode::Up,
        InputCode::Down,
        InputCode::Left,
        InputCode::Right,
        InputCode::Stealth,
    ] {
        session.input.release(code);
    }

    if to_exit.x > 1.0 {
        session.input.press(InputCode::Right);
    } else if to_exit.x < -1.0 {
        session.input.press(InputCode::Left);
    }
    if to_exit.y > 1.0 {
        session.input.press(InputCode::Down);
    } else if to_exit.y < -1.0 {
        session.input.press(InputCode::Up);
    }

    if snapshot.battery_charge > MIN_ACTIVATION_CHARGE + 5.0 {
        session.input.press(InputCode::Stealth);
    }
}
