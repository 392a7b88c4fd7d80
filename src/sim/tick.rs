//! Fixed-step simulation tick
//!
//! One call advances the whole simulation by one logical step: battery,
//! player movement, guard patrols, then terminal checks. The function is
//! total: every reachable state has a defined next state, and a terminal
//! outcome latches so further ticks are no-ops.

use super::collision;
use super::geometry;
use super::state::{Outcome, SimState};
use super::vision;
use crate::consts::*;
use crate::input::{InputCode, InputState};

/// Advance the simulation by one tick.
///
/// Order matters and is fixed: gauge, player, guards, win check, then the
/// grace-gated capture checks. The exit check runs before any guard check,
/// so reaching the exit inside a vision cone still wins.
pub fn tick(state: &mut SimState, input: &mut InputState) {
    if state.outcome.is_terminal() {
        return;
    }

    // 1. Cloak battery
    let engage = input.take_stealth_edge();
    let held = input.is_held(InputCode::Stealth);
    state.battery.update(engage, held);

    // 2. Player movement
    state.player.position = collision::resolve_player_move(
        state.player.position,
        state.player.radius,
        state.player.speed,
        input.movement_intent(),
        &state.level.walls,
    );

    // 3. Guard patrols
    for guard in &mut state.guards {
        guard.advance();
    }

    // 4. Win: player circle touches the exit zone
    if geometry::circles_overlap(
        state.player.position,
        state.player.radius,
        state.level.exit.position,
        state.level.exit.radius,
    ) {
        log::debug!("exit reached on tick {}", state.ticks);
        state.outcome = Outcome::ExitReached;
        return;
    }

    // 5. Capture, suppressed during the spawn grace period; first
    // triggering guard wins
    if state.grace_elapsed() {
        for guard in &state.guards {
            if geometry::circles_overlap(
                state.player.position,
                state.player.radius,
                guard.position,
                GUARD_RADIUS,
            ) {
                log::debug!("caught by guard {} (contact) on tick {}", guard.id, state.ticks);
                state.outcome = Outcome::Caught;
                return;
            }

            let range = guard.effective_view_distance(state.battery.active);
            if vision::sees(guard, state.player.position, &state.level.walls, range) {
                log::debug!("caught by guard {} (seen) on tick {}", guard.id, state.ticks);
                state.outcome = Outcome::Caught;
                return;
            }
        }
    }

    state.time += TIME_STEP;
    state.ticks += 1;
}
