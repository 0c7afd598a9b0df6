//! Per-frame overlay alpha animation.
//!
//! The sprite-side alpha chases the character's shadow flag one step per
//! render tick. Stepping is a pure function so convergence can be checked
//! exhaustively without a sprite in hand.

use engine_core::MoveSpeed;

/// Alpha change applied per tick, scaled so the fade completes in roughly
/// the time the character needs to cross one tile at its current speed.
pub(crate) fn blend_step(speed: MoveSpeed) -> u8 {
    speed.0.saturating_add(5)
}

/// Advances the overlay alpha one tick toward its target and clamps it into
/// `[0, dark_amount]`. Returns the input unchanged once converged, making
/// the per-frame update idempotent after the transition finishes.
pub(crate) fn advance_alpha(alpha: u8, in_shadow: bool, step: u8, dark_amount: u8) -> u8 {
    if in_shadow {
        if alpha == dark_amount {
            return alpha;
        }
        alpha.saturating_add(step).min(dark_amount)
    } else {
        if alpha == 0 {
            return alpha;
        }
        alpha.saturating_sub(step).min(dark_amount)
    }
}
