use crate::types::Position;

/// Read-only view of the player character's map state.
pub trait PlayerOracle: Send + Sync {
    /// The tile the player currently occupies.
    fn position(&self) -> Position;
}
