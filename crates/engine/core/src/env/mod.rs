//! Traits describing read-only host data.
//!
//! Oracles expose the host engine's map model and player state. The [`Env`]
//! aggregate bundles them so extensions can reach everything they need
//! without hard coupling to concrete host implementations.
mod map;
mod player;

pub use map::MapOracle;
pub use player::PlayerOracle;

use crate::types::{RegionId, TerrainTag};

/// Aggregates the read-only oracles handed to every extension call.
#[derive(Clone, Copy)]
pub struct Env<'a, M, P>
where
    M: MapOracle + ?Sized,
    P: PlayerOracle + ?Sized,
{
    map: &'a M,
    player: &'a P,
}

/// The oracle bundle in its type-erased form, as extensions receive it.
pub type GameEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn PlayerOracle + 'a>;

impl<'a, M, P> Env<'a, M, P>
where
    M: MapOracle + ?Sized,
    P: PlayerOracle + ?Sized,
{
    pub fn new(map: &'a M, player: &'a P) -> Self {
        Self { map, player }
    }

    pub fn map(&self) -> &M {
        self.map
    }

    pub fn player(&self) -> &P {
        self.player
    }

    /// Region id of the tile the player currently occupies.
    pub fn player_region(&self) -> RegionId {
        self.map.region_id(self.player.position())
    }

    /// Terrain tag of the tile the player currently occupies.
    pub fn player_terrain(&self) -> TerrainTag {
        self.map.terrain_tag(self.player.position())
    }
}
