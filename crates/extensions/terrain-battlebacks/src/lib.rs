//! Selects battle backgrounds from the tile the player stands on.
//!
//! When a battle starts, the host asks for a battleback name per slot. The
//! answer comes from a layered lookup over the player's current region id
//! and terrain tag: per-map note overrides beat global configuration, and
//! region entries beat terrain entries. Maps that fix their battlebacks
//! explicitly, or have one forced by an event command, take precedence and
//! the extension stands down for the affected lookups.
mod config;
mod extension;
mod overrides;
mod resolver;

pub use config::{BattlebackConfig, BattlebackPair, GatingMode};
pub use extension::TerrainBattlebacks;
pub use overrides::MapBattlebackOverrides;
pub use resolver::resolve;
