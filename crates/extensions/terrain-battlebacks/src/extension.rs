use engine_core::{BattlebackSlot, Extension, GameEnv, MapNotes, PluginParams};
use tracing::{debug, warn};

use crate::config::BattlebackConfig;
use crate::overrides::MapBattlebackOverrides;
use crate::resolver::resolve;

/// The terrain/region battleback extension.
///
/// Holds the immutable global tables plus the overrides of whichever map is
/// currently loaded. Battleback queries are answered without mutating
/// anything, so asking twice for the same battle gives the same answer.
pub struct TerrainBattlebacks {
    config: BattlebackConfig,
    overrides: MapBattlebackOverrides,
}

impl TerrainBattlebacks {
    pub const NAME: &'static str = "terrain-battlebacks";

    pub fn new(config: BattlebackConfig) -> Self {
        Self {
            config,
            overrides: MapBattlebackOverrides::default(),
        }
    }

    pub fn from_params(params: &PluginParams) -> Self {
        Self::new(BattlebackConfig::from_params(params))
    }

    pub fn config(&self) -> &BattlebackConfig {
        &self.config
    }

    pub fn overrides(&self) -> &MapBattlebackOverrides {
        &self.overrides
    }
}

impl Extension for TerrainBattlebacks {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_map_setup(&mut self, env: &GameEnv<'_>) {
        let notes = MapNotes::parse(env.map().note());
        for err in notes.skipped() {
            warn!(map = %env.map().id(), %err, "skipped malformed map note line");
        }
        self.overrides = MapBattlebackOverrides::parse(&notes);
        debug!(
            map = %env.map().id(),
            has_overrides = !self.overrides.is_empty(),
            "rebuilt battleback overrides"
        );
    }

    fn battleback_name(&self, slot: BattlebackSlot, env: &GameEnv<'_>) -> Option<&str> {
        resolve(slot, &self.config, &self.overrides, env)
    }
}
