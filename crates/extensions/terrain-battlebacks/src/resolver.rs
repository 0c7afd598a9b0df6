//! The layered battleback lookup.

use engine_core::{BattlebackSlot, GameEnv};

use crate::config::{BattlebackConfig, GatingMode};
use crate::overrides::MapBattlebackOverrides;

/// Resolves the battleback name for one scene slot, or `None` to hand the
/// decision back to the host's tile-based default selection.
///
/// Priority, first match wins:
/// 1. a map that specifies its own battlebacks disables the lookup entirely;
/// 2. region id: map-note override, then global table;
/// 3. terrain tag: map-note override, then global table.
///
/// Each chain only runs while its gate slot has no host-forced battleback
/// (an event command override); which slot gates which chain depends on
/// [`GatingMode`]. Once a table entry matches, its value for the requested
/// slot is final even when absent; lower layers are not consulted.
///
/// Pure with respect to its inputs: identical position and tables always
/// produce the identical answer.
pub fn resolve<'a>(
    slot: BattlebackSlot,
    config: &'a BattlebackConfig,
    overrides: &'a MapBattlebackOverrides,
    env: &GameEnv<'_>,
) -> Option<&'a str> {
    let map = env.map();
    if map.specifies_battleback() {
        return None;
    }

    let gate = |chain_gate: BattlebackSlot| match config.gating {
        GatingMode::Legacy => chain_gate,
        GatingMode::Symmetric => slot,
    };

    if map.battleback_name(gate(BattlebackSlot::One)).is_none() {
        let region = env.player_region();
        if let Some(pair) = overrides.region(region).or_else(|| config.region(region)) {
            return pair.get(slot);
        }
    }

    if map.battleback_name(gate(BattlebackSlot::Two)).is_none() {
        let terrain = env.player_terrain();
        if let Some(pair) = overrides
            .terrain(terrain)
            .or_else(|| config.terrain(terrain))
        {
            return pair.get(slot);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{
        MapId, MapNotes, MapOracle, PlayerOracle, PluginParams, Position, RegionId, TerrainTag,
    };

    struct TestMap {
        region: RegionId,
        terrain: TerrainTag,
        specifies: bool,
        forced: [Option<String>; 2],
    }

    impl Default for TestMap {
        fn default() -> Self {
            Self {
                region: RegionId::NONE,
                terrain: TerrainTag(0),
                specifies: false,
                forced: [None, None],
            }
        }
    }

    impl MapOracle for TestMap {
        fn id(&self) -> MapId {
            MapId(1)
        }

        fn region_id(&self, _position: Position) -> RegionId {
            self.region
        }

        fn terrain_tag(&self, _position: Position) -> TerrainTag {
            self.terrain
        }

        fn specifies_battleback(&self) -> bool {
            self.specifies
        }

        fn battleback_name(&self, slot: BattlebackSlot) -> Option<&str> {
            self.forced[slot.index()].as_deref()
        }
    }

    struct TestPlayer;

    impl PlayerOracle for TestPlayer {
        fn position(&self) -> Position {
            Position::ORIGIN
        }
    }

    fn config(entries: &[(&str, &str)]) -> BattlebackConfig {
        let params: PluginParams = entries.iter().copied().collect();
        BattlebackConfig::from_params(&params)
    }

    fn resolve_pair<'a>(
        config: &'a BattlebackConfig,
        overrides: &'a MapBattlebackOverrides,
        map: &TestMap,
    ) -> (Option<&'a str>, Option<&'a str>) {
        let player = TestPlayer;
        let env = GameEnv::new(map, &player);
        (
            resolve(BattlebackSlot::One, config, overrides, &env),
            resolve(BattlebackSlot::Two, config, overrides, &env),
        )
    }

    #[test]
    fn global_region_table_serves_both_slots() {
        let config = config(&[("Region Battlebacks", "3,bg_cave1,bg_cave2")]);
        let overrides = MapBattlebackOverrides::default();
        let map = TestMap {
            region: RegionId(3),
            ..TestMap::default()
        };

        assert_eq!(
            resolve_pair(&config, &overrides, &map),
            (Some("bg_cave1"), Some("bg_cave2"))
        );
    }

    #[test]
    fn map_note_override_beats_the_global_table() {
        let config = config(&[("Terrain Tag 2 Battlebacks", "plains1,plains2")]);
        let overrides =
            MapBattlebackOverrides::parse(&MapNotes::parse("<tbacks 2:forest1,forest2>"));
        let map = TestMap {
            terrain: TerrainTag(2),
            ..TestMap::default()
        };

        assert_eq!(
            resolve_pair(&config, &overrides, &map),
            (Some("forest1"), Some("forest2"))
        );
    }

    #[test]
    fn region_entries_beat_terrain_entries() {
        let config = config(&[
            ("Region Battlebacks", "3,cave1,cave2"),
            ("Terrain Tag 2 Battlebacks", "forest1,forest2"),
        ]);
        let overrides = MapBattlebackOverrides::default();
        let map = TestMap {
            region: RegionId(3),
            terrain: TerrainTag(2),
            ..TestMap::default()
        };

        assert_eq!(
            resolve_pair(&config, &overrides, &map),
            (Some("cave1"), Some("cave2"))
        );
    }

    #[test]
    fn terrain_applies_when_no_region_entry_matches() {
        let config = config(&[("Terrain Tag 2 Battlebacks", "forest1,forest2")]);
        let overrides = MapBattlebackOverrides::default();
        let map = TestMap {
            region: RegionId(99),
            terrain: TerrainTag(2),
            ..TestMap::default()
        };

        assert_eq!(
            resolve_pair(&config, &overrides, &map),
            (Some("forest1"), Some("forest2"))
        );
    }

    #[test]
    fn specified_battlebacks_disable_the_lookup() {
        let config = config(&[("Region Battlebacks", "3,cave1,cave2")]);
        let overrides = MapBattlebackOverrides::default();
        let map = TestMap {
            region: RegionId(3),
            specifies: true,
            ..TestMap::default()
        };

        assert_eq!(resolve_pair(&config, &overrides, &map), (None, None));
    }

    #[test]
    fn legacy_gating_keys_each_chain_off_its_fixed_slot() {
        let config = config(&[
            ("Region Battlebacks", "3,cave1,cave2"),
            ("Terrain Tag 2 Battlebacks", "forest1,forest2"),
        ]);
        let overrides = MapBattlebackOverrides::default();

        // A forced slot-one battleback suppresses region lookups for BOTH
        // slots; the terrain chain still answers.
        let map = TestMap {
            region: RegionId(3),
            terrain: TerrainTag(2),
            forced: [Some("forced1".to_owned()), None],
            ..TestMap::default()
        };
        assert_eq!(
            resolve_pair(&config, &overrides, &map),
            (Some("forest1"), Some("forest2"))
        );

        // A forced slot-two battleback suppresses terrain lookups for both
        // slots; with no region entry nothing answers.
        let map = TestMap {
            region: RegionId(99),
            terrain: TerrainTag(2),
            forced: [None, Some("forced2".to_owned())],
            ..TestMap::default()
        };
        assert_eq!(resolve_pair(&config, &overrides, &map), (None, None));
    }

    #[test]
    fn symmetric_gating_keys_each_chain_off_the_requested_slot() {
        let config = config(&[
            ("Region Battlebacks", "3,cave1,cave2"),
            ("Slot Gating", "symmetric"),
        ]);
        let overrides = MapBattlebackOverrides::default();
        let map = TestMap {
            region: RegionId(3),
            forced: [Some("forced1".to_owned()), None],
            ..TestMap::default()
        };

        // Slot one is host-forced, so only its own lookup is suppressed.
        assert_eq!(
            resolve_pair(&config, &overrides, &map),
            (None, Some("cave2"))
        );
    }

    #[test]
    fn matched_entry_with_absent_slot_ends_the_chain() {
        let config = config(&[
            ("Region Battlebacks", "3,cave1,"),
            ("Terrain Tag 2 Battlebacks", "forest1,forest2"),
        ]);
        let overrides = MapBattlebackOverrides::default();
        let map = TestMap {
            region: RegionId(3),
            terrain: TerrainTag(2),
            ..TestMap::default()
        };

        // The region entry matched, so slot two does not fall through to
        // the terrain tables; the host default takes over instead.
        assert_eq!(
            resolve_pair(&config, &overrides, &map),
            (Some("cave1"), None)
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let config = config(&[("Region Battlebacks", "3,cave1,cave2")]);
        let overrides = MapBattlebackOverrides::default();
        let map = TestMap {
            region: RegionId(3),
            ..TestMap::default()
        };

        assert_eq!(
            resolve_pair(&config, &overrides, &map),
            resolve_pair(&config, &overrides, &map)
        );
    }

    #[test]
    fn no_matching_entry_resolves_to_nothing() {
        let config = BattlebackConfig::default();
        let overrides = MapBattlebackOverrides::default();
        let map = TestMap::default();

        assert_eq!(resolve_pair(&config, &overrides, &map), (None, None));
    }
}
