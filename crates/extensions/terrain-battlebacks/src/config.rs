use std::collections::HashMap;

use engine_core::{BattlebackSlot, ParamError, PluginParams, RegionId, TerrainTag};
use tracing::warn;

/// Parameter key for the region table: `id,bg1,bg2|id,bg1,bg2|...`.
pub const REGION_BATTLEBACKS_PARAM: &str = "Region Battlebacks";
/// Parameter key selecting the slot-gating behavior; see [`GatingMode`].
pub const SLOT_GATING_PARAM: &str = "Slot Gating";

/// Parameter key for one terrain tag's `bg1,bg2` entry, tags 1 through 7.
pub fn terrain_param(tag: u8) -> String {
    format!("Terrain Tag {tag} Battlebacks")
}

/// The battleback names one table entry assigns to the two scene slots.
///
/// Either name may be absent; an absent name means "nothing for that slot"
/// and does not fall through to lower-priority tables once the entry itself
/// has matched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattlebackPair {
    names: [Option<String>; 2],
}

impl BattlebackPair {
    pub fn new(battleback1: Option<String>, battleback2: Option<String>) -> Self {
        Self {
            names: [battleback1, battleback2],
        }
    }

    /// Builds a pair from comma-split values; empty strings count as absent.
    pub fn from_values(values: &[String]) -> Self {
        let name = |index: usize| {
            values
                .get(index)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };
        Self::new(name(0), name(1))
    }

    pub fn get(&self, slot: BattlebackSlot) -> Option<&str> {
        self.names[slot.index()].as_deref()
    }

    /// True when neither slot carries a name.
    pub fn is_empty(&self) -> bool {
        self.names.iter().all(Option::is_none)
    }
}

/// Which host-side slot unlocks the region and terrain lookups.
///
/// The legacy behavior gates the region chain on battleback slot one being
/// unresolved by the host and the terrain chain on slot two, regardless of
/// which slot is being queried. `Symmetric` gates each chain on the queried
/// slot itself.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GatingMode {
    #[default]
    Legacy,
    Symmetric,
}

/// Startup configuration: the global lookup tables. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattlebackConfig {
    terrain: HashMap<TerrainTag, BattlebackPair>,
    regions: HashMap<RegionId, BattlebackPair>,
    pub gating: GatingMode,
}

impl BattlebackConfig {
    /// Builds the tables from host plugin parameters.
    ///
    /// Unset parameters simply leave their table entries out; entries with
    /// an unparseable id are logged and skipped. Nothing here fails startup.
    pub fn from_params(params: &PluginParams) -> Self {
        let mut config = Self::default();

        for tag in 1..=7u8 {
            if let Some(raw) = params.raw(&terrain_param(tag)) {
                if raw.trim().is_empty() {
                    continue;
                }
                let values: Vec<String> = raw.split(',').map(str::to_owned).collect();
                config
                    .terrain
                    .insert(TerrainTag(tag), BattlebackPair::from_values(&values));
            }
        }

        if let Some(raw) = params.raw(REGION_BATTLEBACKS_PARAM) {
            for entry in raw.split('|').filter(|e| !e.trim().is_empty()) {
                let mut values: Vec<String> =
                    entry.split(',').map(|v| v.trim().to_owned()).collect();
                let id = values.remove(0);
                match id.parse::<u16>() {
                    Ok(id) => {
                        config
                            .regions
                            .insert(RegionId(id), BattlebackPair::from_values(&values));
                    }
                    Err(_) => warn!(entry, "skipping region battleback entry with bad id"),
                }
            }
        }

        config.gating = match params.parsed::<GatingMode>(SLOT_GATING_PARAM) {
            Ok(mode) => mode,
            Err(ParamError::Missing(_)) => GatingMode::default(),
            Err(err) => {
                warn!(%err, "falling back to legacy slot gating");
                GatingMode::default()
            }
        };

        config
    }

    pub fn terrain(&self, tag: TerrainTag) -> Option<&BattlebackPair> {
        self.terrain.get(&tag)
    }

    pub fn region(&self, id: RegionId) -> Option<&BattlebackPair> {
        self.regions.get(&id)
    }
}
