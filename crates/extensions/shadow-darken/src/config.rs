use engine_core::{ParamError, PluginParams, RegionId};
use tracing::warn;

/// Parameter key for the overlay strength applied in shadow.
pub const DARK_AMOUNT_PARAM: &str = "Dark Amount";
/// Parameter key for the comma-separated default shadow region ids.
pub const SHADOW_REGIONS_PARAM: &str = "Shadow Regions";

/// Startup configuration for shadow darkening. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowConfig {
    /// Overlay alpha a sprite converges to while its character stands in
    /// shadow (0-255).
    pub dark_amount: u8,
    /// Region ids treated as shadow on every map, before map notes add more.
    pub regions: Vec<RegionId>,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            dark_amount: 130,
            regions: vec![RegionId(237), RegionId(238)],
        }
    }
}

impl ShadowConfig {
    /// Builds the config from host plugin parameters.
    ///
    /// Missing parameters fall back to defaults; unusable values are logged
    /// and fall back too. Configuration problems never fail startup.
    pub fn from_params(params: &PluginParams) -> Self {
        let defaults = Self::default();

        let dark_amount = match params.parsed::<u8>(DARK_AMOUNT_PARAM) {
            Ok(value) => value,
            Err(ParamError::Missing(_)) => defaults.dark_amount,
            Err(err) => {
                warn!(%err, "falling back to default dark amount");
                defaults.dark_amount
            }
        };

        let regions = match params.raw(SHADOW_REGIONS_PARAM) {
            None => defaults.regions,
            Some(raw) => parse_region_list(raw),
        };

        Self {
            dark_amount,
            regions,
        }
    }
}

/// Parses a `237,238,...` list, dropping entries that are not region ids.
fn parse_region_list(raw: &str) -> Vec<RegionId> {
    raw.split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            if entry.is_empty() {
                return None;
            }
            match entry.parse::<u16>() {
                Ok(id) => Some(RegionId(id)),
                Err(_) => {
                    warn!(entry, "skipping unparseable shadow region id");
                    None
                }
            }
        })
        .collect()
}
