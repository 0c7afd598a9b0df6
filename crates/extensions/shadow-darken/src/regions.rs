use std::collections::HashSet;

use engine_core::{MapNotes, RegionId};
use tracing::warn;

use crate::config::ShadowConfig;

/// Note directive appending shadow region ids for one map.
pub const SHADOW_REGIONS_DIRECTIVE: &str = "SHADOW_REGIONS";

/// The effective shadow region set of the currently loaded map:
/// configuration defaults plus ids from the map's `SHADOW_REGIONS` note
/// lines. Rebuilt at every map setup, immutable in between.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShadowRegionSet {
    ids: HashSet<RegionId>,
}

impl ShadowRegionSet {
    /// Set containing only the configured defaults. This is the state before
    /// any map has been set up.
    pub fn from_config(config: &ShadowConfig) -> Self {
        Self {
            ids: config.regions.iter().copied().collect(),
        }
    }

    /// Effective set for one map: defaults extended by every
    /// `SHADOW_REGIONS` directive in the map note. Unparseable ids are
    /// logged and skipped.
    pub fn for_map(config: &ShadowConfig, notes: &MapNotes) -> Self {
        let mut set = Self::from_config(config);
        for directive in notes.directives(SHADOW_REGIONS_DIRECTIVE) {
            for value in &directive.values {
                if value.is_empty() {
                    continue;
                }
                match value.parse::<u16>() {
                    Ok(id) => {
                        set.ids.insert(RegionId(id));
                    }
                    Err(_) => {
                        warn!(value = value.as_str(), "skipping unparseable shadow region id in map note")
                    }
                }
            }
        }
        set
    }

    pub fn contains(&self, region: RegionId) -> bool {
        self.ids.contains(&region)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
