use std::collections::HashMap;

use engine_core::{MapNotes, RegionId, TerrainTag};
use tracing::warn;

use crate::config::BattlebackPair;

/// Note tag overriding battlebacks for one region id on this map.
pub const RBACKS_TAG: &str = "rbacks";
/// Note tag overriding battlebacks for one terrain tag on this map.
pub const TBACKS_TAG: &str = "tbacks";

/// Per-map battleback overrides from `<rbacks id:bg1,bg2>` and
/// `<tbacks id:bg1,bg2>` note tags. Rebuilt at every map setup; beats the
/// global tables while that map is loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapBattlebackOverrides {
    regions: HashMap<RegionId, BattlebackPair>,
    terrain: HashMap<TerrainTag, BattlebackPair>,
}

impl MapBattlebackOverrides {
    pub fn parse(notes: &MapNotes) -> Self {
        let mut overrides = Self::default();
        for tag in notes.tags() {
            // A tag that names no battleback at all is treated as not
            // written, so the global tables still apply.
            let pair = BattlebackPair::from_values(&tag.values);
            if pair.is_empty() {
                continue;
            }
            match tag.name.as_str() {
                RBACKS_TAG => {
                    overrides.regions.insert(RegionId(tag.id), pair);
                }
                TBACKS_TAG => match u8::try_from(tag.id) {
                    Ok(id) => {
                        overrides.terrain.insert(TerrainTag(id), pair);
                    }
                    Err(_) => warn!(id = tag.id, "skipping terrain battleback tag with bad id"),
                },
                // Tags for other extensions are none of our business.
                _ => {}
            }
        }
        overrides
    }

    pub fn region(&self, id: RegionId) -> Option<&BattlebackPair> {
        self.regions.get(&id)
    }

    pub fn terrain(&self, tag: TerrainTag) -> Option<&BattlebackPair> {
        self.terrain.get(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.terrain.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::BattlebackSlot;

    #[test]
    fn parses_both_tag_kinds() {
        let notes = MapNotes::parse("<rbacks 3:cave1,cave2>\n<tbacks 2:forest1,forest2>");
        let overrides = MapBattlebackOverrides::parse(&notes);

        let pair = overrides.region(RegionId(3)).unwrap();
        assert_eq!(pair.get(BattlebackSlot::One), Some("cave1"));
        let pair = overrides.terrain(TerrainTag(2)).unwrap();
        assert_eq!(pair.get(BattlebackSlot::Two), Some("forest2"));
    }

    #[test]
    fn unrelated_tags_are_ignored() {
        let notes = MapNotes::parse("<weather 1:rain>");
        assert!(MapBattlebackOverrides::parse(&notes).is_empty());
    }

    #[test]
    fn nameless_tags_count_as_not_written() {
        let notes = MapNotes::parse("<rbacks 3:>\n<tbacks 2:,>");
        assert!(MapBattlebackOverrides::parse(&notes).is_empty());
    }
}
