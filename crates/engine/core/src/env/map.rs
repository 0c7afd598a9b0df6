use crate::types::{BattlebackSlot, MapId, Position, RegionId, TerrainTag};

/// Read-only view of the map instance the host is currently running.
///
/// Implementations wrap the host's live map model; all lookups reflect the
/// map as loaded, which does not change between map setups.
pub trait MapOracle: Send + Sync {
    fn id(&self) -> MapId;

    /// Region id painted on the tile at `position`.
    ///
    /// Out-of-bounds positions report [`RegionId::NONE`], matching the host
    /// engine's behavior for queries past the map edge.
    fn region_id(&self, position: Position) -> RegionId;

    /// Terrain tag of the tile at `position` (0 when untagged).
    fn terrain_tag(&self, position: Position) -> TerrainTag;

    /// The map's free-text note field, as authored in the editor.
    fn note(&self) -> &str {
        ""
    }

    /// True when the map author fixed the battlebacks via the map's own
    /// "specify battleback" setting. Extensions must stand down entirely in
    /// that case.
    fn specifies_battleback(&self) -> bool {
        false
    }

    /// A battleback forced at runtime by a "change battle back" event
    /// command, if one is in effect for `slot`. `None` when unset; hosts
    /// must also report `None` for an empty name.
    fn battleback_name(&self, slot: BattlebackSlot) -> Option<&str> {
        let _ = slot;
        None
    }
}
