//! Lifecycle extension points dispatched by the runtime.
//!
//! Instead of patching engine internals, behavior modifications implement
//! [`Extension`] and receive the host's lifecycle notifications through a
//! registry. Every hook gets the current oracle bundle by reference, so an
//! extension holds no ambient engine state of its own.

use crate::env::GameEnv;
use crate::sprite::CharacterSprite;
use crate::types::{BattlebackSlot, EntityId, Position};

/// The position-affecting lifecycle moments of a character entity.
///
/// The host reports `Moved` only for moves that actually succeeded; blocked
/// movement attempts produce no event.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacterEventKind {
    /// The entity was created; `position` is its initial tile before any
    /// explicit placement.
    Spawned,
    /// The entity was placed directly at a tile (map transfer, editor
    /// placement, event relocation).
    Placed,
    /// The entity finished a successful straight or diagonal step.
    Moved,
    /// The entity turned in place, re-resolving its tile.
    Turned,
}

/// A character lifecycle notification from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterEvent {
    pub id: EntityId,
    pub kind: CharacterEventKind,
    /// The entity's tile after the event took effect.
    pub position: Position,
}

impl CharacterEvent {
    pub fn new(id: EntityId, kind: CharacterEventKind, position: Position) -> Self {
        Self { id, kind, position }
    }

    pub fn spawned(id: EntityId, position: Position) -> Self {
        Self::new(id, CharacterEventKind::Spawned, position)
    }

    pub fn placed(id: EntityId, position: Position) -> Self {
        Self::new(id, CharacterEventKind::Placed, position)
    }

    pub fn moved(id: EntityId, position: Position) -> Self {
        Self::new(id, CharacterEventKind::Moved, position)
    }

    pub fn turned(id: EntityId, position: Position) -> Self {
        Self::new(id, CharacterEventKind::Turned, position)
    }
}

/// A behavior modification hooked into the host's lifecycle.
///
/// All hooks default to no-ops; an extension overrides only the moments it
/// cares about. Hooks run on the host's single frame-driven thread, in
/// registry priority order (lower values first).
pub trait Extension {
    /// Stable name used for registry lookup and log records.
    fn name(&self) -> &'static str;

    /// Dispatch order relative to other extensions. Lower values run first.
    fn priority(&self) -> i32 {
        0
    }

    /// A map finished loading. Per-map state (note-derived tables, region
    /// sets) must be rebuilt here; no per-frame hook fires for a map before
    /// its setup notification.
    fn on_map_setup(&mut self, _env: &GameEnv<'_>) {}

    /// A character entity changed position state; see [`CharacterEventKind`].
    fn on_character_event(&mut self, _event: &CharacterEvent, _env: &GameEnv<'_>) {}

    /// A character entity was destroyed; drop any state keyed to it.
    fn on_character_removed(&mut self, _id: EntityId) {}

    /// A sprite view was bound to its character, before its first update.
    fn on_sprite_bind(&mut self, _sprite: &mut dyn CharacterSprite, _env: &GameEnv<'_>) {}

    /// One render tick for one sprite view. Runs every frame regardless of
    /// whether anything changed; implementations are expected to converge
    /// and become no-ops on their own.
    fn on_sprite_update(&mut self, _sprite: &mut dyn CharacterSprite, _env: &GameEnv<'_>) {}

    /// Battle is starting: name the battleback for `slot`, or `None` to let
    /// lower-priority extensions and ultimately the host's tile-based
    /// default decide.
    fn battleback_name(&self, _slot: BattlebackSlot, _env: &GameEnv<'_>) -> Option<&str> {
        None
    }
}
