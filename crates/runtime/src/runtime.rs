//! The facade the host engine embeds.

use engine_core::{
    BattlebackSlot, CharacterEvent, CharacterSprite, EntityId, Extension, GameEnv, PluginParams,
};
use shadow_darken::ShadowDarken;
use terrain_battlebacks::TerrainBattlebacks;
use tracing::debug;

use crate::registry::ExtensionRegistry;

/// Drives the registered extensions from host lifecycle notifications.
///
/// The host owns the call sites: it notifies the runtime when a map is set
/// up, when characters spawn/move/despawn, once per sprite per render tick,
/// and when a battle scene asks for its battlebacks. The runtime itself
/// never calls back into the host except through the oracles it is handed.
pub struct Runtime {
    registry: ExtensionRegistry,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// A map finished loading; per-map extension state is rebuilt here.
    pub fn notify_map_setup(&mut self, env: &GameEnv<'_>) {
        self.registry.on_map_setup(env);
    }

    pub fn notify_character_event(&mut self, event: &CharacterEvent, env: &GameEnv<'_>) {
        self.registry.on_character_event(event, env);
    }

    pub fn notify_character_removed(&mut self, id: EntityId) {
        self.registry.on_character_removed(id);
    }

    /// A sprite view was (re)bound to its character.
    pub fn bind_sprite(&mut self, sprite: &mut dyn CharacterSprite, env: &GameEnv<'_>) {
        self.registry.on_sprite_bind(sprite, env);
    }

    /// One render tick for one sprite view.
    pub fn update_sprite(&mut self, sprite: &mut dyn CharacterSprite, env: &GameEnv<'_>) {
        self.registry.on_sprite_update(sprite, env);
    }

    /// Battleback for one scene slot, or `None` for the host's default
    /// tile-based selection.
    pub fn select_battleback(&self, slot: BattlebackSlot, env: &GameEnv<'_>) -> Option<&str> {
        self.registry.battleback_name(slot, env)
    }
}

/// Assembles a [`Runtime`] from plugin parameters and extensions.
pub struct RuntimeBuilder {
    params: PluginParams,
    extensions: Vec<Box<dyn Extension>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            params: PluginParams::new(),
            extensions: Vec::new(),
        }
    }

    /// Startup configuration for the bundled extensions.
    pub fn params(mut self, params: PluginParams) -> Self {
        self.params = params;
        self
    }

    /// Registers a custom extension alongside (or instead of) the bundled
    /// ones.
    pub fn register(mut self, extension: Box<dyn Extension>) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Registers shadow darkening and terrain battlebacks, configured from
    /// the builder's parameters.
    pub fn with_bundled_extensions(mut self) -> Self {
        self.extensions
            .push(Box::new(ShadowDarken::from_params(&self.params)));
        self.extensions
            .push(Box::new(TerrainBattlebacks::from_params(&self.params)));
        self
    }

    pub fn build(self) -> Runtime {
        let registry = ExtensionRegistry::new(self.extensions);
        debug!(extensions = registry.len(), "runtime assembled");
        Runtime { registry }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
