use std::collections::HashMap;

use engine_core::{
    CharacterEvent, CharacterEventKind, CharacterSprite, EntityId, Extension, GameEnv, MapNotes,
    PluginParams, Position,
};
use tracing::{debug, warn};

use crate::config::ShadowConfig;
use crate::regions::ShadowRegionSet;
use crate::sprite::{advance_alpha, blend_step};

/// The shadow darkening extension.
///
/// Owns the per-map region set and one boolean per live character; the
/// sprite-side alpha lives in the host's blend color and is only ever
/// stepped through [`CharacterSprite::set_blend_color`].
pub struct ShadowDarken {
    config: ShadowConfig,
    regions: ShadowRegionSet,
    in_shadow: HashMap<EntityId, bool>,
}

impl ShadowDarken {
    pub const NAME: &'static str = "shadow-darken";

    pub fn new(config: ShadowConfig) -> Self {
        let regions = ShadowRegionSet::from_config(&config);
        Self {
            config,
            regions,
            in_shadow: HashMap::new(),
        }
    }

    pub fn from_params(params: &PluginParams) -> Self {
        Self::new(ShadowConfig::from_params(params))
    }

    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    /// Whether the character currently counts as standing in shadow.
    /// Characters the extension has never seen count as lit.
    pub fn is_in_shadow(&self, id: EntityId) -> bool {
        self.in_shadow.get(&id).copied().unwrap_or(false)
    }

    /// Forces the character into shadow until its next position event.
    pub fn enter_shadow(&mut self, id: EntityId) {
        self.in_shadow.insert(id, true);
    }

    /// Forces the character out of shadow until its next position event.
    pub fn leave_shadow(&mut self, id: EntityId) {
        self.in_shadow.insert(id, false);
    }

    fn refresh(&mut self, id: EntityId, position: Position, env: &GameEnv<'_>) {
        let region = env.map().region_id(position);
        self.in_shadow.insert(id, self.regions.contains(region));
    }
}

impl Extension for ShadowDarken {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_map_setup(&mut self, env: &GameEnv<'_>) {
        let notes = MapNotes::parse(env.map().note());
        for err in notes.skipped() {
            warn!(map = %env.map().id(), %err, "skipped malformed map note line");
        }
        self.regions = ShadowRegionSet::for_map(&self.config, &notes);
        debug!(
            map = %env.map().id(),
            regions = self.regions.len(),
            "rebuilt shadow region set"
        );
    }

    fn on_character_event(&mut self, event: &CharacterEvent, env: &GameEnv<'_>) {
        match event.kind {
            // A fresh character starts lit; its first placement decides.
            CharacterEventKind::Spawned => {
                self.in_shadow.insert(event.id, false);
            }
            CharacterEventKind::Placed
            | CharacterEventKind::Moved
            | CharacterEventKind::Turned => {
                self.refresh(event.id, event.position, env);
            }
        }
    }

    fn on_character_removed(&mut self, id: EntityId) {
        self.in_shadow.remove(&id);
    }

    fn on_sprite_bind(&mut self, sprite: &mut dyn CharacterSprite, _env: &GameEnv<'_>) {
        // No fade-in for a sprite born in shadow: snap straight to dark.
        if self.is_in_shadow(sprite.character()) {
            let color = sprite.blend_color();
            sprite.set_blend_color(color.with_alpha(self.config.dark_amount));
        }
    }

    fn on_sprite_update(&mut self, sprite: &mut dyn CharacterSprite, _env: &GameEnv<'_>) {
        let in_shadow = self.is_in_shadow(sprite.character());
        let color = sprite.blend_color();
        let alpha = advance_alpha(
            color.alpha,
            in_shadow,
            blend_step(sprite.move_speed()),
            self.config.dark_amount,
        );
        if alpha != color.alpha {
            sprite.set_blend_color(color.with_alpha(alpha));
        }
    }
}
