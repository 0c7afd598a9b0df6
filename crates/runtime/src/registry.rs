//! Extension registry: storage, ordering, and event fan-out.

use engine_core::{
    BattlebackSlot, CharacterEvent, CharacterSprite, EntityId, Extension, GameEnv,
};
use tracing::debug;

/// Owns every registered extension and dispatches host notifications to
/// them.
///
/// Extensions run in priority order (lower values first); registration
/// order breaks ties. Mutating notifications reach every extension, while
/// battleback queries stop at the first extension that answers.
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: Vec<Box<dyn Extension>>,
}

impl ExtensionRegistry {
    pub fn new(mut extensions: Vec<Box<dyn Extension>>) -> Self {
        extensions.sort_by_key(|ext| ext.priority());
        Self { extensions }
    }

    pub fn register(&mut self, extension: Box<dyn Extension>) {
        self.extensions.push(extension);
        self.extensions.sort_by_key(|ext| ext.priority());
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Looks up a registered extension by its stable name.
    pub fn extension(&self, name: &str) -> Option<&dyn Extension> {
        self.extensions
            .iter()
            .find(|ext| ext.name() == name)
            .map(Box::as_ref)
    }

    pub fn on_map_setup(&mut self, env: &GameEnv<'_>) {
        debug!(map = %env.map().id(), "dispatching map setup");
        for ext in &mut self.extensions {
            ext.on_map_setup(env);
        }
    }

    pub fn on_character_event(&mut self, event: &CharacterEvent, env: &GameEnv<'_>) {
        for ext in &mut self.extensions {
            ext.on_character_event(event, env);
        }
    }

    pub fn on_character_removed(&mut self, id: EntityId) {
        for ext in &mut self.extensions {
            ext.on_character_removed(id);
        }
    }

    pub fn on_sprite_bind(&mut self, sprite: &mut dyn CharacterSprite, env: &GameEnv<'_>) {
        for ext in &mut self.extensions {
            ext.on_sprite_bind(sprite, env);
        }
    }

    pub fn on_sprite_update(&mut self, sprite: &mut dyn CharacterSprite, env: &GameEnv<'_>) {
        for ext in &mut self.extensions {
            ext.on_sprite_update(sprite, env);
        }
    }

    /// First answer wins, in priority order. `None` when every extension
    /// leaves the slot to the host.
    pub fn battleback_name(&self, slot: BattlebackSlot, env: &GameEnv<'_>) -> Option<&str> {
        for ext in &self.extensions {
            if let Some(name) = ext.battleback_name(slot, env) {
                debug!(extension = ext.name(), %slot, name, "battleback resolved");
                return Some(name);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{MapId, MapOracle, PlayerOracle, Position, RegionId, TerrainTag};

    struct TestMap;

    impl MapOracle for TestMap {
        fn id(&self) -> MapId {
            MapId(1)
        }

        fn region_id(&self, _position: Position) -> RegionId {
            RegionId::NONE
        }

        fn terrain_tag(&self, _position: Position) -> TerrainTag {
            TerrainTag(0)
        }
    }

    struct TestPlayer;

    impl PlayerOracle for TestPlayer {
        fn position(&self) -> Position {
            Position::ORIGIN
        }
    }

    /// Answers every battleback query with a fixed name.
    struct Named {
        name: &'static str,
        priority: i32,
        answer: Option<&'static str>,
    }

    impl Extension for Named {
        fn name(&self) -> &'static str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn battleback_name(&self, _slot: BattlebackSlot, _env: &GameEnv<'_>) -> Option<&str> {
            self.answer
        }
    }

    #[test]
    fn lower_priority_value_answers_first() {
        let registry = ExtensionRegistry::new(vec![
            Box::new(Named {
                name: "late",
                priority: 10,
                answer: Some("late"),
            }),
            Box::new(Named {
                name: "early",
                priority: -10,
                answer: Some("early"),
            }),
        ]);

        let map = TestMap;
        let player = TestPlayer;
        let env = GameEnv::new(&map, &player);
        assert_eq!(
            registry.battleback_name(BattlebackSlot::One, &env),
            Some("early")
        );
    }

    #[test]
    fn queries_skip_extensions_without_an_answer() {
        let registry = ExtensionRegistry::new(vec![
            Box::new(Named {
                name: "silent",
                priority: 0,
                answer: None,
            }),
            Box::new(Named {
                name: "spoken",
                priority: 1,
                answer: Some("bg"),
            }),
        ]);

        let map = TestMap;
        let player = TestPlayer;
        let env = GameEnv::new(&map, &player);
        assert_eq!(
            registry.battleback_name(BattlebackSlot::Two, &env),
            Some("bg")
        );
    }

    #[test]
    fn extensions_are_found_by_name() {
        let mut registry = ExtensionRegistry::default();
        registry.register(Box::new(Named {
            name: "finder",
            priority: 0,
            answer: None,
        }));

        assert!(registry.extension("finder").is_some());
        assert!(registry.extension("missing").is_none());
        assert_eq!(registry.len(), 1);
    }
}
