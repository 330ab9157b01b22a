use crate::api::types::GameEvent;
use crate::core::settings::SimulationConfig;
use crate::core::store::SystemStore;
use crate::core::time::FrameInfo;
use crate::renderer::instance::InstanceBuffer;
use crate::systems::render::{build_instance_buffer, BodyVisual};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of bodies packed into the instance buffer (default: 64).
    pub max_bodies: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Settings the store starts with.
    pub initial_settings: SimulationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_bodies: 64,
            max_events: 32,
            initial_settings: SimulationConfig::default(),
        }
    }
}

/// The core contract every simulation must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
    }

    /// One-time setup: load static data, seed the state table, mark the store ready.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Called exactly once per rendered frame, after queued controls were applied.
    fn update(&mut self, ctx: &mut EngineContext, frame: &FrameInfo);

    /// Fill the instance buffer for the renderer. Runs after every update.
    /// The default packs every body with unit scale.
    fn render(&self, ctx: &mut RenderContext) {
        build_instance_buffer(&ctx.store.properties, |_| BodyVisual::default(), ctx.buffer);
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub store: SystemStore,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            store: SystemStore::with_settings(config.initial_settings),
            events: Vec::with_capacity(config.max_events),
        }
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only store view plus the buffer to fill, passed to Game::render.
pub struct RenderContext<'a> {
    pub store: &'a SystemStore,
    pub buffer: &'a mut InstanceBuffer,
}
