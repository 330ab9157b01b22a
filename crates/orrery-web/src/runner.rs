use orrery::{
    Game, EngineConfig, EngineContext, RenderContext,
    ControlEvent, ControlQueue, InstanceBuffer,
    FrameClock, ProtocolLayout, SettingsUpdate,
};
use orrery::bridge::protocol::HEADER_FLOATS;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `solar-system`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    controls: ControlQueue,
    clock: FrameClock,
    buffer: InstanceBuffer,
    layout: ProtocolLayout,
    initialized: bool,
    header: [f32; HEADER_FLOATS],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config: EngineConfig = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            ctx: EngineContext::from_config(&config),
            buffer: InstanceBuffer::with_capacity(config.max_bodies),
            game,
            controls: ControlQueue::new(),
            clock: FrameClock::new(),
            layout,
            initialized: false,
            header: [0.0; HEADER_FLOATS],
        }
    }

    /// Initialize the game. Call once after construction; later calls are ignored.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("init called twice, ignoring");
            return;
        }
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.render();
    }

    /// Queue a control change; it takes effect at the start of the next tick.
    pub fn push_control(&mut self, event: ControlEvent) {
        self.controls.push(event);
    }

    /// Apply a JSON settings patch directly to the store.
    /// Before `init` this also sets what the game sees during its setup.
    pub fn apply_settings(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let update = SettingsUpdate::from_json(json)?;
        self.ctx.store.settings.apply_update(&update);
        Ok(())
    }

    /// Run one frame: apply controls, update the game once, rebuild the instance buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let frame = self.clock.advance(dt);

        // Settings are settled before update reads them
        for event in self.controls.drain() {
            self.ctx.store.settings.apply_control(&event);
        }

        self.game.update(&mut self.ctx, &frame);
        self.render();
    }

    fn render(&mut self) {
        {
            let mut render_ctx = RenderContext {
                store: &self.ctx.store,
                buffer: &mut self.buffer,
            };
            self.game.render(&mut render_ctx);
        }

        self.header = self.layout.header(
            self.clock.frames(),
            self.ctx.store.is_initialized(),
            self.buffer.instances.len(),
            self.ctx.events.len(),
        );
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn is_ready(&self) -> bool {
        self.initialized && self.ctx.store.is_initialized()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Body names in instance-buffer order.
    pub fn body_names(&self) -> &[String] {
        self.ctx.store.properties.names()
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn bodies_ptr(&self) -> *const f32 {
        self.buffer.instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.buffer.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
