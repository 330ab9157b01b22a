pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, EngineConfig, EngineContext, RenderContext};
pub use api::types::{BodyKind, GameEvent};
pub use crate::core::settings::{SimulationConfig, SettingsUpdate, SliderRange, time_speed_from_slider};
pub use crate::core::store::{OrbitalState, OrbitalBatch, StateTable, SystemStore};
pub use crate::core::time::{FrameClock, FrameInfo};
pub use renderer::instance::{BodyInstance, InstanceBuffer};
pub use input::queue::{ControlEvent, ControlQueue};
pub use assets::catalog::{RawCatalog, RawPlanet, RawMoon, RawRecord};
pub use bridge::protocol::ProtocolLayout;
pub use systems::render::{build_instance_buffer, BodyVisual};
