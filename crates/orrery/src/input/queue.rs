/// Control-panel changes the engine understands.
/// Slider values are raw slider positions; mapping and clamping happen
/// when they are applied to `SimulationConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    TimeSpeed(f64),
    TimeOffset(f64),
    ObjectsDistance(f64),
    ObjectsRelativeScale(f64),
    OrbitAngleOffset(f64),
    DisableMoons(bool),
}

/// A queue of control events.
/// JS pushes events between frames; the runner drains them right before
/// the frame's update so the update sees one consistent settings snapshot.
pub struct ControlQueue {
    events: Vec<ControlEvent>,
}

impl ControlQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new control event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: ControlEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for ControlQueue {
    fn default() -> Self {
        Self::new()
    }
}
