use std::collections::HashMap;

use glam::Vec3;

use crate::core::settings::SimulationConfig;

/// Per-frame state of one body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitalState {
    /// World-space position.
    pub position: Vec3,
    /// Euler angles (XYZ, radians). Axial spin lives in `y`.
    pub rotation: Vec3,
}

impl OrbitalState {
    pub const ZERO: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };
}

/// A batch of state writes produced by one pass, keyed by body name.
pub type OrbitalBatch = Vec<(String, OrbitalState)>;

/// Name-keyed orbital state table.
/// Entries keep insertion order (which is also their slot in the instance
/// buffer) and are never removed.
pub struct StateTable {
    names: Vec<String>,
    states: Vec<OrbitalState>,
    index: HashMap<String, usize>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            states: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite one entry.
    pub fn set(&mut self, name: &str, state: OrbitalState) {
        match self.index.get(name) {
            Some(&slot) => self.states[slot] = state,
            None => {
                self.index.insert(name.to_owned(), self.states.len());
                self.names.push(name.to_owned());
                self.states.push(state);
            }
        }
    }

    /// Apply a whole batch. Names not yet in the table are appended.
    /// Bodies absent from the batch keep their previous state.
    pub fn batch_update(&mut self, batch: &[(String, OrbitalState)]) {
        for (name, state) in batch {
            self.set(name, *state);
        }
    }

    pub fn get(&self, name: &str) -> Option<&OrbitalState> {
        self.index.get(name).map(|&slot| &self.states[slot])
    }

    /// Slot of a body in insertion order.
    pub fn slot(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Iterate `(name, state)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrbitalState)> {
        self.names.iter().map(String::as_str).zip(self.states.iter())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for StateTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state between the host's controls and the simulation:
/// live settings, the orbital state table and readiness flags.
pub struct SystemStore {
    pub settings: SimulationConfig,
    pub properties: StateTable,
    data_initialized: bool,
    is_initialized: bool,
}

impl SystemStore {
    pub fn new() -> Self {
        Self {
            settings: SimulationConfig::default(),
            properties: StateTable::new(),
            data_initialized: false,
            is_initialized: false,
        }
    }

    pub fn with_settings(settings: SimulationConfig) -> Self {
        Self {
            settings,
            ..Self::new()
        }
    }

    /// Write a batch of state updates in one step.
    pub fn batch_update_properties(&mut self, batch: &[(String, OrbitalState)]) {
        self.properties.batch_update(batch);
    }

    /// Mark catalog data as loaded and the simulation as ready.
    /// Returns `false` if this had already happened.
    pub fn mark_initialized(&mut self) -> bool {
        if self.is_initialized {
            return false;
        }
        self.data_initialized = true;
        self.is_initialized = true;
        true
    }

    pub fn data_initialized(&self) -> bool {
        self.data_initialized
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }
}

impl Default for SystemStore {
    fn default() -> Self {
        Self::new()
    }
}
