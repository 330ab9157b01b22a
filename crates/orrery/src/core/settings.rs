use serde::Deserialize;

use crate::input::queue::ControlEvent;

/// Live, user-adjustable simulation scalars.
/// Read as one snapshot at the start of every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Multiplier on simulated time.
    pub time_speed: f64,
    /// Phase offset in days (365 days = one full Earth orbit).
    pub time_offset: f64,
    /// Multiplier on orbit radii.
    pub objects_distance: f64,
    /// Multiplier on rendered body radii.
    pub objects_relative_scale: f64,
    /// Extra tilt added to every orbit, in degrees.
    pub orbit_angle_offset: f64,
    /// When set, moons are neither normalized nor updated.
    pub disable_moons: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_speed: 1.0,
            time_offset: 0.0,
            objects_distance: 1.0,
            objects_relative_scale: 1.0,
            orbit_angle_offset: 0.0,
            disable_moons: false,
        }
    }
}

/// Partial settings patch sent by the host as JSON.
/// Absent fields leave the current value untouched; present ones obey the
/// same ranges as the control panel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsUpdate {
    pub time_speed: Option<f64>,
    pub time_offset: Option<f64>,
    pub objects_distance: Option<f64>,
    pub objects_relative_scale: Option<f64>,
    pub orbit_angle_offset: Option<f64>,
    pub disable_moons: Option<bool>,
}

impl SettingsUpdate {
    /// Parse a patch from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Range of a control-panel slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Clamped value, or `None` for NaN and infinities.
    pub fn accept(&self, value: f64) -> Option<f64> {
        value.is_finite().then(|| self.clamp(value))
    }
}

pub const TIME_SPEED_SLIDER: SliderRange = SliderRange::new(1.0, 100.0);
pub const TIME_OFFSET_SLIDER: SliderRange = SliderRange::new(-365.0, 365.0);
pub const OBJECTS_DISTANCE_SLIDER: SliderRange = SliderRange::new(1.0, 5.0);
pub const OBJECTS_RELATIVE_SCALE_SLIDER: SliderRange = SliderRange::new(1.0, 10.0);
pub const ORBIT_ANGLE_OFFSET_SLIDER: SliderRange = SliderRange::new(0.0, 360.0);

/// Slider positions above 1 are scaled by this factor into `time_speed`.
pub const TIME_SPEED_SLIDER_FACTOR: f64 = 100_000.0;

/// Bounds on a raw `time_speed` multiplier: frozen up to the fastest slider position.
pub const TIME_SPEED_LIMITS: SliderRange =
    SliderRange::new(0.0, TIME_SPEED_SLIDER.max * TIME_SPEED_SLIDER_FACTOR);

/// Map the time-speed slider position to a time multiplier.
/// Position 1 is real time; everything above is sped up.
pub fn time_speed_from_slider(position: f64) -> f64 {
    let position = TIME_SPEED_SLIDER.clamp(position);
    if position == 1.0 {
        1.0
    } else {
        position * TIME_SPEED_SLIDER_FACTOR
    }
}

impl SimulationConfig {
    /// Apply a partial patch. `time_speed` is a raw multiplier here, bounded
    /// by [`TIME_SPEED_LIMITS`]; the other scalars clamp to their slider range.
    /// Non-finite values are dropped.
    pub fn apply_update(&mut self, update: &SettingsUpdate) {
        fn set(slot: &mut f64, value: Option<f64>, range: SliderRange) {
            if let Some(v) = value {
                match range.accept(v) {
                    Some(v) => *slot = v,
                    None => log::debug!("dropping non-finite settings value: {}", v),
                }
            }
        }

        set(&mut self.time_speed, update.time_speed, TIME_SPEED_LIMITS);
        set(&mut self.time_offset, update.time_offset, TIME_OFFSET_SLIDER);
        set(&mut self.objects_distance, update.objects_distance, OBJECTS_DISTANCE_SLIDER);
        set(&mut self.objects_relative_scale, update.objects_relative_scale, OBJECTS_RELATIVE_SCALE_SLIDER);
        set(&mut self.orbit_angle_offset, update.orbit_angle_offset, ORBIT_ANGLE_OFFSET_SLIDER);
        if let Some(v) = update.disable_moons {
            self.disable_moons = v;
        }
    }

    /// Apply one control-panel change. Slider values are clamped to their range;
    /// non-finite values are dropped.
    pub fn apply_control(&mut self, event: &ControlEvent) {
        match *event {
            ControlEvent::DisableMoons(v) => self.disable_moons = v,
            ControlEvent::TimeSpeed(v) if v.is_finite() => {
                self.time_speed = time_speed_from_slider(v);
            }
            ControlEvent::TimeOffset(v) if v.is_finite() => {
                self.time_offset = TIME_OFFSET_SLIDER.clamp(v);
            }
            ControlEvent::ObjectsDistance(v) if v.is_finite() => {
                self.objects_distance = OBJECTS_DISTANCE_SLIDER.clamp(v);
            }
            ControlEvent::ObjectsRelativeScale(v) if v.is_finite() => {
                self.objects_relative_scale = OBJECTS_RELATIVE_SCALE_SLIDER.clamp(v);
            }
            ControlEvent::OrbitAngleOffset(v) if v.is_finite() => {
                self.orbit_angle_offset = ORBIT_ANGLE_OFFSET_SLIDER.clamp(v);
            }
            _ => log::debug!("dropping non-finite control value: {:?}", event),
        }
    }
}
