/// Catalog constants and the normalized body record.
///
/// Physical parameters come from the NASA planetary fact sheets, bundled as
/// `data/catalog.json`. Records are normalized to Earth (see `normalize.rs`).

use std::collections::HashMap;

use orrery::{BodyKind, RawRecord};

/// Bundled catalog.
pub const CATALOG_JSON: &str = include_str!("../data/catalog.json");

// ── Property keys ────────────────────────────────────────────────────

pub const RADIUS_KEY: &str = "volumetricMeanRadiusKm";
pub const SEMIMAJOR_AXIS_KEY: &str = "semimajorAxis10_6Km";
pub const ORBIT_PERIOD_KEY: &str = "siderealOrbitPeriodDays";
pub const INCLINATION_KEY: &str = "orbitInclinationDeg";
pub const ROTATION_PERIOD_KEY: &str = "siderealRotationPeriodHrs";

/// Properties kept from each raw record; everything else is discarded.
pub const USED_PROPERTIES: [&str; 5] = [
    RADIUS_KEY,
    SEMIMAJOR_AXIS_KEY,
    ORBIT_PERIOD_KEY,
    INCLINATION_KEY,
    ROTATION_PERIOD_KEY,
];

/// Angles are not Earth-relative quantities.
pub const EXCLUDED_FROM_NORMALIZATION: [&str; 1] = [INCLINATION_KEY];

// ── Scales and calibration ───────────────────────────────────────────

/// Normalized radii are divided by this for display.
pub const PLANETS_SCALE_FACTOR: f64 = 100.0;

/// Axial spin multiplier.
pub const OBJECTS_ROTATION_SPEED: f64 = 0.01;

pub const SECONDS_PER_DAY: f64 = 60.0 * 60.0 * 24.0;
pub const SECONDS_PER_YEAR: f64 = SECONDS_PER_DAY * 365.0;

/// Name of the reference body every value is normalized against.
pub const EARTH: &str = "earth";
/// Parent name given to planets.
pub const SUN: &str = "sun";

/// Canonical planet order (inner to outer).
pub const PLANET_ORDER: [&str; 9] = [
    "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune", "pluto",
];

// ── Normalized record ────────────────────────────────────────────────

/// Static, normalized physical parameters for one body.
/// Absent or non-numeric properties are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBodyRecord {
    pub name: String,
    pub kind: BodyKind,
    /// Earth-relative radius, already divided by `PLANETS_SCALE_FACTOR`.
    pub volumetric_mean_radius_km: Option<f64>,
    /// Earth = 1. Stars have none.
    pub semimajor_axis_10_6_km: Option<f64>,
    /// Earth = 1.
    pub sidereal_orbit_period_days: Option<f64>,
    /// Degrees, passed through unnormalized.
    pub orbit_inclination_deg: Option<f64>,
    /// Earth = 1.
    pub sidereal_rotation_period_hrs: Option<f64>,
    /// `"sun"` for planets, the owning planet for moons, `None` for stars.
    pub parent_name: Option<String>,
}

impl CelestialBodyRecord {
    /// Build a typed record from an already normalized property map.
    pub fn from_normalized(
        name: &str,
        kind: BodyKind,
        normalized: &RawRecord,
        parent_name: Option<&str>,
    ) -> Self {
        let number = |key: &str| normalized.get(key).and_then(|v| v.as_f64());
        Self {
            name: name.to_owned(),
            kind,
            volumetric_mean_radius_km: number(RADIUS_KEY),
            semimajor_axis_10_6_km: number(SEMIMAJOR_AXIS_KEY),
            sidereal_orbit_period_days: number(ORBIT_PERIOD_KEY),
            orbit_inclination_deg: number(INCLINATION_KEY),
            sidereal_rotation_period_hrs: number(ROTATION_PERIOD_KEY),
            parent_name: parent_name.map(str::to_owned),
        }
    }

    /// Bodies without a usable orbit radius stay where they are.
    pub fn orbits(&self) -> bool {
        matches!(self.semimajor_axis_10_6_km, Some(a) if a != 0.0)
    }
}

/// Normalized records in processing order: star, then each planet followed by its moons.
#[derive(Debug, Clone, Default)]
pub struct NormalizedCatalog {
    bodies: Vec<CelestialBodyRecord>,
    by_name: HashMap<String, usize>,
}

impl NormalizedCatalog {
    /// Append a record. A repeated name replaces the earlier record in place.
    pub fn push(&mut self, body: CelestialBodyRecord) {
        match self.by_name.get(&body.name) {
            Some(&slot) => self.bodies[slot] = body,
            None => {
                self.by_name.insert(body.name.clone(), self.bodies.len());
                self.bodies.push(body);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&CelestialBodyRecord> {
        self.by_name.get(name).map(|&slot| &self.bodies[slot])
    }

    /// Records in processing order.
    pub fn bodies(&self) -> &[CelestialBodyRecord] {
        &self.bodies
    }

    pub fn of_kind(&self, kind: BodyKind) -> impl Iterator<Item = &CelestialBodyRecord> {
        self.bodies.iter().filter(move |b| b.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
