/// Catalog normalization — pure functions, run once at startup.
///
/// Every numeric property is divided by Earth's value for the same property,
/// so Earth ends up at 1 for periods, distances and radii.

use orrery::{BodyKind, OrbitalBatch, OrbitalState, RawCatalog, RawRecord};
use serde_json::{Number, Value};

use crate::bodies::{
    CelestialBodyRecord, NormalizedCatalog, EARTH, EXCLUDED_FROM_NORMALIZATION,
    PLANETS_SCALE_FACTOR, PLANET_ORDER, SUN, USED_PROPERTIES,
};

/// Keep only the listed properties.
pub fn filter_properties(record: &RawRecord, keep: &[&str]) -> RawRecord {
    record
        .iter()
        .filter(|(key, _)| keep.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Divide each numeric property by Earth's value for the same key.
///
/// A value passes through unchanged when its key is excluded, when it or
/// Earth's value is not a number, or when either of them is zero.
pub fn normalize_to_earth(record: &RawRecord, earth: &RawRecord, exclude: &[&str]) -> RawRecord {
    record
        .iter()
        .map(|(key, value)| {
            let reference = earth.get(key).and_then(Value::as_f64);
            let normalized = match (value.as_f64(), reference) {
                (Some(v), Some(r)) if v != 0.0 && r != 0.0 && !exclude.contains(&key.as_str()) => {
                    Number::from_f64(v / r).map(Value::Number)
                }
                _ => None,
            };
            (key.clone(), normalized.unwrap_or_else(|| value.clone()))
        })
        .collect()
}

/// Filter, normalize and scale one raw record.
pub fn normalize_body(
    name: &str,
    kind: BodyKind,
    raw: &RawRecord,
    earth: &RawRecord,
    parent_name: Option<&str>,
) -> CelestialBodyRecord {
    let filtered = filter_properties(raw, &USED_PROPERTIES);
    let normalized = normalize_to_earth(&filtered, earth, &EXCLUDED_FROM_NORMALIZATION);
    let mut record = CelestialBodyRecord::from_normalized(name, kind, &normalized, parent_name);
    record.volumetric_mean_radius_km = record
        .volumetric_mean_radius_km
        .map(|r| r / PLANETS_SCALE_FACTOR);
    record
}

/// Everything the one-time pass produces.
#[derive(Debug, Clone, Default)]
pub struct NormalizationOutput {
    pub catalog: NormalizedCatalog,
    /// One zero state per normalized body, in the same order.
    pub initial_states: OrbitalBatch,
}

impl NormalizationOutput {
    fn push(&mut self, record: CelestialBodyRecord) {
        log::debug!(
            "normalized {} ({:?}, parent {:?}): axis={:?} period={:?}",
            record.name,
            record.kind,
            record.parent_name,
            record.semimajor_axis_10_6_km,
            record.sidereal_orbit_period_days,
        );
        if !record.orbits() && record.kind != BodyKind::Star {
            log::debug!("{} has no orbit radius and will not move", record.name);
        }
        self.initial_states.push((record.name.clone(), OrbitalState::ZERO));
        self.catalog.push(record);
    }
}

/// Normalize the whole catalog.
///
/// Order: stars, then planets in canonical order (mercury → pluto), each
/// planet directly followed by its moons unless `disable_moons` is set.
/// Planets outside the canonical list come last, by name.
pub fn normalize_catalog(catalog: &RawCatalog, disable_moons: bool) -> NormalizationOutput {
    let empty = RawRecord::new();
    let earth = match catalog.planet(EARTH) {
        Some(earth) => earth,
        None => {
            log::warn!("catalog has no '{}' record, values will not be normalized", EARTH);
            &empty
        }
    };

    let mut out = NormalizationOutput::default();

    for (name, raw) in &catalog.stars {
        out.push(normalize_body(name, BodyKind::Star, raw, earth, None));
    }

    for name in PLANET_ORDER {
        if !catalog.planets.contains_key(name) {
            log::warn!("catalog has no '{}' record, skipping", name);
        }
    }
    let extra = catalog
        .planets
        .keys()
        .map(String::as_str)
        .filter(|name| !PLANET_ORDER.contains(name));
    let order = PLANET_ORDER.iter().copied().chain(extra);

    for planet_name in order {
        let Some(planet) = catalog.planets.get(planet_name) else {
            continue;
        };
        out.push(normalize_body(planet_name, BodyKind::Planet, &planet.properties, earth, Some(SUN)));

        if disable_moons {
            continue;
        }
        for moon in &planet.moons {
            out.push(normalize_body(&moon.name, BodyKind::Moon, &moon.properties, earth, Some(planet_name)));
        }
    }

    log::info!(
        "catalog normalized: {} bodies ({} stars, {} planets, {} moons)",
        out.catalog.len(),
        out.catalog.of_kind(BodyKind::Star).count(),
        out.catalog.of_kind(BodyKind::Planet).count(),
        out.catalog.of_kind(BodyKind::Moon).count(),
    );
    out
}
