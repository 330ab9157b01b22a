/// Per-frame orbit update — closed-form, no integration.
///
/// Every body moves on a circle of radius `semimajor axis × distance scale`,
/// tilted about +X by its inclination plus the global angle offset, and spins
/// about its own Y axis. Math runs in f64; states are stored as f32.

use std::f64::consts::TAU;

use glam::{DQuat, DVec3, Vec3};
use orrery::{BodyKind, OrbitalBatch, OrbitalState, SimulationConfig};

use crate::bodies::{
    CelestialBodyRecord, NormalizedCatalog, OBJECTS_ROTATION_SPEED, SECONDS_PER_DAY,
    SECONDS_PER_YEAR,
};

/// Wrap an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Orbital phase in `[0, 2π)`.
/// `time_sec` is elapsed seconds already multiplied by 2π; `period` is Earth-relative.
/// Without a usable period only the time offset moves the body.
pub fn orbital_phase(time_sec: f64, period: Option<f64>, config: &SimulationConfig) -> f64 {
    let motion = match period {
        Some(p) if p != 0.0 => time_sec / SECONDS_PER_YEAR / p * config.time_speed,
        _ => 0.0,
    };
    let offset = config.time_offset * TAU / 365.0;
    wrap_angle(motion + offset)
}

/// Orbit radius for a normalized semi-major axis and the user distance multiplier.
/// Identity at `objects_distance == 1`, increasing in both arguments.
pub fn relative_distance(semimajor_axis: f64, objects_distance: f64) -> f64 {
    semimajor_axis * objects_distance
}

/// Position on a circle of `radius` at `phase`, tilted about +X by `tilt_deg`.
pub fn orbit_position(radius: f64, phase: f64, tilt_deg: f64) -> DVec3 {
    let flat = DVec3::new(radius * phase.cos(), 0.0, radius * phase.sin());
    DQuat::from_axis_angle(DVec3::X, tilt_deg.to_radians()) * flat
}

/// Axial spin angle in `[0, 2π)`.
pub fn axial_spin(time_sec: f64, rotation_period: Option<f64>, time_speed: f64) -> f64 {
    match rotation_period {
        Some(p) if p != 0.0 => {
            wrap_angle(time_sec / SECONDS_PER_DAY / p * OBJECTS_ROTATION_SPEED * time_speed)
        }
        _ => 0.0,
    }
}

/// State of one body at `time_sec`, or `None` if it has no orbit radius.
pub fn body_state(body: &CelestialBodyRecord, time_sec: f64, config: &SimulationConfig) -> Option<OrbitalState> {
    let axis = body.semimajor_axis_10_6_km.filter(|a| *a != 0.0)?;

    let phase = orbital_phase(time_sec, body.sidereal_orbit_period_days, config);
    let radius = relative_distance(axis, config.objects_distance);
    let tilt = body.orbit_inclination_deg.unwrap_or(0.0) + config.orbit_angle_offset;
    let position = orbit_position(radius, phase, tilt);

    let spin = axial_spin(time_sec, body.sidereal_rotation_period_hrs, config.time_speed);

    Some(OrbitalState {
        position: position.as_vec3(),
        rotation: Vec3::new(0.0, spin as f32, 0.0),
    })
}

/// Recompute every orbiting body for this frame.
///
/// Bodies without an orbit radius (the star, malformed records) are left
/// out of the batch and keep their previous state. Moons are left out
/// entirely while `disable_moons` is set. Moon positions are absolute,
/// computed from their own elements, not offset by their planet.
pub fn update(elapsed_seconds: f64, catalog: &NormalizedCatalog, config: &SimulationConfig) -> OrbitalBatch {
    let config = *config;
    let time_sec = elapsed_seconds * TAU;

    catalog
        .bodies()
        .iter()
        .filter(|body| match body.kind {
            BodyKind::Planet => true,
            BodyKind::Moon => !config.disable_moons,
            BodyKind::Star => false,
        })
        .filter_map(|body| body_state(body, time_sec, &config).map(|state| (body.name.clone(), state)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{CATALOG_JSON, EARTH, SUN};
    use crate::normalize::normalize_catalog;
    use orrery::RawCatalog;

    const EPS: f64 = 1e-9;

    fn planet(name: &str, axis: f64, period: f64, inclination: f64) -> CelestialBodyRecord {
        CelestialBodyRecord {
            name: name.to_string(),
            kind: BodyKind::Planet,
            volumetric_mean_radius_km: Some(0.01),
            semimajor_axis_10_6_km: Some(axis),
            sidereal_orbit_period_days: Some(period),
            orbit_inclination_deg: Some(inclination),
            sidereal_rotation_period_hrs: Some(1.0),
            parent_name: Some(SUN.to_string()),
        }
    }

    fn bundled() -> NormalizedCatalog {
        let raw = RawCatalog::from_json(CATALOG_JSON).unwrap();
        normalize_catalog(&raw, false).catalog
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn phase_stays_in_range() {
        let speeds = [0.0, 1.0, 5_000_000.0, 10_000_000.0];
        let offsets = [-365.0, -200.5, 0.0, 1.0, 365.0];
        let elapsed = [0.0, 0.016, 1.0, 3600.0, 1.0e7, 3.3e9];
        for &time_speed in &speeds {
            for &time_offset in &offsets {
                for &e in &elapsed {
                    let cfg = SimulationConfig { time_speed, time_offset, ..SimulationConfig::default() };
                    for period in [Some(0.24), Some(1.0), Some(247.9), None] {
                        let t = orbital_phase(e * TAU, period, &cfg);
                        assert!((0.0..TAU).contains(&t), "phase {t} out of range");
                    }
                }
            }
        }
    }

    #[test]
    fn frozen_time_sits_at_reference_phase() {
        let cfg = SimulationConfig { time_speed: 0.0, time_offset: 0.0, ..SimulationConfig::default() };
        for elapsed in [0.0, 12.5, 1.0e6] {
            assert_eq!(orbital_phase(elapsed * TAU, Some(1.0), &cfg), 0.0);
        }
        let state = body_state(&planet("earth", 1.0, 1.0, 0.0), 1.0e6 * TAU, &cfg).unwrap();
        assert_eq!(state.position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn start_position_is_on_x_axis() {
        let cfg = SimulationConfig { time_speed: 5_000_000.0, ..SimulationConfig::default() };
        let p = orbit_position(2.5, orbital_phase(0.0, Some(1.88), &cfg), 0.0);
        assert_eq!(p, DVec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn quarter_year_is_quarter_turn() {
        let cfg = SimulationConfig::default();
        let elapsed = SECONDS_PER_YEAR / 4.0;
        let t = orbital_phase(elapsed * TAU, Some(1.0), &cfg);
        assert!(close(t, TAU / 4.0), "t = {t}");
        let p = orbit_position(1.0, t, 0.0);
        assert!(close(p.x, 0.0) && close(p.y, 0.0) && close(p.z, 1.0), "p = {p}");
    }

    #[test]
    fn time_offset_shifts_phase_by_days() {
        let cfg = SimulationConfig { time_offset: 91.25, ..SimulationConfig::default() };
        assert!(close(orbital_phase(0.0, Some(1.0), &cfg), TAU / 4.0));
    }

    #[test]
    fn tilt_rotates_about_x() {
        // Quarter turn puts the body on +Z; a 90° tilt about +X carries +Z to -Y.
        let p = orbit_position(1.0, TAU / 4.0, 90.0);
        assert!(close(p.x, 0.0) && close(p.y, -1.0) && close(p.z, 0.0), "p = {p}");
        // Points on the X axis are unaffected by the tilt.
        let q = orbit_position(3.0, 0.0, 33.0);
        assert!(close(q.x, 3.0) && close(q.y, 0.0) && close(q.z, 0.0), "q = {q}");
    }

    #[test]
    fn angle_offset_adds_to_inclination() {
        let cfg = SimulationConfig { orbit_angle_offset: 60.0, time_offset: 91.25, ..SimulationConfig::default() };
        let state = body_state(&planet("x", 1.0, 1.0, 30.0), 0.0, &cfg).unwrap();
        assert!((state.position.y - -1.0).abs() < 1e-5, "position = {}", state.position);
    }

    #[test]
    fn distance_scale_is_monotonic() {
        for axis in [0.0025, 0.39, 1.0, 39.2] {
            let mut previous = relative_distance(axis, 1.0);
            assert_eq!(previous, axis);
            for distance in [2.0, 4.0, 8.0] {
                let r = relative_distance(axis, distance);
                assert!(r >= previous);
                previous = r;
            }
        }
        assert!(relative_distance(2.0, 3.0) >= relative_distance(1.0, 3.0));
    }

    #[test]
    fn spin_uses_rotation_period_and_speed() {
        let elapsed = SECONDS_PER_DAY * 50.0;
        let spin = axial_spin(elapsed * TAU, Some(1.0), 1.0);
        assert!((spin - std::f64::consts::PI).abs() < 1e-9, "spin = {spin}");
        assert_eq!(axial_spin(elapsed * TAU, Some(1.0), 0.0), 0.0);
        assert_eq!(axial_spin(elapsed * TAU, None, 1.0), 0.0);
        let retrograde = axial_spin(elapsed * TAU, Some(-243.0), 1.0);
        assert!((0.0..TAU).contains(&retrograde));
    }

    #[test]
    fn star_and_axisless_bodies_are_skipped() {
        let mut catalog = NormalizedCatalog::default();
        catalog.push(CelestialBodyRecord { semimajor_axis_10_6_km: None, ..planet("rogue", 1.0, 1.0, 0.0) });
        catalog.push(CelestialBodyRecord { semimajor_axis_10_6_km: Some(0.0), ..planet("dust", 1.0, 1.0, 0.0) });
        catalog.push(planet("earth", 1.0, 1.0, 0.0));
        let batch = update(10.0, &catalog, &SimulationConfig::default());
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].0, "earth");

        let batch = update(10.0, &bundled(), &SimulationConfig::default());
        assert!(batch.iter().all(|(name, _)| name != SUN));
    }

    #[test]
    fn moons_follow_disable_flag() {
        let catalog = bundled();
        let with_moons = update(100.0, &catalog, &SimulationConfig::default());
        assert!(with_moons.iter().any(|(name, _)| name == "moon"));

        let cfg = SimulationConfig { disable_moons: true, ..SimulationConfig::default() };
        let without = update(100.0, &catalog, &cfg);
        assert!(without.iter().all(|(name, _)| catalog.get(name).unwrap().kind == BodyKind::Planet));
        assert_eq!(without.len(), 9);
    }

    #[test]
    fn moon_positions_are_not_parent_relative() {
        let catalog = bundled();
        let cfg = SimulationConfig { time_speed: 0.0, ..SimulationConfig::default() };
        let batch = update(0.0, &catalog, &cfg);
        let moon = batch.iter().find(|(name, _)| name == "moon").unwrap().1;
        let axis = catalog.get("moon").unwrap().semimajor_axis_10_6_km.unwrap();
        assert!((moon.position.length() as f64 - axis).abs() < 1e-6);
        assert!(catalog.get(EARTH).is_some());
    }

    #[test]
    fn bundled_earth_orbits_at_unit_radius() {
        let catalog = bundled();
        let cfg = SimulationConfig { time_speed: 5_000_000.0, time_offset: 17.0, ..SimulationConfig::default() };
        for elapsed in [0.0, 1.5, 60.0] {
            let batch = update(elapsed, &catalog, &cfg);
            let earth = batch.iter().find(|(name, _)| name == EARTH).unwrap().1;
            assert!((earth.position.length() - 1.0).abs() < 1e-5);
        }
    }
}
