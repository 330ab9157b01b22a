/// Solar System — Earth-normalized catalog on tilted circular orbits.
///
/// The catalog is normalized once in `init`; every frame recomputes the
/// orbital state table from elapsed time and the live settings. Rendering,
/// textures and camera live on the TypeScript side.

use orrery::*;

use crate::bodies::{self, NormalizedCatalog};
use crate::normalize;
use crate::orbit;

// ── Game event kinds to TypeScript ───────────────────────────────────

/// Catalog normalized and state table seeded. `a` = body count.
pub const EVENT_READY: f32 = 1.0;
/// Per-frame clock info. `a` = elapsed seconds, `b` = time speed, `c` = time offset (days).
pub const EVENT_TIME_INFO: f32 = 2.0;

/// Time-speed slider position the control panel starts at.
const DEFAULT_TIME_SPEED_SLIDER: f64 = 50.0;

pub struct SolarSystem {
    catalog_json: &'static str,
    catalog: NormalizedCatalog,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_catalog(bodies::CATALOG_JSON)
    }

    pub fn with_catalog(catalog_json: &'static str) -> Self {
        Self {
            catalog_json,
            catalog: NormalizedCatalog::default(),
        }
    }

    pub fn catalog(&self) -> &NormalizedCatalog {
        &self.catalog
    }

    fn visual(&self, name: &str, relative_scale: f64) -> BodyVisual {
        match self.catalog.get(name) {
            Some(body) => BodyVisual {
                scale: (body.volumetric_mean_radius_km.unwrap_or(0.0) * relative_scale) as f32,
                kind: body.kind,
            },
            None => BodyVisual::default(),
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            max_bodies: 64,
            max_events: 8,
            initial_settings: SimulationConfig {
                time_speed: time_speed_from_slider(DEFAULT_TIME_SPEED_SLIDER),
                ..SimulationConfig::default()
            },
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let raw = match RawCatalog::from_json(self.catalog_json) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("failed to parse body catalog: {}", e);
                return;
            }
        };

        let out = normalize::normalize_catalog(&raw, ctx.store.settings.disable_moons);
        ctx.store.batch_update_properties(&out.initial_states);
        self.catalog = out.catalog;

        if ctx.store.mark_initialized() {
            ctx.emit_event(GameEvent {
                kind: EVENT_READY,
                a: self.catalog.len() as f32,
                b: 0.0,
                c: 0.0,
            });
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, frame: &FrameInfo) {
        if !ctx.store.is_initialized() {
            return;
        }

        let settings = ctx.store.settings;
        let batch = orbit::update(frame.elapsed, &self.catalog, &settings);
        ctx.store.batch_update_properties(&batch);

        ctx.emit_event(GameEvent {
            kind: EVENT_TIME_INFO,
            a: frame.elapsed as f32,
            b: settings.time_speed as f32,
            c: settings.time_offset as f32,
        });
    }

    fn render(&self, ctx: &mut RenderContext) {
        let relative_scale = ctx.store.settings.objects_relative_scale;
        build_instance_buffer(
            &ctx.store.properties,
            |name| self.visual(name, relative_scale),
            ctx.buffer,
        );
    }
}
