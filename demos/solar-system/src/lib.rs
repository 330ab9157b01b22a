use wasm_bindgen::prelude::*;
use orrery::*;

pub mod bodies;
pub mod game;
pub mod normalize;
pub mod orbit;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
