use std::collections::BTreeMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One body's raw catalog properties, exactly as they appear in the JSON.
pub type RawRecord = Map<String, Value>;

/// Static catalog of celestial-body physical parameters.
/// Loaded from a JSON file bundled with the game.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalog {
    /// Star records by name.
    #[serde(default)]
    pub stars: BTreeMap<String, RawRecord>,
    /// Planet records by name, each with its moons.
    #[serde(default)]
    pub planets: BTreeMap<String, RawPlanet>,
}

/// A planet record plus the moons that orbit it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlanet {
    #[serde(default)]
    pub moons: Vec<RawMoon>,
    /// Every other property of the planet.
    #[serde(flatten)]
    pub properties: RawRecord,
}

/// A moon record. Moons are listed by name inside their planet.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMoon {
    pub name: String,
    #[serde(flatten)]
    pub properties: RawRecord,
}

impl RawCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a planet's own properties by name.
    pub fn planet(&self, name: &str) -> Option<&RawRecord> {
        self.planets.get(name).map(|p| &p.properties)
    }

    /// Total number of records (stars, planets and moons).
    pub fn body_count(&self) -> usize {
        self.stars.len()
            + self.planets.len()
            + self.planets.values().map(|p| p.moons.len()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_catalog_with_moons() {
        let json = r#"{
            "stars": { "sun": { "volumetricMeanRadiusKm": 695700 } },
            "planets": {
                "earth": {
                    "semimajorAxis10_6Km": 149.6,
                    "discoveredBy": "n/a",
                    "moons": [ { "name": "moon", "semimajorAxis10_6Km": 0.3844 } ]
                }
            }
        }"#;
        let catalog = RawCatalog::from_json(json).unwrap();
        assert_eq!(catalog.body_count(), 3);

        let earth = catalog.planet("earth").unwrap();
        assert_eq!(earth["semimajorAxis10_6Km"].as_f64(), Some(149.6));
        assert_eq!(earth["discoveredBy"].as_str(), Some("n/a"));
        assert!(!earth.contains_key("moons"));

        let moon = &catalog.planets["earth"].moons[0];
        assert_eq!(moon.name, "moon");
        assert!(!moon.properties.contains_key("name"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = RawCatalog::from_json("{}").unwrap();
        assert_eq!(catalog.body_count(), 0);
        assert!(catalog.planet("earth").is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RawCatalog::from_json(r#"{ "planets": [1, 2] }"#).is_err());
    }
}
