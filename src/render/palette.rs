//! Fuel color registry
//!
//! Loads the fixed fuel-to-color mapping from fuel_palette.json (embedded
//! at compile time) and provides lookup by fuel name. The entry order in
//! the JSON file defines the draw and legend order of the series.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// Embedded fuel_palette.json content
const FUEL_PALETTE_JSON: &str = include_str!("../../fuel_palette.json");

/// Global fuel palette, initialized lazily on first access
pub static FUEL_PALETTE: Lazy<FuelPalette> = Lazy::new(|| {
    FuelPalette::from_json(FUEL_PALETTE_JSON).unwrap_or_else(|e| {
        eprintln!("ERROR: Failed to load fuel_palette.json: {}", e);
        FuelPalette::default()
    })
});

/// Fallback color for fuels missing from the palette
pub const DEFAULT_COLOR: [u8; 3] = [128, 128, 128];

/// A single entry from fuel_palette.json
#[derive(Debug, Clone, Deserialize)]
struct FuelColor {
    fuel: String,
    color: String,
}

/// Ordered fuel-to-RGB mapping
#[derive(Debug, Clone, Default)]
pub struct FuelPalette {
    entries: Vec<(String, [u8; 3])>,
}

impl FuelPalette {
    /// Load the palette from a JSON string
    pub fn from_json(json: &str) -> Result<Self, String> {
        let definitions: Vec<FuelColor> = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse palette JSON: {}", e))?;

        let mut entries = Vec::with_capacity(definitions.len());
        for def in definitions {
            let rgb = parse_hex_color(&def.color)
                .ok_or_else(|| format!("Invalid hex color '{}' for {}", def.color, def.fuel))?;
            entries.push((def.fuel, rgb));
        }

        Ok(FuelPalette { entries })
    }

    /// Look up a fuel's color
    pub fn get(&self, fuel: &str) -> Option<[u8; 3]> {
        self.entries
            .iter()
            .find(|(name, _)| name == fuel)
            .map(|(_, rgb)| *rgb)
    }

    /// Look up a fuel's color, falling back to gray for unknown fuels
    pub fn color_or_default(&self, fuel: &str) -> [u8; 3] {
        self.get(fuel).unwrap_or(DEFAULT_COLOR)
    }

    /// Fuel names in draw/legend order
    pub fn fuels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Position of a fuel in the draw order
    pub fn index_of(&self, fuel: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == fuel)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a hex color string to RGB array
///
/// Supports `#RRGGBB` and `RRGGBB` (alpha digits, if present, are ignored).
fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');

    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some([255, 0, 0]));
        assert_eq!(parse_hex_color("4682B4"), Some([70, 130, 180]));
        assert_eq!(parse_hex_color("#87CEEBFF"), Some([135, 206, 235]));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("GGGGGG"), None);
    }

    #[test]
    fn test_palette_loads_with_exact_colors() {
        let palette = &*FUEL_PALETTE;
        assert_eq!(palette.len(), 7);

        // Fixed mapping required for visual parity
        assert_eq!(palette.get("Petroleum"), Some([255, 165, 0])); // orange
        assert_eq!(palette.get("Natural Gas"), Some([255, 0, 0])); // red
        assert_eq!(palette.get("Coal"), Some([0, 0, 0])); // black
        assert_eq!(palette.get("Nuclear"), Some([46, 139, 87])); // seagreen
        assert_eq!(palette.get("Hydropower"), Some([70, 130, 180])); // steelblue
        assert_eq!(palette.get("Wood/biomass"), Some([165, 42, 42])); // brown
        assert_eq!(palette.get("Other Renewables"), Some([135, 206, 235])); // skyblue
    }

    #[test]
    fn test_unknown_fuel_falls_back_to_gray() {
        assert_eq!(FUEL_PALETTE.get("Whale Oil"), None);
        assert_eq!(FUEL_PALETTE.color_or_default("Whale Oil"), DEFAULT_COLOR);
    }

    #[test]
    fn test_draw_order_matches_fuel_order() {
        let order: Vec<&str> = FUEL_PALETTE.fuels().collect();
        assert_eq!(order.len(), crate::data::FUEL_ORDER.len());
        for fuel in crate::data::FUEL_ORDER {
            assert!(FUEL_PALETTE.index_of(fuel).is_some());
        }
    }
}
