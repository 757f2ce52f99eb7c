use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: booster version → Color32
// ---------------------------------------------------------------------------

/// Maps each booster version to a distinct colour for the scatter chart.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the sorted set of booster versions.
    pub fn new(versions: &BTreeSet<String>) -> Self {
        let mapping = versions
            .iter()
            .cloned()
            .zip(generate_palette(versions.len()))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a booster version.
    pub fn color_for(&self, version: &str) -> Color32 {
        self.mapping
            .get(version)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (version → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(v, c)| (v.clone(), *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_colours() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        let unique: BTreeSet<[u8; 4]> = p.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn unknown_version_falls_back_to_default() {
        let versions: BTreeSet<String> =
            ["F9 v1.0", "F9 FT"].iter().map(|s| s.to_string()).collect();
        let cm = ColorMap::new(&versions);
        assert_eq!(cm.legend_entries().len(), 2);
        assert_ne!(cm.color_for("F9 v1.0"), cm.color_for("F9 FT"));
        assert_eq!(cm.color_for("Starship"), Color32::GRAY);
    }
}
