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
// Account class → Color32
// ---------------------------------------------------------------------------

/// One distinct colour per account class found in the table.
#[derive(Debug, Clone, Default)]
pub struct ClassColors {
    mapping: BTreeMap<u8, Color32>,
}

impl ClassColors {
    pub fn new(classes: &BTreeSet<u8>) -> Self {
        let mapping = classes
            .iter()
            .copied()
            .zip(generate_palette(classes.len()))
            .collect();
        ClassColors { mapping }
    }

    pub fn color_for(&self, class: u8) -> Color32 {
        self.mapping.get(&class).copied().unwrap_or(Color32::GRAY)
    }
}
