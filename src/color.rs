use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Mix, Srgb};

/// Bar colour of the odds-ratio chart.
pub const BAR_COLOR: Color32 = Color32::from_rgb(0xFF, 0x4B, 0x4B);

/// Qualitative "Set2" palette used for pie slices; cycles past eight.
pub const SET2: [Color32; 8] = [
    Color32::from_rgb(0x66, 0xc2, 0xa5),
    Color32::from_rgb(0xfc, 0x8d, 0x62),
    Color32::from_rgb(0x8d, 0xa0, 0xcb),
    Color32::from_rgb(0xe7, 0x8a, 0xc3),
    Color32::from_rgb(0xa6, 0xd8, 0x54),
    Color32::from_rgb(0xff, 0xd9, 0x2f),
    Color32::from_rgb(0xe5, 0xc4, 0x94),
    Color32::from_rgb(0xb3, 0xb3, 0xb3),
];

pub fn set2(i: usize) -> Color32 {
    SET2[i % SET2.len()]
}

// ---------------------------------------------------------------------------
// Sequential colour maps
// ---------------------------------------------------------------------------

/// A sequential colour map defined by evenly spaced stops.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    stops: &'static [[u8; 3]],
}

/// Light-to-dark reds, used for the OR cell background.
pub const REDS: ColorScale = ColorScale {
    stops: &[
        [0xff, 0xf5, 0xf0],
        [0xfe, 0xe0, 0xd2],
        [0xfc, 0xbb, 0xa1],
        [0xfc, 0x92, 0x72],
        [0xfb, 0x6a, 0x4a],
        [0xef, 0x3b, 0x2c],
        [0xcb, 0x18, 0x1d],
        [0xa5, 0x0f, 0x15],
        [0x67, 0x00, 0x0d],
    ],
};

/// Perceptually uniform purple → yellow, used for scatter categories.
pub const VIRIDIS: ColorScale = ColorScale {
    stops: &[
        [0x44, 0x01, 0x54],
        [0x47, 0x2d, 0x7b],
        [0x3b, 0x52, 0x8b],
        [0x2c, 0x72, 0x8e],
        [0x21, 0x91, 0x8c],
        [0x28, 0xae, 0x80],
        [0x5e, 0xc9, 0x62],
        [0xad, 0xdc, 0x30],
        [0xfd, 0xe7, 0x25],
    ],
};

impl ColorScale {
    /// Colour at position `t` in `[0, 1]`; out-of-range values clamp.
    pub fn sample(&self, t: f64) -> Color32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let segments = self.stops.len() - 1;
        let scaled = t * segments as f64;
        let i = (scaled.floor() as usize).min(segments - 1);
        let frac = (scaled - i as f64) as f32;

        let from = to_srgb(self.stops[i]);
        let to = to_srgb(self.stops[i + 1]);
        let mixed: Srgb<u8> = from.mix(to, frac).into_format();
        Color32::from_rgb(mixed.red, mixed.green, mixed.blue)
    }

    /// `n` colours spread over the map, leaving out both extremes.
    pub fn discrete(&self, n: usize) -> Vec<Color32> {
        (1..=n)
            .map(|i| self.sample(i as f64 / (n + 1) as f64))
            .collect()
    }
}

fn to_srgb([r, g, b]: [u8; 3]) -> Srgb<f32> {
    Srgb::new(r, g, b).into_format()
}

/// Black or white, whichever reads better on `background`.
pub fn text_color_on(background: Color32) -> Color32 {
    let linear = Srgb::new(background.r(), background.g(), background.b())
        .into_format::<f32>()
        .into_linear::<f32>();
    let luminance = 0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue;
    if luminance < 0.408 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps the distinct values of a categorical column to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map for the labels, in the order given.
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>, scale: ColorScale) -> Self {
        let labels: Vec<&str> = labels.into_iter().collect();
        let palette = scale.discrete(labels.len());
        let mapping = labels
            .into_iter()
            .zip(palette)
            .map(|(label, c)| (label.to_string(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}
