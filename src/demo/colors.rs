//! Color choices for the demo control panel.
//!
//! Common colors, then one family per hue with lighten/darken variants.
//! Gray extends to 40 in both directions; yellow stops at darken-10.

/// One selectable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Stable key, used as `data-name` on the `<option>`.
    pub key: &'static str,
    /// Any CSS color value.
    pub value: &'static str,
    pub name: &'static str,
}

impl Swatch {
    const fn new(key: &'static str, value: &'static str, name: &'static str) -> Self {
        Self { key, value, name }
    }
}

/// Swatches written directly into the template ahead of the palette.
pub const PINNED: [&str; 2] = ["black", "transparent"];

pub static PALETTE: [Swatch; 59] = [
    // common
    Swatch::new("black", "#000000", "Black"),
    Swatch::new("white", "#FFFFFF", "White"),
    Swatch::new("transparent", "transparent", "Transparent"),

    // blue
    Swatch::new("blue", "#2196F3", "Blue"),
    Swatch::new("blue-lighten-10", "#42A5F5", "Blue Lighten 10"),
    Swatch::new("blue-lighten-20", "#64B5F6", "Blue Lighten 20"),
    Swatch::new("blue-lighten-30", "#90CAF9", "Blue Lighten 30"),
    Swatch::new("blue-darken-10", "#1E88E5", "Blue Darken 10"),
    Swatch::new("blue-darken-20", "#1976D2", "Blue Darken 20"),
    Swatch::new("blue-darken-30", "#1565C0", "Blue Darken 30"),

    // green
    Swatch::new("green", "#4CAF50", "Green"),
    Swatch::new("green-lighten-10", "#66BB6A", "Green Lighten 10"),
    Swatch::new("green-lighten-20", "#81C784", "Green Lighten 20"),
    Swatch::new("green-lighten-30", "#A5D6A7", "Green Lighten 30"),
    Swatch::new("green-darken-10", "#43A047", "Green Darken 10"),
    Swatch::new("green-darken-20", "#388E3C", "Green Darken 20"),
    Swatch::new("green-darken-30", "#2E7D32", "Green Darken 30"),

    // red
    Swatch::new("red", "#F44336", "Red"),
    Swatch::new("red-lighten-10", "#EF5350", "Red Lighten 10"),
    Swatch::new("red-lighten-20", "#E57373", "Red Lighten 20"),
    Swatch::new("red-lighten-30", "#FFCDD2", "Red Lighten 30"),
    Swatch::new("red-darken-10", "#E53935", "Red Darken 10"),
    Swatch::new("red-darken-20", "#D32F2F", "Red Darken 20"),
    Swatch::new("red-darken-30", "#C62828", "Red Darken 30"),

    // yellow
    Swatch::new("yellow", "#FFEB3B", "Yellow"),
    Swatch::new("yellow-lighten-10", "#FFF176", "Yellow Lighten 10"),
    Swatch::new("yellow-lighten-20", "#FFF59D", "Yellow Lighten 20"),
    Swatch::new("yellow-lighten-30", "#FFF9C4", "Yellow Lighten 30"),
    Swatch::new("yellow-darken-10", "#FDD835", "Yellow Darken 10"),

    // orange
    Swatch::new("orange", "#FF9800", "Orange"),
    Swatch::new("orange-lighten-10", "#FFB74D", "Orange Lighten 10"),
    Swatch::new("orange-lighten-20", "#FFCC80", "Orange Lighten 20"),
    Swatch::new("orange-lighten-30", "#FFE0B2", "Orange Lighten 30"),
    Swatch::new("orange-darken-10", "#FB8C00", "Orange Darken 10"),
    Swatch::new("orange-darken-20", "#F57C00", "Orange Darken 20"),
    Swatch::new("orange-darken-30", "#EF6C00", "Orange Darken 30"),

    // purple
    Swatch::new("purple", "#9C27B0", "Purple"),
    Swatch::new("purple-lighten-10", "#AB47BC", "Purple Lighten 10"),
    Swatch::new("purple-lighten-20", "#BA68C8", "Purple Lighten 20"),
    Swatch::new("purple-lighten-30", "#CE93D8", "Purple Lighten 30"),
    Swatch::new("purple-darken-10", "#8E24AA", "Purple Darken 10"),
    Swatch::new("purple-darken-20", "#7B1FA2", "Purple Darken 20"),
    Swatch::new("purple-darken-30", "#6A1B9A", "Purple Darken 30"),

    // teal
    Swatch::new("teal", "#009688", "Teal"),
    Swatch::new("teal-lighten-10", "#26A69A", "Teal Lighten 10"),
    Swatch::new("teal-lighten-20", "#4DB6AC", "Teal Lighten 20"),
    Swatch::new("teal-lighten-30", "#80CBC4", "Teal Lighten 30"),
    Swatch::new("teal-darken-10", "#00897B", "Teal Darken 10"),
    Swatch::new("teal-darken-20", "#00796B", "Teal Darken 20"),
    Swatch::new("teal-darken-30", "#00695C", "Teal Darken 30"),

    // gray
    Swatch::new("gray", "#9E9E9E", "Gray"),
    Swatch::new("gray-lighten-40", "#FAFAFA", "Gray Lighten 40"),
    Swatch::new("gray-lighten-30", "#F5F5F5", "Gray Lighten 30"),
    Swatch::new("gray-lighten-20", "#EEEEEE", "Gray Lighten 20"),
    Swatch::new("gray-lighten-10", "#E0E0E0", "Gray Lighten 10"),
    Swatch::new("gray-darken-10", "#757575", "Gray Darken 10"),
    Swatch::new("gray-darken-20", "#616161", "Gray Darken 20"),
    Swatch::new("gray-darken-30", "#424242", "Gray Darken 30"),
    Swatch::new("gray-darken-40", "#212121", "Gray Darken 40"),
];

/// `<option>` elements for every swatch except the pinned ones.
pub fn color_options() -> String {
    PALETTE
        .iter()
        .filter(|swatch| !PINNED.contains(&swatch.key))
        .map(|swatch| {
            format!(
                r#"<option value="{}" data-name="{}">{}</option>"#,
                swatch.value, swatch.key, swatch.name
            )
        })
        .collect()
}
