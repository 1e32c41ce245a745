// File: crates/chart-core/src/theme.rs
// Summary: Colors and bar chart theming (default fill, highlight fill, label color).

use std::fmt;

/// 8-bit sRGB color with alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const STEELBLUE: Color = Color::rgb(0x46, 0x82, 0xb4);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        match hex.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }

    /// CSS notation: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = self.a as f64 / 255.0;
            write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, alpha)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Surface fill; `None` leaves the surface transparent.
    pub background: Option<Color>,
    pub bar: Color,
    /// Fill for bars whose count equals the dataset maximum.
    pub highlight: Color,
    pub label: Color,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "default",
            background: None,
            bar: Color::STEELBLUE,
            highlight: Color::rgb(0x4c, 0xa9, 0xf5),
            label: Color::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Some(Color::rgb(18, 18, 20)),
            bar: Color::rgb(64, 160, 255),
            highlight: Color::rgb(255, 230, 70),
            label: Color::rgb(18, 18, 20),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Some(Color::WHITE),
            bar: Color::BLACK,
            highlight: Color::rgb(0xff, 0x00, 0x00),
            label: Color::WHITE,
        }
    }

    /// Pick the fill for a bar: highlight when it attains the maximum.
    #[inline]
    pub fn fill_for(&self, highlighted: bool) -> Color {
        if highlighted { self.highlight } else { self.bar }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to the default palette.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
