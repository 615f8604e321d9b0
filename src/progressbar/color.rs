//! Color names, class names and the RGB ramps used for color blending.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Valid color names, in the order hosts usually list them in selectors.
pub const COLOR_NAMES: [&str; 7] = [
    "primary",
    "secondary",
    "info",
    "success",
    "warning",
    "danger",
    "black",
];

/// Color used when no color is configured.
pub const DEFAULT_COLOR: ColorName = ColorName::Primary;

/// Theme used, classes and ramp alike, when the configured name is unknown.
pub const FALLBACK_COLOR: ColorName = ColorName::Info;

static BY_NAME: Lazy<HashMap<&'static str, ColorName>> =
    Lazy::new(|| ColorName::ALL.iter().map(|c| (c.as_str(), *c)).collect());

/// Error returned when strictly parsing an unknown color name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown progress bar color `{0}`")]
pub struct ParseColorError(pub String);

/// One of the fixed visual themes of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    /// Light to medium blue.
    Primary,
    /// Lilac to purple.
    Secondary,
    /// Light blue to saturated blue.
    Info,
    /// Green to teal.
    Success,
    /// Amber to orange.
    Warning,
    /// Pink to red.
    Danger,
    /// Dark gray to black.
    Black,
}

impl ColorName {
    /// Every theme, in the same order as [`COLOR_NAMES`].
    pub const ALL: [ColorName; 7] = [
        ColorName::Primary,
        ColorName::Secondary,
        ColorName::Info,
        ColorName::Success,
        ColorName::Warning,
        ColorName::Danger,
        ColorName::Black,
    ];

    /// The lowercase name of the theme.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorName::Primary => "primary",
            ColorName::Secondary => "secondary",
            ColorName::Info => "info",
            ColorName::Success => "success",
            ColorName::Warning => "warning",
            ColorName::Danger => "danger",
            ColorName::Black => "black",
        }
    }

    /// The background class applied to the track and fill elements.
    pub fn class(self) -> &'static str {
        match self {
            ColorName::Primary => "bg-primary",
            ColorName::Secondary => "bg-secondary",
            ColorName::Info => "bg-info",
            ColorName::Success => "bg-success",
            ColorName::Warning => "bg-warning",
            ColorName::Danger => "bg-danger",
            ColorName::Black => "bg-black",
        }
    }

    /// The begin and end colors the fill blends between.
    pub fn ramp(self) -> ColorRamp {
        let (begin, end) = match self {
            ColorName::Primary => ((144, 202, 249), (66, 165, 245)),
            ColorName::Secondary => ((227, 126, 255), (214, 67, 255)),
            ColorName::Info => ((144, 202, 249), (47, 162, 255)),
            ColorName::Success => ((47, 198, 128), (0, 171, 139)),
            ColorName::Warning => ((255, 193, 7), (255, 162, 0)),
            ColorName::Danger => ((255, 149, 160), (255, 72, 91)),
            ColorName::Black => ((67, 67, 67), (0, 0, 0)),
        };
        ColorRamp {
            begin: Rgb::new(begin.0, begin.1, begin.2),
            end: Rgb::new(end.0, end.1, end.2),
        }
    }

    /// Solid color a class stands for when the fill is not blending.
    pub fn solid(self) -> Rgb {
        self.ramp().end
    }

    /// Lenient lookup. Names are case sensitive, as in the class map.
    pub fn resolve(name: &str) -> Option<ColorName> {
        BY_NAME.get(name).copied()
    }

    /// Lookup that never fails: unknown names become [`FALLBACK_COLOR`].
    pub fn resolve_or_fallback(name: &str) -> ColorName {
        ColorName::resolve(name).unwrap_or(FALLBACK_COLOR)
    }
}

impl Default for ColorName {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorName::resolve(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// The name to class mapping, for hosts building their own markup.
pub fn color_classes() -> [(&'static str, &'static str); 7] {
    ColorName::ALL.map(|c| (c.as_str(), c.class()))
}

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form (`#RRGGBB`) understood by lipgloss.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// The pair of colors a fill blends between as it goes from 0% to 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRamp {
    /// Color at 0%.
    pub begin: Rgb,
    /// Color at 100%.
    pub end: Rgb,
}

impl ColorRamp {
    /// Blends the ramp at `percent` (0 to 100).
    ///
    /// Each channel is `begin + floor((end - begin) * percent * 0.01)`, so the
    /// result moves toward `end` in whole steps and reaches it exactly at 100.
    pub fn blend(&self, percent: f64) -> Rgb {
        let channel = |begin: u8, end: u8| -> u8 {
            let delta = (end as i32 - begin as i32) as f64;
            let step = (delta * (percent * 0.01)).floor();
            let value = begin as f64 + step;
            value.clamp(0.0, 255.0) as u8
        };

        Rgb {
            r: channel(self.begin.r, self.end.r),
            g: channel(self.begin.g, self.end.g),
            b: channel(self.begin.b, self.end.b),
        }
    }
}

/// Blends the ramp of the named color, using the fallback ramp for unknown names.
pub fn blend(name: &str, percent: f64) -> Rgb {
    ColorName::resolve_or_fallback(name).ramp().blend(percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_enumeration() {
        for (name, color) in COLOR_NAMES.iter().zip(ColorName::ALL) {
            assert_eq!(*name, color.as_str());
            assert_eq!(ColorName::resolve(name), Some(color));
        }
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(ColorName::resolve("purple"), None);
        assert_eq!(ColorName::resolve("Primary"), None);
        assert_eq!(ColorName::resolve(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "teal".parse::<ColorName>().unwrap_err();
        assert_eq!(err, ParseColorError("teal".to_string()));
        assert_eq!(err.to_string(), "unknown progress bar color `teal`");
        assert_eq!("danger".parse::<ColorName>(), Ok(ColorName::Danger));
    }

    #[test]
    fn test_color_classes() {
        let classes = color_classes();
        assert_eq!(classes[0], ("primary", "bg-primary"));
        assert_eq!(classes[6], ("black", "bg-black"));
    }

    #[test]
    fn test_blend_endpoints_for_every_color() {
        for color in ColorName::ALL {
            let ramp = color.ramp();
            assert_eq!(ramp.blend(0.0), ramp.begin, "{} at 0", color);
            assert_eq!(ramp.blend(100.0), ramp.end, "{} at 100", color);
        }
    }

    #[test]
    fn test_blend_midpoint_floors() {
        // primary: r 144 -> 66, delta -78; -78 * 0.5 = -39
        // g 202 -> 165, delta -37; floor(-18.5) = -19
        // b 249 -> 245, delta -4; -2
        let mid = ColorName::Primary.ramp().blend(50.0);
        assert_eq!(mid, Rgb::new(105, 183, 247));
    }

    #[test]
    fn test_blend_unknown_uses_fallback_ramp() {
        for percent in [0.0, 30.0, 100.0] {
            assert_eq!(blend("nope", percent), blend("info", percent));
        }
        assert_eq!(blend("nope", 100.0), Rgb::new(47, 162, 255));
        assert_eq!(ColorName::resolve_or_fallback("nope"), FALLBACK_COLOR);
    }

    #[test]
    fn test_rgb_formats() {
        let c = Rgb::new(255, 72, 91);
        assert_eq!(c.to_string(), "rgb(255, 72, 91)");
        assert_eq!(c.to_hex(), "#FF485B");
    }
}
