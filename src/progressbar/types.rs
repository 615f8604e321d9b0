//! Messages, props and construction options for the progress bar.

use super::animator::duration_from_millis;
use super::color::DEFAULT_COLOR;
use super::layout::clamp_sections;
use super::model::Model;
use bubbletea_rs::Msg;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Message that advances one animation frame.
///
/// Frames are scheduled by the progress bar itself. A frame is only honored
/// by the bar that scheduled it, and only if no newer run or unmount has
/// happened since; everything else is dropped in `update`.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    /// Identifier of the progress bar instance.
    pub(super) id: i64,
    /// Frame loop generation. Bumped on every restart and on unmount.
    pub(super) tag: i64,
    /// When the frame fired. Progress is computed from this instant.
    pub time: Instant,
}

impl From<FrameMsg> for Msg {
    fn from(msg: FrameMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// Host-supplied configuration.
///
/// Decodes from camelCase keys with every field optional:
///
/// ```rust
/// use bubbletea_progressbar::progressbar::Props;
///
/// let props: Props = serde_json::from_str(r#"{ "value": 40, "stripped": true }"#).unwrap();
/// assert_eq!(props.value, 40.0);
/// assert_eq!(props.max_value, 100.0);
/// assert!(props.striped);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Props {
    /// Raw value the bar moves toward. Clamped to `[0, max_value]`.
    pub value: f64,
    /// Upper bound of the scale.
    pub max_value: f64,
    /// Run duration in milliseconds. Negative means instantaneous.
    pub increase_duration: f64,
    /// Whether to draw section dividers and tick labels.
    pub divide: bool,
    /// Number of sections. Values below one mean one.
    pub sections: i64,
    /// Theme name. Unknown names fall back silently.
    pub color: String,
    /// Whether the fill blends its color as it grows.
    pub color_change: bool,
    /// Striped fill treatment.
    #[serde(rename = "stripped", alias = "striped")]
    pub striped: bool,
    /// Stripe-motion treatment.
    pub animated: bool,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            value: 0.0,
            max_value: 100.0,
            increase_duration: 1000.0,
            divide: true,
            sections: 2,
            color: DEFAULT_COLOR.as_str().to_string(),
            color_change: false,
            striped: false,
            animated: false,
        }
    }
}

impl Props {
    /// Upper bound used for clamping; NaN, infinite and negative bounds count
    /// as zero.
    pub fn clamped_max(&self) -> f64 {
        if !self.max_value.is_finite() || self.max_value < 0.0 {
            0.0
        } else {
            self.max_value
        }
    }

    /// Clamps an arbitrary value into `[0, max]`. NaN becomes zero.
    pub fn clamp_value(&self, value: f64) -> f64 {
        value.max(0.0).min(self.clamped_max())
    }

    /// The value a run should move toward.
    pub fn target(&self) -> f64 {
        self.clamp_value(self.value)
    }

    /// Fill percentage for a displayed value.
    ///
    /// The displayed value is itself the percentage, as in the blend formula,
    /// capped to `[0, 100]` so a scale larger than 100 never overflows the
    /// track. NaN becomes zero.
    pub fn fill_percent(&self, displayed: f64) -> f64 {
        displayed.max(0.0).min(100.0)
    }

    /// Run duration with negative values treated as zero.
    pub fn duration(&self) -> Duration {
        duration_from_millis(self.increase_duration)
    }

    /// Section count after clamping.
    pub fn clamped_sections(&self) -> usize {
        clamp_sections(self.sections)
    }

    /// Whether moving from `prev` to `self` needs the classes reapplied.
    pub(super) fn restyles(&self, prev: &Props) -> bool {
        self.color != prev.color || self.striped != prev.striped || self.animated != prev.animated
    }

    /// Whether moving from `prev` to `self` supersedes the current run.
    pub(super) fn restarts_run(&self, prev: &Props) -> bool {
        self.value != prev.value
            || self.increase_duration != prev.increase_duration
            || self.max_value != prev.max_value
            || self.color_change != prev.color_change
            || self.color != prev.color
    }
}

/// Construction options for [`new`](super::new).
///
/// # Examples
///
/// ```rust
/// use bubbletea_progressbar::progressbar::{new, with_color, with_sections, with_value};
///
/// let bar = new(&[
///     with_value(30.0),
///     with_sections(3),
///     with_color("success".to_string()),
/// ]);
/// assert_eq!(bar.value(), 30.0);
/// ```
#[derive(Debug, Clone)]
pub enum ProgressBarOption {
    /// Initial raw value.
    WithValue(f64),
    /// Upper bound of the scale.
    WithMaxValue(f64),
    /// Run duration in milliseconds.
    WithIncreaseDuration(f64),
    /// Number of sections.
    WithSections(i64),
    /// Hides dividers and tick labels.
    WithoutDivide,
    /// Theme name.
    WithColor(String),
    /// Enables color blending.
    WithColorChange,
    /// Enables the striped treatment.
    WithStriped,
    /// Enables stripe motion.
    WithAnimated,
    /// Total width in cells, value text included.
    WithWidth(i32),
    /// Glyphs for the filled and empty cells.
    WithFillCharacters(char, char),
    /// Hides the value text after the bar.
    WithoutValueText,
}

impl ProgressBarOption {
    pub(super) fn apply(&self, m: &mut Model) {
        match self {
            ProgressBarOption::WithValue(v) => m.props.value = *v,
            ProgressBarOption::WithMaxValue(v) => m.props.max_value = *v,
            ProgressBarOption::WithIncreaseDuration(ms) => m.props.increase_duration = *ms,
            ProgressBarOption::WithSections(n) => m.props.sections = *n,
            ProgressBarOption::WithoutDivide => m.props.divide = false,
            ProgressBarOption::WithColor(c) => m.props.color = c.clone(),
            ProgressBarOption::WithColorChange => m.props.color_change = true,
            ProgressBarOption::WithStriped => m.props.striped = true,
            ProgressBarOption::WithAnimated => m.props.animated = true,
            ProgressBarOption::WithWidth(w) => m.width = *w,
            ProgressBarOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            ProgressBarOption::WithoutValueText => m.show_value = false,
        }
    }
}

/// Sets the initial raw value.
pub fn with_value(value: f64) -> ProgressBarOption {
    ProgressBarOption::WithValue(value)
}

/// Sets the upper bound of the scale.
pub fn with_max_value(max_value: f64) -> ProgressBarOption {
    ProgressBarOption::WithMaxValue(max_value)
}

/// Sets the run duration in milliseconds.
pub fn with_increase_duration(ms: f64) -> ProgressBarOption {
    ProgressBarOption::WithIncreaseDuration(ms)
}

/// Sets the number of sections.
pub fn with_sections(sections: i64) -> ProgressBarOption {
    ProgressBarOption::WithSections(sections)
}

/// Hides section dividers and tick labels.
pub fn without_divide() -> ProgressBarOption {
    ProgressBarOption::WithoutDivide
}

/// Sets the theme by name.
pub fn with_color(color: String) -> ProgressBarOption {
    ProgressBarOption::WithColor(color)
}

/// Blends the fill color from the theme's begin color to its end color.
pub fn with_color_change() -> ProgressBarOption {
    ProgressBarOption::WithColorChange
}

/// Draws the fill with stripes.
pub fn with_striped() -> ProgressBarOption {
    ProgressBarOption::WithStriped
}

/// Moves the stripes over time. Only visible together with [`with_striped`].
pub fn with_animated() -> ProgressBarOption {
    ProgressBarOption::WithAnimated
}

/// Sets the total width in cells.
pub fn with_width(width: i32) -> ProgressBarOption {
    ProgressBarOption::WithWidth(width)
}

/// Sets the glyphs for filled and empty cells.
pub fn with_fill_characters(full: char, empty: char) -> ProgressBarOption {
    ProgressBarOption::WithFillCharacters(full, empty)
}

/// Hides the value text.
pub fn without_value_text() -> ProgressBarOption {
    ProgressBarOption::WithoutValueText
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_props_match_documented_defaults() {
        let p = Props::default();
        assert_eq!(p.value, 0.0);
        assert_eq!(p.max_value, 100.0);
        assert_eq!(p.increase_duration, 1000.0);
        assert!(p.divide);
        assert_eq!(p.sections, 2);
        assert_eq!(p.color, "primary");
        assert!(!p.color_change);
        assert!(!p.striped);
        assert!(!p.animated);
    }

    #[test]
    fn test_target_clamps() {
        let mut p = Props::default();
        for (v, expected) in [(150.0, 100.0), (-3.0, 0.0), (42.5, 42.5), (f64::NAN, 0.0)] {
            p.value = v;
            assert_eq!(p.target(), expected, "value {}", v);
        }
    }

    #[test]
    fn test_bad_max_values() {
        let mut p = Props {
            value: 20.0,
            max_value: -10.0,
            ..Props::default()
        };
        assert_eq!(p.target(), 0.0);

        p.max_value = f64::NAN;
        assert_eq!(p.target(), 0.0);

        p.max_value = f64::INFINITY;
        assert_eq!(p.clamped_max(), 0.0);
        assert_eq!(p.target(), 0.0);
    }

    #[test]
    fn test_fill_percent_is_the_displayed_value() {
        let p = Props {
            max_value: 50.0,
            ..Props::default()
        };
        assert_eq!(p.fill_percent(25.0), 25.0);
        assert_eq!(p.fill_percent(50.0), 50.0);

        let wide = Props {
            max_value: 400.0,
            ..Props::default()
        };
        assert_eq!(wide.fill_percent(250.0), 100.0);
        assert_eq!(wide.fill_percent(-1.0), 0.0);
        assert_eq!(wide.fill_percent(f64::NAN), 0.0);
    }

    #[test]
    fn test_negative_duration_is_zero() {
        let p = Props {
            increase_duration: -500.0,
            ..Props::default()
        };
        assert_eq!(p.duration(), Duration::ZERO);
    }

    #[test]
    fn test_decode_camel_case_json() {
        let json = r#"{
            "value": 75,
            "maxValue": 150,
            "increaseDuration": 250,
            "divide": false,
            "sections": 0,
            "color": "warning",
            "colorChange": true,
            "stripped": true,
            "animated": true
        }"#;
        let p: Props = serde_json::from_str(json).unwrap();
        assert_eq!(p.value, 75.0);
        assert_eq!(p.max_value, 150.0);
        assert_eq!(p.duration(), Duration::from_millis(250));
        assert!(!p.divide);
        assert_eq!(p.clamped_sections(), 1);
        assert_eq!(p.color, "warning");
        assert!(p.color_change && p.striped && p.animated);
    }

    #[test]
    fn test_decode_empty_object_uses_defaults() {
        let p: Props = serde_json::from_str("{}").unwrap();
        assert_eq!(p, Props::default());
    }

    #[test]
    fn test_striped_alias() {
        let p: Props = serde_json::from_str(r#"{ "striped": true }"#).unwrap();
        assert!(p.striped);
        let out = serde_json::to_value(&p).unwrap();
        assert_eq!(out["stripped"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_change_detection() {
        let base = Props::default();

        let moved = Props {
            value: 10.0,
            ..base.clone()
        };
        assert!(moved.restarts_run(&base));
        assert!(!moved.restyles(&base));

        let recolored = Props {
            color: "danger".to_string(),
            ..base.clone()
        };
        assert!(recolored.restarts_run(&base));
        assert!(recolored.restyles(&base));

        let striped = Props {
            striped: true,
            ..base.clone()
        };
        assert!(!striped.restarts_run(&base));
        assert!(striped.restyles(&base));

        let resectioned = Props {
            sections: 5,
            ..base.clone()
        };
        assert!(!resectioned.restarts_run(&base));
        assert!(!resectioned.restyles(&base));
    }
}
