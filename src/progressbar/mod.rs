//! Animated, sectioned progress bar for Bubble Tea applications.
//!
//! The bar moves its fill from the value it is showing toward a target value
//! over a fixed duration, optionally blending the fill color on the way, and
//! can split the scale into labeled sections.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_progressbar::progressbar::{new, with_color, with_sections, with_value};
//!
//! let mut bar = new(&[
//!     with_value(25.0),
//!     with_sections(4),
//!     with_color("warning".to_string()),
//! ]);
//!
//! // Mounting starts the first run; the command drives the frames.
//! let _cmd = bar.mount();
//! ```
//!
//! # Props
//!
//! Hosts that keep their configuration as data can decode [`Props`] with
//! serde and hand whole snapshots to [`Model::set_props`]:
//!
//! ```rust
//! use bubbletea_progressbar::progressbar::{from_props, Props};
//!
//! let props: Props = serde_json::from_str(r#"{ "value": 10, "maxValue": 40 }"#).unwrap();
//! let mut bar = from_props(props.clone());
//! let _cmd = bar.mount();
//!
//! let next = Props { value: 30.0, ..props };
//! let _cmd = bar.set_props(next);
//! assert_eq!(bar.target(), 30.0);
//! ```
//!
//! # Degraded input
//!
//! Nothing here fails. Values clamp to `[0, max_value]`, a non-finite or
//! negative `max_value` counts as zero, section counts clamp to
//! `[1, MAX_SECTIONS]`, negative durations become instantaneous, and unknown
//! color names fall back to the `info` theme.

pub mod animator;
pub mod color;
pub mod layout;
pub mod markup;
pub mod methods;
pub mod model;
pub mod style;
pub mod types;
pub mod view;


pub use animator::{Animator, Frame, RunState};
pub use color::{
    blend, color_classes, ColorName, ColorRamp, ParseColorError, Rgb, COLOR_NAMES, DEFAULT_COLOR,
    FALLBACK_COLOR,
};
pub use layout::{clamp_sections, section_indices, Sections, MAX_SECTIONS};
pub use model::{from_props, new, Model};
pub use style::{apply_classes, ClassList, Element, InlineStyle};
pub use types::{
    with_animated, with_color, with_color_change, with_fill_characters, with_increase_duration,
    with_max_value, with_sections, with_striped, with_value, with_width, without_divide,
    without_value_text, FrameMsg, ProgressBarOption, Props,
};
