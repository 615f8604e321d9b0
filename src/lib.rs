#![warn(missing_docs)]

//! # bubbletea-progressbar
//!
//! An animated progress bar component for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) and lipgloss.
//!
//! ## Overview
//!
//! The component follows the Elm Architecture used by bubbletea-rs: it is
//! configured through props, advanced by frame messages it schedules for
//! itself, and rendered with `view()`. On top of a plain bar it offers:
//!
//! - **Timed interpolation**: the fill moves linearly from its current
//!   position to the target over a configurable duration, and a new target
//!   picks up from wherever the fill is
//! - **Color blending**: each theme carries a begin and end color the fill
//!   can blend through as it grows
//! - **Sections**: evenly spaced dividers and tick labels across the scale
//! - **Stripes**: a striped fill that can move over time
//! - **Markup**: the same element tree rendered as HTML with theme classes
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_progressbar::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     bar: ProgressBar,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut bar = progressbar_new(&[with_sections(4), with_color_change()]);
//!         let cmd = bar.mount();
//!         (Self { bar }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Frame messages for the bar come back through here.
//!         self.bar.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Uploading\n{}\n", self.bar.view())
//!     }
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! bubbletea-progressbar = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! ```

pub mod progressbar;

pub use progressbar::Model as ProgressBar;
pub use progressbar::{
    new as progressbar_new, ColorName, FrameMsg as ProgressBarFrameMsg, Props as ProgressBarProps,
    COLOR_NAMES,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_progressbar::prelude::*;
///
/// let bar = progressbar_new(&[with_value(40.0), with_striped()]);
/// assert_eq!(bar.value(), 40.0);
/// ```
pub mod prelude {
    pub use crate::progressbar::Model as ProgressBar;
    pub use crate::progressbar::{
        from_props as progressbar_from_props, new as progressbar_new, with_animated, with_color,
        with_color_change, with_fill_characters, with_increase_duration, with_max_value,
        with_sections, with_striped, with_value, with_width, without_divide, without_value_text,
        ColorName, FrameMsg as ProgressBarFrameMsg, ProgressBarOption, Props as ProgressBarProps,
        COLOR_NAMES,
    };
}
