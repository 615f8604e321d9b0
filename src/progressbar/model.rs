//! Core model of the progress bar component.

use super::animator::Animator;
use super::color::ColorName;
use super::layout::Sections;
use super::style::{apply_classes, Element, FILL_CLASS, TRACK_CLASS};
use super::types::{ProgressBarOption, Props};
use lipgloss_extras::lipgloss::Style;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Instant;

// Internal ID management for progress bar instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

pub(super) const FPS: u32 = 60;
pub(super) const DEFAULT_WIDTH: i32 = 40;

/// The progress bar model: configuration, owned elements and animation state.
///
/// The bar follows the Elm Architecture used by bubbletea-rs. Configuration
/// changes go through [`set_props`](Model::set_props) or one of the setters,
/// which return the command driving the next animation frame; the host
/// forwards messages to [`update`](Model::update) and prints
/// [`view`](Model::view).
///
/// # Examples
///
/// ```rust
/// use bubbletea_progressbar::progressbar::{new, with_sections, with_width};
///
/// let mut bar = new(&[with_width(30), with_sections(3)]);
/// let _first_frame = bar.mount();
/// let _next = bar.set_value(60.0);
/// assert_eq!(bar.target(), 60.0);
/// assert!(bar.is_animating());
/// ```
///
/// ## Integration with bubbletea-rs
///
/// ```rust
/// use bubbletea_progressbar::progressbar;
/// use bubbletea_rs::{Cmd, Model as TeaModel, Msg};
///
/// struct App {
///     bar: progressbar::Model,
/// }
///
/// impl TeaModel for App {
///     fn init() -> (Self, Option<Cmd>) {
///         let mut bar = progressbar::new(&[progressbar::with_color("success".to_string())]);
///         let cmd = bar.mount();
///         (Self { bar }, cmd)
///     }
///
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         self.bar.update(msg)
///     }
///
///     fn view(&self) -> String {
///         self.bar.view()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Keeps frames meant for other progress bars out.
    pub(super) id: i64,
    /// Frame loop generation; frames carrying an older tag are stale.
    pub(super) tag: i64,

    pub(super) props: Props,

    /// Total width in cells, value text included.
    pub width: i32,
    /// Glyph for filled cells.
    pub full: char,
    /// Alternate glyph for the dark bands of a striped fill.
    pub stripe: char,
    /// Glyph for empty cells.
    pub empty: char,
    /// Color of the empty cells.
    pub empty_color: String,
    /// Glyph drawn at section boundaries.
    pub divider: char,
    /// Color of the section boundaries.
    pub divider_color: String,
    /// Whether to print the raw value after the bar.
    pub show_value: bool,
    /// Style of the value text.
    pub value_style: Style,
    /// Style of the tick label line.
    pub label_style: Style,

    pub(super) track: Element,
    pub(super) fill: Element,
    pub(super) theme: ColorName,

    pub(super) animator: Animator,
    pub(super) sections: Sections,

    pub(super) mounted: bool,
    pub(super) stripe_epoch: Option<Instant>,
    pub(super) stripe_phase: usize,
}

/// Creates a progress bar with the given options.
///
/// Defaults: value 0 of 100, 1000 ms runs, two sections with dividers, the
/// `primary` theme, no blending, no stripes, 40 cells wide.
pub fn new(opts: &[ProgressBarOption]) -> Model {
    let mut m = Model {
        id: next_id(),
        tag: 0,
        props: Props::default(),
        width: DEFAULT_WIDTH,
        full: '█',
        stripe: '▓',
        empty: '░',
        empty_color: "#606060".to_string(),
        divider: '│',
        divider_color: "#303030".to_string(),
        show_value: true,
        value_style: Style::new(),
        label_style: Style::new(),
        track: Element::new(TRACK_CLASS),
        fill: Element::new(FILL_CLASS),
        theme: ColorName::default(),
        animator: Animator::new(),
        sections: Sections::default(),
        mounted: false,
        stripe_epoch: None,
        stripe_phase: 0,
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m.apply_style();
    m.sections.sync(m.props.sections);
    m
}

/// Creates a progress bar from host props.
pub fn from_props(props: Props) -> Model {
    let mut m = new(&[]);
    m.props = props;
    m.apply_style();
    m.sections.sync(m.props.sections);
    m
}

impl Model {
    /// Resets the element classes from the current props.
    pub(super) fn apply_style(&mut self) {
        self.theme = apply_classes(
            &mut self.track,
            &mut self.fill,
            &self.props.color,
            self.props.striped,
            self.props.animated,
        );
    }

    /// Instance identifier carried by this bar's frame messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current props.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Raw configured value, before clamping.
    pub fn value(&self) -> f64 {
        self.props.value
    }

    /// Clamped value the bar is moving toward.
    pub fn target(&self) -> f64 {
        self.props.target()
    }

    /// Value currently displayed. Lags [`target`](Model::target) while animating.
    pub fn displayed(&self) -> f64 {
        self.animator.displayed()
    }

    /// Displayed value as a fill percentage in `[0, 100]`.
    pub fn fill_percent(&self) -> f64 {
        self.props.fill_percent(self.animator.displayed())
    }

    /// Whether a run is in flight.
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Whether the bar is mounted and accepting frames.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Run state, for hosts that need the run's timing.
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Derived sections.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Outer (track) element.
    pub fn track(&self) -> &Element {
        &self.track
    }

    /// Inner (fill) element.
    pub fn fill(&self) -> &Element {
        &self.fill
    }

    /// Theme whose classes are applied; the fallback for unknown names.
    pub fn theme(&self) -> ColorName {
        self.theme
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}
