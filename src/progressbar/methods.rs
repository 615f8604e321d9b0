//! Lifecycle, configuration changes and frame handling.

use super::model::{new, Model, FPS};
use super::style::{ANIMATED_CLASS, STRIPED_CLASS};
use super::types::{FrameMsg, Props};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::time::{Duration, Instant};

/// How long the stripes take to shift by one cell.
const STRIPE_STEP: Duration = Duration::from_millis(125);

impl Model {
    /// Starts the first run toward the configured value.
    ///
    /// Returns the command for the first frame, or `None` if the bar is
    /// already mounted.
    pub fn mount(&mut self) -> Option<Cmd> {
        if self.mounted {
            return None;
        }
        let now = Instant::now();
        self.mounted = true;
        self.stripe_epoch = Some(now);
        Some(self.restart_run(now))
    }

    /// Cancels the run and drops every frame still in flight.
    ///
    /// The displayed value is kept; a later [`mount`](Model::mount) resumes
    /// from it.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        tracing::debug!(id = self.id, displayed = self.animator.displayed(), "progress bar unmounted");
        self.animator.cancel();
        self.mounted = false;
        self.stripe_epoch = None;
        self.tag += 1;
    }

    /// Replaces the props, redoing only the work the change calls for.
    ///
    /// Color or stripe flag changes reapply the classes; section count changes
    /// recompute the layout; value, duration, max value, color-change or
    /// color changes supersede the current run from the displayed position.
    /// Returns the command for the next frame when a frame loop (re)starts.
    pub fn set_props(&mut self, props: Props) -> Option<Cmd> {
        let was_moving = self.stripes_moving();
        let prev = std::mem::replace(&mut self.props, props);

        if self.props.restyles(&prev) {
            self.apply_style();
        }
        if self.props.sections != prev.sections {
            self.sections.sync(self.props.sections);
        }

        if !self.mounted {
            return None;
        }

        if self.props.restarts_run(&prev) {
            return Some(self.restart_run(Instant::now()));
        }

        if self.stripes_moving() && !was_moving && !self.animator.is_running() {
            self.tag += 1;
            return Some(self.next_frame());
        }

        None
    }

    fn reconfigure(&mut self, change: impl FnOnce(&mut Props)) -> Option<Cmd> {
        let mut props = self.props.clone();
        change(&mut props);
        self.set_props(props)
    }

    /// Sets the raw value.
    pub fn set_value(&mut self, value: f64) -> Option<Cmd> {
        self.reconfigure(|p| p.value = value)
    }

    /// Adds to the raw value.
    pub fn incr_value(&mut self, by: f64) -> Option<Cmd> {
        self.reconfigure(|p| p.value += by)
    }

    /// Subtracts from the raw value.
    pub fn decr_value(&mut self, by: f64) -> Option<Cmd> {
        self.reconfigure(|p| p.value -= by)
    }

    /// Sets the upper bound of the scale.
    pub fn set_max_value(&mut self, max_value: f64) -> Option<Cmd> {
        self.reconfigure(|p| p.max_value = max_value)
    }

    /// Sets the run duration in milliseconds.
    pub fn set_increase_duration(&mut self, ms: f64) -> Option<Cmd> {
        self.reconfigure(|p| p.increase_duration = ms)
    }

    /// Sets the number of sections.
    pub fn set_sections(&mut self, sections: i64) -> Option<Cmd> {
        self.reconfigure(|p| p.sections = sections)
    }

    /// Sets the theme by name.
    pub fn set_color(&mut self, color: impl Into<String>) -> Option<Cmd> {
        let color = color.into();
        self.reconfigure(|p| p.color = color)
    }

    /// Turns color blending on or off.
    pub fn set_color_change(&mut self, enabled: bool) -> Option<Cmd> {
        self.reconfigure(|p| p.color_change = enabled)
    }

    /// Turns the striped treatment on or off.
    pub fn set_striped(&mut self, striped: bool) -> Option<Cmd> {
        self.reconfigure(|p| p.striped = striped)
    }

    /// Turns stripe motion on or off.
    pub fn set_animated(&mut self, animated: bool) -> Option<Cmd> {
        self.reconfigure(|p| p.animated = animated)
    }

    /// Shows or hides dividers and tick labels.
    pub fn set_divide(&mut self, divide: bool) -> Option<Cmd> {
        self.reconfigure(|p| p.divide = divide)
    }

    /// Processes frame messages.
    ///
    /// Frames from another bar, from a superseded run, or arriving after
    /// unmount are ignored. Returns the command for the next frame while the
    /// run is active or the stripes are moving.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            if frame.id != self.id || frame.tag != self.tag || !self.mounted {
                return std::option::Option::None;
            }

            if let Some(step) = self.animator.advance(frame.time) {
                self.paint(step.displayed);
                tracing::trace!(id = self.id, displayed = step.displayed, progress = step.progress, "progress frame");
                if step.finished() {
                    tracing::debug!(id = self.id, value = step.displayed, "progress run finished");
                }
            }

            if self.stripes_moving() {
                if let Some(epoch) = self.stripe_epoch {
                    let elapsed = frame.time.saturating_duration_since(epoch);
                    self.stripe_phase = (elapsed.as_millis() / STRIPE_STEP.as_millis()) as usize;
                }
            }

            if self.animator.is_running() || self.stripes_moving() {
                return std::option::Option::Some(self.next_frame());
            }
        }

        std::option::Option::None
    }

    /// Supersedes any run in flight and starts one toward the current target.
    fn restart_run(&mut self, now: Instant) -> Cmd {
        if self.animator.is_running() {
            tracing::debug!(id = self.id, displayed = self.animator.displayed(), "progress run superseded");
        }
        if !self.props.color_change {
            self.fill.style.background_color = None;
        }

        let target = self.props.target();
        let duration = self.props.duration();
        tracing::debug!(
            id = self.id,
            from = self.animator.displayed(),
            to = target,
            duration_ms = duration.as_millis() as u64,
            "progress run started"
        );
        self.animator.start(target, duration, now);
        self.tag += 1;
        self.next_frame()
    }

    /// Writes the displayed value into the fill element.
    fn paint(&mut self, displayed: f64) {
        let percent = self.props.fill_percent(displayed);
        self.fill.style.width = Some(percent);
        if self.props.color_change {
            self.fill.style.background_color = Some(self.theme.ramp().blend(percent));
        }
    }

    /// Whether the fill is showing moving stripes.
    pub(super) fn stripes_moving(&self) -> bool {
        self.mounted
            && self.fill.class_list.contains(STRIPED_CLASS)
            && self.fill.class_list.contains(ANIMATED_CLASS)
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

        bubbletea_tick(duration, move |_| {
            Box::new(FrameMsg {
                id,
                tag,
                time: Instant::now(),
            }) as Msg
        })
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        let mut model = new(&[]);
        let cmd = model.mount();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
