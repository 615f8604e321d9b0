//! Terminal rendering for the progress bar.

use super::color::Rgb;
use super::layout::format_number;
use super::model::Model;
use super::style::{ANIMATED_CLASS, STRIPED_CLASS};
use lipgloss_extras::lipgloss;
use lipgloss_extras::lipgloss::{Color, Style};
use unicode_width::UnicodeWidthStr;

/// Width of one stripe band in cells.
const STRIPE_BAND: usize = 2;

impl Model {
    /// Renders the bar as currently painted by the animation loop.
    ///
    /// The first line is the bar followed by the value text. When dividers
    /// are on, section boundaries are drawn into the bar and a second line
    /// carries the tick labels.
    pub fn view(&self) -> String {
        let percent = self.fill.style.width.unwrap_or(0.0);
        let color = self
            .fill
            .style
            .background_color
            .unwrap_or_else(|| self.theme.solid());
        self.render(percent, color)
    }

    /// Renders the bar statically at `value`, bypassing the animation.
    ///
    /// ```rust
    /// use bubbletea_progressbar::progressbar::{new, with_width, without_divide, without_value_text};
    ///
    /// let bar = new(&[with_width(10), without_divide(), without_value_text()]);
    /// let full = strip_ansi_escapes::strip_str(bar.view_as(100.0));
    /// assert_eq!(full, "██████████");
    /// ```
    pub fn view_as(&self, value: f64) -> String {
        let percent = self.props.fill_percent(self.props.clamp_value(value));
        let color = if self.props.color_change {
            self.theme.ramp().blend(percent)
        } else {
            self.theme.solid()
        };
        self.render(percent, color)
    }

    fn render(&self, percent: f64, color: Rgb) -> String {
        let value_view = self.value_view();
        let value_width = lipgloss::width_visible(&value_view) as i32;
        let tw = std::cmp::max(0, self.width - value_width) as usize;

        let bar = format!("{}{}", self.bar_view(percent, color, tw), value_view);
        if !self.props.divide {
            return bar;
        }
        format!("{}\n{}", bar, self.labels_view(tw))
    }

    fn bar_view(&self, percent: f64, color: Rgb, tw: usize) -> String {
        let fw = ((tw as f64) * percent / 100.0).round().clamp(0.0, tw as f64) as usize;

        let striped = self.fill.class_list.contains(STRIPED_CLASS);
        let shift = if self.fill.class_list.contains(ANIMATED_CLASS) {
            self.stripe_phase % (STRIPE_BAND * 2)
        } else {
            0
        };

        let boundaries: Vec<usize> = if self.props.divide {
            let count = self.sections.count();
            self.sections
                .dividers()
                .map(|i| (i + 1) * tw / count)
                .filter(|&col| col < tw)
                .collect()
        } else {
            Vec::new()
        };

        let full_style = Style::new().foreground(Color::from(color.to_hex().as_str()));
        let empty_style = Style::new().foreground(Color::from(self.empty_color.as_str()));
        let divider_style = Style::new().foreground(Color::from(self.divider_color.as_str()));

        let mut result = String::new();
        for i in 0..tw {
            if boundaries.contains(&i) {
                result.push_str(&divider_style.render(&self.divider.to_string()));
            } else if i < fw {
                // bands move right as the shift grows
                let band = (i + STRIPE_BAND * 2 - shift) / STRIPE_BAND;
                let glyph = if striped && band % 2 == 1 {
                    self.stripe
                } else {
                    self.full
                };
                result.push_str(&full_style.render(&glyph.to_string()));
            } else {
                result.push_str(&empty_style.render(&self.empty.to_string()));
            }
        }
        result
    }

    fn value_view(&self) -> String {
        if !self.show_value {
            return String::new();
        }
        self.value_style
            .render(&format!(" {}%", format_number(self.props.value)))
    }

    /// Tick labels: the first flush left, the last flush right, the rest
    /// centred on their section boundary, always at least one space apart.
    fn labels_view(&self, tw: usize) -> String {
        let labels = self.sections.tick_labels(self.props.clamped_max());
        let last = labels.len() - 1;

        let mut line = String::new();
        let mut cursor = 0usize;
        for (i, label) in labels.iter().enumerate() {
            let w = UnicodeWidthStr::width(label.as_str());
            let desired = if i == 0 {
                0
            } else if i == last {
                tw.saturating_sub(w)
            } else {
                (i * tw / last).saturating_sub(w / 2)
            };
            let gap = if i == 0 { 0 } else { 1 };
            let start = desired.max(cursor + gap);

            line.push_str(&" ".repeat(start - cursor));
            line.push_str(label);
            cursor = start + w;
        }

        self.label_style.render(&line)
    }
}
