//! HTML markup for hosts that render the bar in a browser view.

use super::layout::format_number;
use super::model::Model;

impl Model {
    /// Renders the element tree as HTML.
    ///
    /// Class names and inline styles come straight from the track and fill
    /// elements, so the output reflects the last painted frame. A stylesheet
    /// for the class names is the host's business.
    ///
    /// ```rust
    /// use bubbletea_progressbar::progressbar::{new, without_divide};
    ///
    /// let bar = new(&[without_divide()]);
    /// assert_eq!(
    ///     bar.markup(),
    ///     concat!(
    ///         r#"<div class="progress-bar-container">"#,
    ///         r#"<div class="progress-bar bg-primary">"#,
    ///         r#"<div class="progress bg-primary"><div class="cur-progress-text">0%</div></div>"#,
    ///         "</div></div>",
    ///     )
    /// );
    /// ```
    pub fn markup(&self) -> String {
        let mut html = String::from(r#"<div class="progress-bar-container">"#);

        html.push_str(&format!(r#"<div class="{}">"#, self.track.class_list));

        let css = self.fill.style.css();
        if css.is_empty() {
            html.push_str(&format!(r#"<div class="{}">"#, self.fill.class_list));
        } else {
            html.push_str(&format!(
                r#"<div class="{}" style="{}">"#,
                self.fill.class_list, css
            ));
        }
        html.push_str(&format!(
            r#"<div class="cur-progress-text">{}%</div>"#,
            format_number(self.props.value)
        ));
        html.push_str("</div>");

        if self.props.divide {
            html.push_str(r#"<div class="divide-bar-container">"#);
            let count = self.sections.count();
            for &i in self.sections.indices() {
                if i + 1 < count {
                    html.push_str(r#"<div class="divide-bar"></div>"#);
                } else {
                    html.push_str("<div></div>");
                }
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");

        if self.props.divide {
            html.push_str(r#"<div class="divide-count">"#);
            for label in self.sections.tick_labels(self.props.clamped_max()) {
                html.push_str(&format!("<div>{}</div>", label));
            }
            html.push_str("</div>");
        }

        html.push_str("</div>");
        html
    }
}
