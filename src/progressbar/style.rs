//! Class lists and inline styles of the two elements the progress bar owns.

use super::color::{ColorName, Rgb, FALLBACK_COLOR};
use super::layout::format_number;
use std::fmt;

/// Base class of the outer (track) element.
pub const TRACK_CLASS: &str = "progress-bar";
/// Base class of the inner (fill) element.
pub const FILL_CLASS: &str = "progress";
/// Added to the fill when the striped treatment is on.
pub const STRIPED_CLASS: &str = "progress-bar-striped";
/// Added to the fill when the stripe-motion treatment is on.
pub const ANIMATED_CLASS: &str = "progress-bar-animated";

/// An ordered set of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Creates a list holding a single class.
    pub fn new(class: &str) -> Self {
        Self(vec![class.to_string()])
    }

    /// Replaces every class with `class`.
    pub fn reset(&mut self, class: &str) {
        self.0.clear();
        self.0.push(class.to_string());
    }

    /// Adds a class unless it is already present.
    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.0.push(class.to_string());
        }
    }

    /// Whether the class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no classes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Inline style properties mutated by the animation loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    /// Fill width as a percentage of the track.
    pub width: Option<f64>,
    /// Blended fill color.
    pub background_color: Option<Rgb>,
}

impl InlineStyle {
    /// CSS declaration text, empty when nothing is set.
    pub fn css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(width) = self.width {
            decls.push(format!("width: {}%", format_number(width)));
        }
        if let Some(color) = self.background_color {
            decls.push(format!("background-color: {}", color));
        }
        decls.join("; ")
    }
}

/// A presentation element: a class list plus inline style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Visual classes.
    pub class_list: ClassList,
    /// Inline style overrides.
    pub style: InlineStyle,
}

impl Element {
    /// Creates an element with one base class and no inline style.
    pub fn new(class: &str) -> Self {
        Self {
            class_list: ClassList::new(class),
            style: InlineStyle::default(),
        }
    }
}

/// Resets and reapplies the classes of both elements.
///
/// Unknown color names silently fall back to [`FALLBACK_COLOR`]. Returns
/// the theme whose classes were applied.
pub fn apply_classes(
    track: &mut Element,
    fill: &mut Element,
    color: &str,
    striped: bool,
    animated: bool,
) -> ColorName {
    let theme = ColorName::resolve(color).unwrap_or_else(|| {
        tracing::debug!(color, fallback = %FALLBACK_COLOR, "unknown progress bar color");
        FALLBACK_COLOR
    });

    track.class_list.reset(TRACK_CLASS);
    fill.class_list.reset(FILL_CLASS);

    track.class_list.add(theme.class());
    fill.class_list.add(theme.class());

    if striped {
        fill.class_list.add(STRIPED_CLASS);
    }
    if animated {
        fill.class_list.add(ANIMATED_CLASS);
    }

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements() -> (Element, Element) {
        (Element::new(TRACK_CLASS), Element::new(FILL_CLASS))
    }

    #[test]
    fn test_plain_primary() {
        let (mut track, mut fill) = elements();
        let theme = apply_classes(&mut track, &mut fill, "primary", false, false);
        assert_eq!(theme, ColorName::Primary);
        assert_eq!(track.class_list.to_string(), "progress-bar bg-primary");
        assert_eq!(fill.class_list.to_string(), "progress bg-primary");
    }

    #[test]
    fn test_striped_and_animated_go_on_fill() {
        let (mut track, mut fill) = elements();
        apply_classes(&mut track, &mut fill, "danger", true, true);
        assert_eq!(
            fill.class_list.to_string(),
            "progress bg-danger progress-bar-striped progress-bar-animated"
        );
        assert!(!track.class_list.contains(STRIPED_CLASS));
    }

    #[test]
    fn test_reapply_drops_stale_classes() {
        let (mut track, mut fill) = elements();
        apply_classes(&mut track, &mut fill, "success", true, true);
        apply_classes(&mut track, &mut fill, "warning", false, false);
        assert_eq!(fill.class_list.to_string(), "progress bg-warning");
        assert_eq!(track.class_list.len(), 2);
    }

    #[test]
    fn test_unknown_matches_info() {
        let (mut t1, mut f1) = elements();
        let (mut t2, mut f2) = elements();
        let a = apply_classes(&mut t1, &mut f1, "chartreuse", true, false);
        let b = apply_classes(&mut t2, &mut f2, "info", true, false);
        assert_eq!(a, b);
        assert_eq!(t1, t2);
        assert_eq!(f1, f2);
    }

    #[test]
    fn test_class_list_add_is_idempotent() {
        let mut list = ClassList::new("a");
        list.add("b");
        list.add("a");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_inline_css() {
        let mut style = InlineStyle::default();
        assert_eq!(style.css(), "");
        style.width = Some(25.0);
        assert_eq!(style.css(), "width: 25%");
        style.background_color = Some(Rgb::new(1, 2, 3));
        assert_eq!(style.css(), "width: 25%; background-color: rgb(1, 2, 3)");
    }
}
