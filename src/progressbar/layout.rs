//! Section layout: divider marks and tick labels.

/// Most sections a bar derives; larger counts are capped here.
pub const MAX_SECTIONS: usize = 1000;

/// Clamps a configured section count into `[1, MAX_SECTIONS]`.
pub fn clamp_sections(sections: i64) -> usize {
    usize::try_from(sections.max(1))
        .unwrap_or(MAX_SECTIONS)
        .min(MAX_SECTIONS)
}

/// The ordered section indices `0..sections`.
pub fn section_indices(sections: usize) -> Vec<usize> {
    (0..sections).collect()
}

/// Derived section list, recomputed only when the section count changes.
///
/// # Examples
///
/// ```rust
/// use bubbletea_progressbar::progressbar::Sections;
///
/// let sections = Sections::new(3);
/// assert_eq!(sections.dividers().count(), 2);
/// assert_eq!(sections.tick_values(90.0), vec![0.0, 30.0, 60.0, 90.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    count: usize,
    indices: Vec<usize>,
}

impl Sections {
    /// Builds the section list for a configured count (clamped to at least one).
    pub fn new(sections: i64) -> Self {
        let count = clamp_sections(sections);
        Self {
            count,
            indices: section_indices(count),
        }
    }

    /// Recomputes the indices if the clamped count differs from the current one.
    ///
    /// Returns whether anything was recomputed.
    pub fn sync(&mut self, sections: i64) -> bool {
        let count = clamp_sections(sections);
        if count == self.count {
            return false;
        }
        self.count = count;
        self.indices = section_indices(count);
        true
    }

    /// Number of sections after clamping.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Section indices in order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Indices that end with a divider mark: all but the last.
    pub fn dividers(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied().filter(move |&i| i + 1 < self.count)
    }

    /// Tick values: `round(max / sections * i)` per index, then `max` itself.
    pub fn tick_values(&self, max_value: f64) -> Vec<f64> {
        let step = max_value / self.count as f64;
        self.indices
            .iter()
            .map(|&i| (step * i as f64).round())
            .chain(std::iter::once(max_value))
            .collect()
    }

    /// Tick labels as displayed under the bar.
    pub fn tick_labels(&self, max_value: f64) -> Vec<String> {
        self.tick_values(max_value)
            .into_iter()
            .map(format_number)
            .collect()
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Shortest decimal form of a number: `90`, `12.5`.
pub(crate) fn format_number(n: f64) -> String {
    if n == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", n)
}
