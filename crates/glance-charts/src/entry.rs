//! Chart data: entries and named series.

use glance_core::Color;
use serde::{Deserialize, Serialize};

/// One labeled data point.
///
/// The value is fixed at construction; a missing value is a gap that
/// layouts skip while keeping the entry's slot. Display metadata can be
/// changed freely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    value: Option<f32>,
    start_value: Option<f32>,
    /// Caption / axis label
    pub label: Option<String>,
    /// Formatted value shown next to the element
    pub value_label: Option<String>,
    /// Fill color
    pub color: Color,
    /// Color of the negative segment of a zero-crossing range bar
    pub lower_color: Option<Color>,
    /// Color of the value label; defaults to `color`
    pub value_label_color: Option<Color>,
    /// Color of the label text
    pub text_color: Color,
}

impl Entry {
    /// Entry with a value.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Entry without a value (a gap).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Entry spanning `[start, value]`, drawn by range bars.
    #[must_use]
    pub fn range(start: Option<f32>, value: Option<f32>) -> Self {
        Self {
            value,
            start_value: start,
            ..Self::default()
        }
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the value label.
    #[must_use]
    pub fn with_value_label(mut self, value_label: impl Into<String>) -> Self {
        self.value_label = Some(value_label.into());
        self
    }

    /// Set the fill color.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the lower (negative segment) color.
    #[must_use]
    pub const fn with_lower_color(mut self, color: Color) -> Self {
        self.lower_color = Some(color);
        self
    }

    /// Set the value label color.
    #[must_use]
    pub const fn with_value_label_color(mut self, color: Color) -> Self {
        self.value_label_color = Some(color);
        self
    }

    /// Set the label text color.
    #[must_use]
    pub const fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// The value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<f32> {
        self.value
    }

    /// The range start, if any.
    #[must_use]
    pub const fn start_value(&self) -> Option<f32> {
        self.start_value
    }

    /// Effective value-label color.
    #[must_use]
    pub fn value_label_color(&self) -> Color {
        self.value_label_color.unwrap_or(self.color)
    }

    /// Effective lower-segment color.
    #[must_use]
    pub fn lower_color(&self) -> Color {
        self.lower_color.unwrap_or(self.color)
    }

    /// Label, or `None` when absent or empty.
    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref().filter(|s| !s.is_empty())
    }

    /// Value label, or `None` when absent or empty.
    #[must_use]
    pub fn value_label_text(&self) -> Option<&str> {
        self.value_label.as_deref().filter(|s| !s.is_empty())
    }

    /// Values this entry contributes to the chart's value range.
    pub(crate) fn range_values(&self) -> impl Iterator<Item = f32> {
        self.value.into_iter().chain(self.start_value)
    }

    /// Key aligning this entry with entries of other series.
    pub(crate) fn key(&self, index: usize) -> EntryKey {
        self.label_text()
            .map_or(EntryKey::Index(index), |label| EntryKey::Label(label.to_string()))
    }
}

/// Positional key used to align entries across series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum EntryKey {
    /// Entries with a label align by label
    Label(String),
    /// Unlabeled entries align by position
    Index(usize),
}

/// A named, optionally colored group of entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Series {
    /// Series name, shown in legends
    pub name: String,
    /// Color overriding the entries' own colors
    pub color: Option<Color>,
    /// Entries in positional order
    pub entries: Vec<Entry>,
}

impl Series {
    /// Create a series.
    #[must_use]
    pub fn new(name: impl Into<String>, entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            name: name.into(),
            color: None,
            entries: entries.into_iter().collect(),
        }
    }

    /// Set the series color.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Color used for `entry` when drawn as part of this series.
    #[must_use]
    pub fn entry_color(&self, entry: &Entry) -> Color {
        self.color.unwrap_or(entry.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_builders() {
        let e = Entry::new(12.5)
            .with_label("Jan")
            .with_value_label("12.5")
            .with_color(Color::WHITE);
        assert_eq!(e.value(), Some(12.5));
        assert_eq!(e.label_text(), Some("Jan"));
        assert_eq!(e.value_label_text(), Some("12.5"));
        assert_eq!(e.value_label_color(), Color::WHITE);
        assert_eq!(e.lower_color(), Color::WHITE);
    }

    #[test]
    fn test_entry_empty_label_is_absent() {
        let e = Entry::new(1.0).with_label("");
        assert!(e.label_text().is_none());
    }

    #[test]
    fn test_entry_gap() {
        let e = Entry::empty();
        assert!(e.value().is_none());
        assert_eq!(e.range_values().count(), 0);
    }

    #[test]
    fn test_range_entry_contributes_both_ends() {
        let e = Entry::range(Some(-5.0), Some(10.0));
        let values: Vec<f32> = e.range_values().collect();
        assert_eq!(values, vec![10.0, -5.0]);
    }

    #[test]
    fn test_entry_key() {
        assert_eq!(
            Entry::new(1.0).with_label("a").key(3),
            EntryKey::Label("a".into())
        );
        assert_eq!(Entry::new(1.0).key(3), EntryKey::Index(3));
    }

    #[test]
    fn test_series_color_overrides_entry() {
        let entry = Entry::new(1.0).with_color(Color::WHITE);
        let plain = Series::new("a", vec![entry.clone()]);
        let colored = Series::new("b", vec![entry.clone()]).with_color(Color::GRAY);
        assert_eq!(plain.entry_color(&entry), Color::WHITE);
        assert_eq!(colored.entry_color(&entry), Color::GRAY);
    }

    #[test]
    fn test_entry_deserializes_with_defaults() {
        let e: Entry = serde_json::from_str(r##"{"value": 3.0, "color": "#ff0000"}"##).unwrap();
        assert_eq!(e.value(), Some(3.0));
        assert!(e.label.is_none());
        assert_eq!(e.color.r, 1.0);
    }
}
