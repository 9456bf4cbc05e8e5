//! Donut and pie charts.

use crate::caption::CaptionSplit;
use crate::chart::{ChartKind, ChartLayout, Frame};
use crate::entry::Entry;
use crate::options::DonutLabelMode;
use glance_core::{Brush, Path};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Angle of the first sector's leading edge: straight up.
pub const DONUT_START_ANGLE: f32 = -FRAC_PI_2;

/// Annular sectors, one per entry, sized by `|value|`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutLayout {
    /// Hole radius as a fraction of the outer radius; 0 draws a pie
    pub hole_radius: f32,
    /// Which caption columns are drawn
    pub label_mode: DonutLabelMode,
    /// Split captions by entry count instead of by cumulative value
    pub split_by_count: bool,
}

impl Default for DonutLayout {
    fn default() -> Self {
        Self {
            hole_radius: 0.5,
            label_mode: DonutLabelMode::LeftAndRight,
            split_by_count: false,
        }
    }
}

impl DonutLayout {
    /// Pie layout: a donut without a hole.
    #[must_use]
    pub fn pie() -> Self {
        Self {
            hole_radius: 0.0,
            ..Self::default()
        }
    }

    /// Set the hole radius fraction.
    #[must_use]
    pub const fn with_hole_radius(mut self, hole_radius: f32) -> Self {
        self.hole_radius = hole_radius;
        self
    }

    /// Set the caption mode.
    #[must_use]
    pub const fn with_label_mode(mut self, mode: DonutLabelMode) -> Self {
        self.label_mode = mode;
        self
    }
}

/// Fractions of the full turn covered by each entry: `[start, end)`.
///
/// Entries without a value get `None`. Returns an empty list when the sum of
/// absolute values is zero.
#[must_use]
pub fn sector_fractions(entries: &[Entry]) -> Vec<Option<(f32, f32)>> {
    let sum: f32 = entries.iter().filter_map(Entry::value).map(f32::abs).sum();
    if sum <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    entries
        .iter()
        .map(|e| {
            let v = e.value()?;
            let end = start + v.abs() / sum;
            let span = (start, end);
            start = end;
            Some(span)
        })
        .collect()
}

impl ChartLayout for DonutLayout {
    fn kind(&self) -> ChartKind {
        if self.hole_radius <= 0.0 {
            ChartKind::Pie
        } else {
            ChartKind::Donut
        }
    }

    fn draw_content(&self, frame: &mut Frame<'_>) {
        let entries = frame.data.entries();
        let fractions = sector_fractions(entries);
        if fractions.is_empty() {
            return;
        }

        let mut area = frame.area();
        let captioned: Vec<&Entry> = entries.iter().filter(|e| e.value().is_some()).collect();
        let split = match self.label_mode {
            DonutLabelMode::None => CaptionSplit::default(),
            DonutLabelMode::RightOnly => CaptionSplit::right_only(&captioned),
            DonutLabelMode::LeftAndRight if self.split_by_count => CaptionSplit::by_count(&captioned),
            DonutLabelMode::LeftAndRight => CaptionSplit::by_value(&captioned),
        };
        split.draw(frame, &mut area);

        let margin = frame.options.margin;
        let outer = ((area.width.min(area.height) - 2.0 * margin) / 2.0).max(0.0);
        let inner = outer * self.hole_radius.clamp(0.0, 1.0);
        let center = area.center();
        let progress = frame.progress;

        for (entry, span) in entries.iter().zip(&fractions) {
            let Some((start, end)) = *span else {
                continue;
            };
            let path = Path::sector(center, start * progress, end * progress, outer, inner, DONUT_START_ANGLE);
            if !path.is_empty() {
                frame.canvas.fill_path(&path, &Brush::Solid(entry.color));
            }
        }
    }
}
