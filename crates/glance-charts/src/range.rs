//! Value-range resolution.

/// Effective value bounds of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueBounds {
    /// Lower bound
    pub min: f32,
    /// Upper bound
    pub max: f32,
}

impl ValueBounds {
    /// Create bounds directly.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Resolve bounds from entry values and optional overrides.
    ///
    /// `has_entries` distinguishes an empty chart (bounds collapse to 0)
    /// from a chart whose entries are all gaps. Without an override the
    /// data bound is widened to include zero; with one, the result is the
    /// wider of override and data.
    #[must_use]
    pub fn resolve(
        has_entries: bool,
        values: impl IntoIterator<Item = f32>,
        min_override: Option<f32>,
        max_override: Option<f32>,
    ) -> Self {
        if !has_entries {
            return Self::default();
        }

        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((None, None), |(lo, hi): (Option<f32>, Option<f32>), v| {
                (
                    Some(lo.map_or(v, |l| l.min(v))),
                    Some(hi.map_or(v, |h| h.max(v))),
                )
            });

        let min = match (min_override, lo) {
            (Some(o), Some(l)) => o.min(l),
            (Some(o), None) => o,
            (None, Some(l)) => l.min(0.0),
            (None, None) => 0.0,
        };
        let max = match (max_override, hi) {
            (Some(o), Some(h)) => o.max(h),
            (Some(o), None) => o,
            (None, Some(h)) => h.max(0.0),
            (None, None) => 0.0,
        };
        Self { min, max }
    }

    /// `max - min`.
    #[must_use]
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// Whether the range is zero and must not be divided by.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.range().abs() <= f32::EPSILON
    }
}

/// Bounds over absolute values, used by radial and radar layouts.
///
/// Both ends are taken over `|value|` of every entry unioned with the
/// magnitudes of the chart's signed bounds, so a value and its negation
/// land at the same distance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AbsoluteBounds {
    /// Smallest magnitude
    pub min: f32,
    /// Largest magnitude
    pub max: f32,
}

impl AbsoluteBounds {
    /// Compute from entry values and the signed chart bounds.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f32>, bounds: ValueBounds) -> Self {
        let (min, max) = values
            .into_iter()
            .chain([bounds.max, bounds.min])
            .map(f32::abs)
            .filter(|v| v.is_finite())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        Self { min, max }
    }

    /// `max - min`.
    #[must_use]
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// Position of `|value|` between the bounds, in [0, 1].
    ///
    /// A degenerate range maps every non-zero magnitude to 1.
    #[must_use]
    pub fn magnitude_fraction(&self, value: f32) -> f32 {
        let range = self.range();
        if range <= f32::EPSILON {
            return if value.abs() > 0.0 { 1.0 } else { 0.0 };
        }
        ((value.abs() - self.min) / range).clamp(0.0, 1.0)
    }

    /// `|value - min| / range`, the radar distance fraction.
    #[must_use]
    pub fn distance_fraction(&self, value: f32) -> f32 {
        let range = self.range();
        if range <= f32::EPSILON {
            return if value.abs() > 0.0 { 1.0 } else { 0.0 };
        }
        ((value - self.min).abs() / range).min(1.0)
    }
}
