//! Nice-scale axis ticks.
//!
//! Rounds an arbitrary value range outward to tick boundaries that are
//! `{1, 2, 5} x 10^k` multiples.

/// Tick layout for a value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiceScale {
    /// Lowest tick, `<=` the requested minimum
    pub nice_min: f32,
    /// Highest tick, `>=` the requested maximum
    pub nice_max: f32,
    /// Distance between ticks
    pub tick_spacing: f32,
}

impl NiceScale {
    /// Compute a nice scale for `[min, max]` with at most about `max_ticks`
    /// ticks.
    ///
    /// A zero-width range is widened by one unit on each side, and
    /// `max_ticks` below 2 is treated as 2.
    #[must_use]
    pub fn calculate(min: f32, max: f32, max_ticks: usize) -> Self {
        let (mut min, mut max) = if min <= max { (min, max) } else { (max, min) };
        if (max - min).abs() <= f32::EPSILON {
            min -= 1.0;
            max += 1.0;
        }
        let max_ticks = max_ticks.max(2);

        let range = nice_number(max - min, false);
        let tick_spacing = nice_number(range / (max_ticks - 1) as f32, true);
        Self {
            nice_min: (min / tick_spacing).floor() * tick_spacing,
            nice_max: (max / tick_spacing).ceil() * tick_spacing,
            tick_spacing,
        }
    }

    /// Number of ticks from `nice_min` to `nice_max` inclusive.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        ((self.nice_max - self.nice_min) / self.tick_spacing).round() as usize + 1
    }

    /// Tick values from `nice_min` upward.
    pub fn ticks(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.tick_count()).map(|i| (i as f32).mul_add(self.tick_spacing, self.nice_min))
    }

    /// Decimal places needed to print ticks at this spacing.
    #[must_use]
    pub fn decimals(&self) -> usize {
        decimals_for(self.tick_spacing)
    }
}

/// Round `range` to a nice number.
///
/// With `round` the fraction is thresholded at `{1.5, 3, 7}`; without it
/// the smallest of `{1, 2, 5, 10}` not below the fraction is taken.
fn nice_number(range: f32, round: bool) -> f32 {
    let exponent = range.log10().floor();
    let power = 10f32.powi(exponent as i32);
    let fraction = range / power;

    let nice = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * power
}

fn decimals_for(spacing: f32) -> usize {
    if spacing <= 0.0 || !spacing.is_finite() {
        return 0;
    }
    let exponent = spacing.log10().floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}

/// Format an axis tick with the decimals implied by `spacing`.
#[must_use]
pub fn format_tick(value: f32, spacing: f32) -> String {
    let decimals = decimals_for(spacing);
    // Avoid printing "-0"
    let value = if value.abs() < spacing.abs() * 1e-3 { 0.0 } else { value };
    format!("{value:.decimals$}")
}
