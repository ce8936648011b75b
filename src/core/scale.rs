use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Upper bound on requested tick counts; larger requests are clamped.
pub const MAX_TICK_COUNT: usize = 1_000;

/// Linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// Y axis plots larger values higher on screen. A zero-width domain is
/// accepted and maps every value onto the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Same range, new domain. Used while an axis animates between domains.
    pub fn with_domain(self, domain: (f64, f64)) -> ChartResult<Self> {
        Self::new(domain, self.range())
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel back to a domain value. Degenerate domains return their only value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// "Nice" tick values (1, 2 or 5 times a power of ten) inside the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        let count = count.min(MAX_TICK_COUNT);
        let Some((first, last, increment)) = tick_spec(lo, hi, count as f64) else {
            return if lo == hi && lo.is_finite() {
                vec![lo]
            } else {
                Vec::new()
            };
        };
        (first..=last)
            .map(|index| {
                let index = index as f64;
                if increment < 0.0 {
                    index / -increment
                } else {
                    index * increment
                }
            })
            .collect()
    }

    /// Distance between consecutive values returned by [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> Option<f64> {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        tick_increment(lo, hi, count.min(MAX_TICK_COUNT) as f64).map(|increment| {
            if increment < 0.0 {
                1.0 / -increment
            } else {
                increment
            }
        })
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Signed increment: positive values are the step itself, negative values
/// are the reciprocal of the step (keeps sub-unit steps exact).
fn tick_increment(start: f64, stop: f64, count: f64) -> Option<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() || start == stop {
        return None;
    }
    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power < 0.0 {
        Some(-10_f64.powf(-power) / factor)
    } else {
        Some(factor * 10_f64.powf(power))
    }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let increment = tick_increment(start, stop, count)?;
    let (mut first, mut last) = if increment < 0.0 {
        let inverse = -increment;
        let mut first = (start * inverse).round();
        let mut last = (stop * inverse).round();
        if first / inverse < start {
            first += 1.0;
        }
        if last / inverse > stop {
            last -= 1.0;
        }
        (first, last)
    } else {
        let mut first = (start / increment).round();
        let mut last = (stop / increment).round();
        if first * increment < start {
            first += 1.0;
        }
        if last * increment > stop {
            last -= 1.0;
        }
        (first, last)
    };
    if last < first {
        if (0.5..2.0).contains(&count) {
            return tick_spec(start, stop, count * 2.0);
        }
        return None;
    }
    first = first.max(i64::MIN as f64);
    last = last.min(i64::MAX as f64);
    Some((first as i64, last as i64, increment))
}

/// Formats a tick value with the precision implied by `step` and thousands separators.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.abs().log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn inverted_range_maps_larger_values_higher() {
        let scale = LinearScale::new((0.0, 10.0), (680.0, 0.0)).expect("scale");
        assert_relative_eq!(scale.map(0.0), 680.0);
        assert_relative_eq!(scale.map(10.0), 0.0);
        assert_relative_eq!(scale.map(2.5), 510.0);
        assert_relative_eq!(scale.invert(510.0), 2.5);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 840.0)).expect("scale");
        assert!(scale.is_degenerate());
        assert_relative_eq!(scale.map(5.0), 420.0);
        assert_relative_eq!(scale.map(-100.0), 420.0);
        assert_eq!(scale.ticks(10), vec![5.0]);
    }

    #[test]
    fn non_finite_domain_is_rejected() {
        assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((0.0, 1.0), (0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn ticks_follow_one_two_five_steps() {
        let scale = LinearScale::new((10.45, 18.9), (0.0, 840.0)).expect("scale");
        assert_eq!(
            scale.ticks(10),
            vec![11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0]
        );
        assert_eq!(scale.tick_step(10), Some(1.0));

        let scale = LinearScale::new((9.6, 15.75), (680.0, 0.0)).expect("scale");
        let ticks = scale.ticks(10);
        assert_relative_eq!(ticks[0], 10.0);
        assert_relative_eq!(*ticks.last().expect("last"), 15.5);
        assert_eq!(scale.tick_step(10), Some(0.5));
    }

    #[test]
    fn oversized_tick_requests_are_clamped() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 840.0)).expect("scale");
        let ticks = scale.ticks(usize::MAX);
        assert!(ticks.len() <= MAX_TICK_COUNT + 1);
        assert_eq!(ticks, scale.ticks(MAX_TICK_COUNT));
        assert_eq!(
            scale.tick_step(usize::MAX),
            scale.tick_step(MAX_TICK_COUNT)
        );
    }

    #[test]
    fn ticks_for_large_values() {
        let scale = LinearScale::new((40_850.0, 73_500.0), (0.0, 840.0)).expect("scale");
        assert_eq!(
            scale.ticks(10),
            vec![45_000.0, 50_000.0, 55_000.0, 60_000.0, 65_000.0, 70_000.0]
        );
    }

    #[test]
    fn tick_format_uses_step_precision_and_grouping() {
        assert_eq!(format_tick(45_000.0, 5_000.0), "45,000");
        assert_eq!(format_tick(12.5, 0.5), "12.5");
        assert_eq!(format_tick(12.0, 0.5), "12.0");
        assert_eq!(format_tick(7.0, 1.0), "7");
        assert_eq!(format_tick(-1_234.0, 2.0), "-1,234");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
    }
}
