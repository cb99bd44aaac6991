//! Conversions between domain values and normalized track positions.
//!
//! A [`DomainRange`] is everything needed to map a value in `[min, max]` to a
//! fraction of the track and back. Quantization rounds to the nearest step
//! with ties resolved away from zero (`f64::round`), then fixes the result to
//! the range's decimal precision so repeated conversions never accumulate
//! floating-point drift.

/// Minimum used when the host has no usable `min` attribute.
pub const DEFAULT_MIN: f64 = 0.0;
/// Maximum used when the host has no usable `max` attribute.
pub const DEFAULT_MAX: f64 = 100.0;
/// Step used when the host has no usable `step` attribute.
pub const DEFAULT_STEP: f64 = 1.0;

/// Precision beyond this cannot be represented by an `f64` anyway.
const MAX_PRECISION: u32 = 15;

/// Returns `lo` if `x < lo`, `hi` if `x > hi`, else `x`.
///
/// Unlike [`f64::clamp`] this never panics when `lo > hi`; the lower bound
/// wins, which is what a degenerate range needs.
pub fn cap(x: f64, lo: f64, hi: f64) -> f64 {
    let x = if x > hi { hi } else { x };
    if x < lo { lo } else { x }
}

/// Parses a numeric attribute, rejecting anything that is not a finite number.
pub fn parse_number(text: Option<&str>) -> Option<f64> {
    text.map(str::trim)
        .and_then(|t| t.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Number of fractional digits implied by the textual form of a number.
///
/// Exponent notation is honoured, so `"1e-3"` has three digits and `"2.5e1"`
/// has none.
///
/// ```
/// use rangeslider::range::decimal_precision;
///
/// assert_eq!(decimal_precision("1"), 0);
/// assert_eq!(decimal_precision("0.25"), 2);
/// assert_eq!(decimal_precision("1e-3"), 3);
/// assert_eq!(decimal_precision("2.5e1"), 0);
/// ```
pub fn decimal_precision(text: &str) -> u32 {
    let text = text.trim();
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(idx) => (&text[..idx], text[idx + 1..].parse::<i64>().unwrap_or(0)),
        None => (text, 0),
    };
    let fraction_digits = mantissa
        .split_once('.')
        .map(|(_, frac)| frac.len() as i64)
        .unwrap_or(0);
    fraction_digits
        .saturating_sub(exponent)
        .clamp(0, MAX_PRECISION as i64) as u32
}

/// The `{min, max, step}` constraints of a slider plus the derived precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainRange {
    min: f64,
    max: f64,
    step: f64,
    precision: u32,
}

impl Default for DomainRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN, DEFAULT_MAX, DEFAULT_STEP)
    }
}

impl DomainRange {
    /// Creates a range from already parsed numbers.
    ///
    /// A step that is not a positive finite number falls back to
    /// [`DEFAULT_STEP`]. Precision is derived from the shortest textual form of
    /// `step` and `min`.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let step = sanitize_step(step);
        let precision =
            decimal_precision(&step.to_string()).max(decimal_precision(&min.to_string()));
        Self {
            min,
            max,
            step,
            precision,
        }
    }

    /// Creates a range from raw attribute text, falling back to the defaults
    /// for anything missing or malformed.
    pub fn from_attributes(min: Option<&str>, max: Option<&str>, step: Option<&str>) -> Self {
        let min_value = parse_number(min).unwrap_or(DEFAULT_MIN);
        let max_value = parse_number(max).unwrap_or(DEFAULT_MAX);
        let step_value = parse_number(step).filter(|s| *s > 0.0);

        let step_digits = match (step, step_value) {
            (Some(text), Some(_)) => decimal_precision(text),
            _ => 0,
        };
        let min_digits = match (min, parse_number(min)) {
            (Some(text), Some(_)) => decimal_precision(text),
            _ => 0,
        };

        Self {
            min: min_value,
            max: max_value,
            step: step_value.unwrap_or(DEFAULT_STEP),
            precision: step_digits.max(min_digits),
        }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step size, always positive.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Fractional digits values are rounded to.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `max <= min`, in which case every position maps to `min`.
    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0
    }

    /// The value a host without a `value` attribute starts at.
    pub fn midpoint(&self) -> f64 {
        self.min + self.span() / 2.0
    }

    /// `(value - min) / (max - min)`; zero for a degenerate range.
    ///
    /// The result is not clamped, values outside the range map outside
    /// `[0, 1]`.
    pub fn value_to_position(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let position = (value - self.min) / self.span();
        if position.is_finite() { position } else { 0.0 }
    }

    /// Maps a normalized position to a step-aligned value within `[min, max]`.
    ///
    /// ```
    /// use rangeslider::range::DomainRange;
    ///
    /// let range = DomainRange::new(0.0, 10.0, 5.0);
    /// assert_eq!(range.position_to_value(0.7), 5.0);
    /// assert_eq!(range.position_to_value(0.75), 10.0);
    /// assert_eq!(range.position_to_value(3.0), 10.0);
    /// ```
    pub fn position_to_value(&self, position: f64) -> f64 {
        if self.is_degenerate() {
            return self.min;
        }
        let position = if position.is_nan() {
            0.0
        } else {
            cap(position, 0.0, 1.0)
        };
        let steps = (position * self.span() / self.step).round();
        let value = self.round_to_precision(steps * self.step + self.min);
        cap(value, self.min, self.max)
    }

    /// Snaps an arbitrary value onto the step grid inside the range.
    pub fn quantize(&self, value: f64) -> f64 {
        self.position_to_value(self.value_to_position(value))
    }

    /// Rounds to [`precision`](Self::precision) fractional digits.
    pub fn round_to_precision(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.precision as i32);
        let rounded = (value * factor).round() / factor;
        if rounded.is_finite() { rounded } else { value }
    }
}

fn sanitize_step(step: f64) -> f64 {
    if step.is_finite() && step > 0.0 {
        step
    } else {
        DEFAULT_STEP
    }
}
