use thiserror::Error;

/// The coefficients of a cubic polynomial `a·x³ + b·x² + c·x + d`.
///
/// All four coefficients are guaranteed finite; [`Cubic::new`] rejects
/// `NaN` and infinities at construction time, so downstream math never
/// has to re-check. A zero leading coefficient is allowed here — the
/// equation is then not cubic, and [`Cubic::real_roots`] reports an
/// empty root set for it.
///
/// # Examples
/// ```
/// use cubica_core::Cubic;
///
/// let cubic = Cubic::new(1.0, -6.0, 11.0, -6.0).unwrap();
/// assert_eq!(cubic.evaluate(2.0), 0.0);
/// assert_eq!(cubic.discriminant(), 4.0);
///
/// assert!(Cubic::new(f64::NAN, 0.0, 0.0, 0.0).is_err());
/// ```
///
/// [`Cubic::real_roots`]: crate::Cubic::real_roots
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cubic {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Cubic {
    /// Creates a `Cubic` from the coefficients of `a·x³ + b·x² + c·x + d`.
    ///
    /// # Errors
    ///
    /// Returns [`CubicError::NonFinite`] if any coefficient is `NaN` or
    /// infinite.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, CubicError> {
        for (name, value) in [("a", a), ("b", b), ("c", c), ("d", d)] {
            if !value.is_finite() {
                return Err(CubicError::NonFinite { name, value });
            }
        }
        Ok(Self { a, b, c, d })
    }

    /// The leading (cubic) coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The quadratic coefficient.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The linear coefficient.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The constant term.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Full-precision curve value, used internally and for sampling.
    pub(crate) fn value_at(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Evaluates the polynomial at `x`, rounded to the nearest tenth.
    ///
    /// For a reported root this is its residual y-value, which should
    /// round to approximately zero.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        round_tenth(self.value_at(x))
    }

    /// The depressed-cubic parameter `p = (3ac − b²) / (3a²)`, rounded to
    /// the nearest tenth.
    ///
    /// Meaningful only when `a` is nonzero.
    #[must_use]
    pub fn depressed_p(&self) -> f64 {
        let Self { a, b, c, .. } = *self;
        round_tenth((3.0 * a * c - b * b) / (3.0 * a * a))
    }

    /// The depressed-cubic parameter `q = (27a²d − 9abc + 2b³) / (27a³)`,
    /// rounded to the nearest tenth.
    ///
    /// Meaningful only when `a` is nonzero.
    #[must_use]
    pub fn depressed_q(&self) -> f64 {
        let Self { a, b, c, d } = *self;
        round_tenth((27.0 * a * a * d - 9.0 * a * b * c + 2.0 * b.powi(3)) / (27.0 * a.powi(3)))
    }

    /// The classical cubic discriminant
    /// `18abcd − 4b³d + b²c² − 4ac³ − 27a²d²`, rounded to the nearest tenth.
    ///
    /// Its sign classifies the roots: positive means three distinct real
    /// roots, negative means one real root, zero means a repeated root.
    /// This is a different quantity from the internal case selector used
    /// by [`Cubic::real_roots`] and is exposed for display and
    /// cross-checking.
    ///
    /// [`Cubic::real_roots`]: crate::Cubic::real_roots
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        let Self { a, b, c, d } = *self;
        round_tenth(
            18.0 * a * b * c * d - 4.0 * b.powi(3) * d + b * b * c * c
                - 4.0 * a * c.powi(3)
                - 27.0 * a * a * d * d,
        )
    }

    /// Samples the curve at `count` evenly spaced points over
    /// `[x_min, x_max]`, endpoints included.
    ///
    /// Samples are full precision, ready to hand to a plotting layer as
    /// `[x, y]` pairs. Returns an empty vec if the range is empty or
    /// `count` is zero.
    #[must_use]
    pub fn sample(&self, x_min: f64, x_max: f64, count: usize) -> Vec<[f64; 2]> {
        if count == 0 || x_min >= x_max {
            return Vec::new();
        }
        if count == 1 {
            return vec![[x_min, self.value_at(x_min)]];
        }

        let step = (x_max - x_min) / (count - 1) as f64;
        (0..count)
            .map(|i| {
                let x = x_min + step * i as f64;
                [x, self.value_at(x)]
            })
            .collect()
    }
}

impl TryFrom<[f64; 4]> for Cubic {
    type Error = CubicError;

    fn try_from([a, b, c, d]: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(a, b, c, d)
    }
}

/// Errors from constructing a [`Cubic`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CubicError {
    #[error("coefficient `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Rounds to the nearest tenth, the crate's declared display precision.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_non_finite_coefficients() {
        let cases = [
            ("a", Cubic::new(f64::NAN, 0.0, 0.0, 0.0)),
            ("b", Cubic::new(1.0, f64::INFINITY, 0.0, 0.0)),
            ("c", Cubic::new(1.0, 0.0, f64::NEG_INFINITY, 0.0)),
            ("d", Cubic::new(1.0, 0.0, 0.0, f64::NAN)),
        ];
        for (expected_name, result) in cases {
            match result {
                Err(CubicError::NonFinite { name, .. }) => assert_eq!(name, expected_name),
                Ok(_) => panic!("expected a non-finite error for `{expected_name}`"),
            }
        }
    }

    #[test]
    fn allows_zero_leading_coefficient() {
        let cubic = Cubic::new(0.0, 1.0, 2.0, 3.0).unwrap();
        assert_eq!(cubic.a(), 0.0);
    }

    #[test]
    fn try_from_array() {
        let cubic = Cubic::try_from([1.0, -6.0, 11.0, -6.0]).unwrap();
        assert_eq!(cubic, Cubic::new(1.0, -6.0, 11.0, -6.0).unwrap());

        assert!(Cubic::try_from([1.0, f64::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn evaluates_at_exact_roots() {
        let cubic = Cubic::new(1.0, -6.0, 11.0, -6.0).unwrap();
        assert_eq!(cubic.evaluate(1.0), 0.0);
        assert_eq!(cubic.evaluate(2.0), 0.0);
        assert_eq!(cubic.evaluate(3.0), 0.0);
    }

    #[test]
    fn evaluate_rounds_to_nearest_tenth() {
        let cubic = Cubic::new(1.0, -6.0, 11.0, -6.0).unwrap();
        // Exact value at 0.5 is -1.875.
        assert_eq!(cubic.evaluate(0.5), -1.9);
    }

    #[test]
    fn depressed_parameters() {
        // x³ - 6x² + 11x - 6 depresses to t³ - t.
        let cubic = Cubic::new(1.0, -6.0, 11.0, -6.0).unwrap();
        assert_eq!(cubic.depressed_p(), -1.0);
        assert_eq!(cubic.depressed_q(), 0.0);

        // An already-depressed cubic keeps its own coefficients.
        let depressed = Cubic::new(1.0, 0.0, -7.0, 6.0).unwrap();
        assert_eq!(depressed.depressed_p(), -7.0);
        assert_eq!(depressed.depressed_q(), 6.0);
    }

    #[test]
    fn discriminant_sign_classifies_roots() {
        // Three distinct real roots: positive.
        let three = Cubic::new(1.0, -6.0, 11.0, -6.0).unwrap();
        assert_eq!(three.discriminant(), 4.0);

        // One real root: negative.
        let one = Cubic::new(1.0, 0.0, 0.0, -8.0).unwrap();
        assert!(one.discriminant() < 0.0);

        // Triple root: zero.
        let triple = Cubic::new(1.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(triple.discriminant(), 0.0);
    }

    #[test]
    fn sample_covers_the_range() {
        let cubic = Cubic::new(1.0, 0.0, 0.0, 0.0).unwrap();
        let points = cubic.sample(-2.0, 2.0, 5);

        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[0][0], -2.0);
        assert_relative_eq!(points[0][1], -8.0);
        assert_relative_eq!(points[2][0], 0.0);
        assert_relative_eq!(points[4][0], 2.0);
        assert_relative_eq!(points[4][1], 8.0);
    }

    #[test]
    fn sample_is_full_precision() {
        let cubic = Cubic::new(1.0, -6.0, 11.0, -6.0).unwrap();
        let points = cubic.sample(0.5, 1.5, 2);
        // Unrounded, unlike `evaluate`.
        assert_relative_eq!(points[0][1], -1.875);
    }

    #[test]
    fn sample_degenerate_inputs() {
        let cubic = Cubic::new(1.0, 0.0, 0.0, 0.0).unwrap();

        assert!(cubic.sample(-1.0, 1.0, 0).is_empty());
        assert!(cubic.sample(1.0, 1.0, 10).is_empty());
        assert!(cubic.sample(1.0, -1.0, 10).is_empty());

        let single = cubic.sample(3.0, 4.0, 1);
        assert_eq!(single, vec![[3.0, 27.0]]);
    }
}
