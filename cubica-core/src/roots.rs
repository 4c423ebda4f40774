use std::slice;

use crate::cubic::{Cubic, round_tenth};

/// The real roots of a cubic equation.
///
/// A cubic with a nonzero leading coefficient always has one or three
/// real roots, counted with multiplicity; the degenerate `a = 0` input
/// has none under this crate's contract. The 0/1/3 cardinality lives in
/// the type so consumers never see a two-element root set: a triple
/// root is reported as three equal entries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Roots {
    /// No real roots reported (the equation was not cubic).
    None,
    /// A single real root; the other two are complex conjugates.
    One(f64),
    /// Three real roots, possibly repeated. The order is a display
    /// convention, not a ranking.
    Three([f64; 3]),
}

impl Roots {
    /// The roots as a slice, in reporting order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::None => &[],
            Self::One(root) => slice::from_ref(root),
            Self::Three(roots) => roots,
        }
    }

    /// Number of reported roots: 0, 1, or 3.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Iterates over the roots in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().iter().copied()
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Cubic {
    /// Finds the real roots using Cardano's closed-form method.
    ///
    /// The depressed-cubic parameters `p` and `q` select among three
    /// cases via `h = q²/4 + p³/27`:
    ///
    /// - `h > 0`: one real root (the other two are complex conjugates),
    /// - `p = q = 0`: a triple root at `−cbrt(d/a)`,
    /// - otherwise: three real roots via the trigonometric form. The
    ///   `h = 0` double-root boundary falls through here and reports a
    ///   repeated value among the three entries.
    ///
    /// Roots are rounded to the nearest tenth. A zero leading
    /// coefficient yields [`Roots::None`].
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn real_roots(&self) -> Roots {
        let (a, b, c, d) = (self.a(), self.b(), self.c(), self.d());
        if a == 0.0 {
            return Roots::None;
        }

        // Full-precision depressed parameters; the rounded `depressed_p`
        // and `depressed_q` accessors are display values only.
        let p = (3.0 * a * c - b * b) / (3.0 * a * a);
        let q = (2.0 * b.powi(3) - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a.powi(3));
        let h = q * q / 4.0 + p.powi(3) / 27.0;

        // Undoes the depressing substitution x = t − b/(3a).
        let shift = -b / (3.0 * a);

        if h > 0.0 {
            let s = (-q / 2.0 + h.sqrt()).cbrt();
            let u = (-q / 2.0 - h.sqrt()).cbrt();
            Roots::One(round_tenth(s + u + shift))
        } else if p == 0.0 && q == 0.0 {
            let root = round_tenth(-(d / a).cbrt());
            Roots::Three([root, root, root])
        } else {
            let i = (q * q / 4.0 - h).sqrt();
            let j = i.cbrt();
            let k = (-q / (2.0 * i)).acos();
            let (sin_k3, cos_k3) = (k / 3.0).sin_cos();
            let sqrt3 = 3.0_f64.sqrt();
            Roots::Three([
                round_tenth(2.0 * j * cos_k3 + shift),
                round_tenth(-j * (cos_k3 + sqrt3 * sin_k3) + shift),
                round_tenth(-j * (cos_k3 - sqrt3 * sin_k3) + shift),
            ])
        }
    }
}
