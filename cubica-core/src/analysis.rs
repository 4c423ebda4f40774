use crate::{Cubic, Roots};

/// A reported root together with the curve value at it.
///
/// `y` is [`Cubic::evaluate`] at the rounded root, so it is the residual
/// a display table shows: approximately zero, nonzero only through the
/// declared rounding precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootPoint {
    pub x: f64,
    pub y: f64,
}

/// Everything a display layer needs for one cubic: the depressed-cubic
/// parameters, the classical discriminant, the real roots, and the curve
/// value at each root.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Depressed-cubic parameter `p`, rounded.
    pub p: f64,
    /// Depressed-cubic parameter `q`, rounded.
    pub q: f64,
    /// Classical cubic discriminant, rounded.
    pub discriminant: f64,
    /// The real roots, in reporting order.
    pub roots: Roots,
    /// One entry per reported root, in the same order as `roots`.
    pub points: Vec<RootPoint>,
}

impl Cubic {
    /// Solves the cubic and bundles the derived quantities for display.
    #[must_use]
    pub fn analyze(&self) -> Analysis {
        let roots = self.real_roots();
        let points = roots
            .iter()
            .map(|x| RootPoint {
                x,
                y: self.evaluate(x),
            })
            .collect();

        Analysis {
            p: self.depressed_p(),
            q: self.depressed_q(),
            discriminant: self.discriminant(),
            roots,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_the_display_quantities() {
        let cubic = Cubic::new(1.0, -6.0, 11.0, -6.0).unwrap();
        let analysis = cubic.analyze();

        assert_eq!(analysis.p, -1.0);
        assert_eq!(analysis.q, 0.0);
        assert_eq!(analysis.discriminant, 4.0);
        assert_eq!(analysis.roots, cubic.real_roots());
        assert_eq!(analysis.points.len(), 3);

        for (point, root) in analysis.points.iter().zip(analysis.roots.iter()) {
            assert_eq!(point.x, root);
            assert_eq!(point.y, 0.0);
        }
    }

    #[test]
    fn degenerate_cubic_has_an_empty_table() {
        let analysis = Cubic::new(0.0, 1.0, -3.0, 2.0).unwrap().analyze();

        assert_eq!(analysis.roots, Roots::None);
        assert!(analysis.points.is_empty());
    }

    #[test]
    fn single_root_table() {
        let analysis = Cubic::new(1.0, 0.0, 0.0, -8.0).unwrap().analyze();

        assert_eq!(analysis.roots, Roots::One(2.0));
        assert_eq!(analysis.points, vec![RootPoint { x: 2.0, y: 0.0 }]);
        assert!(analysis.discriminant < 0.0);
    }
}
