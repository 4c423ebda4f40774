//! Closed-form analysis of cubic polynomials.
//!
//! The entry point is [`Cubic`], an immutable set of four finite
//! coefficients for `a·x³ + b·x² + c·x + d`. From a `Cubic` you can:
//!
//! - find its real roots with [`Cubic::real_roots`] (Cardano's method),
//! - read the depressed-cubic parameters and the classical discriminant,
//! - bundle everything a display layer needs with [`Cubic::analyze`],
//! - sample the curve for plotting with [`Cubic::sample`].
//!
//! Every reported quantity is rounded to the nearest tenth, the declared
//! display precision of this crate. Curve samples are the one exception:
//! they feed a renderer directly and stay at full precision.
//!
//! All operations are pure and total over finite inputs. The only
//! degenerate case, a zero leading coefficient, yields an empty root set
//! rather than an error.

mod analysis;
mod cubic;
mod roots;

pub use analysis::{Analysis, RootPoint};
pub use cubic::{Cubic, CubicError};
pub use roots::Roots;
