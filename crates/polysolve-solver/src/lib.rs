//! Closed-form solving for reduced polynomial equations of degree 0, 1 or 2.

use num_complex::Complex64;
use polysolve_parser::{format_number, Equation};
use serde::{Deserialize, Serialize};

/// Convergence bound for the Newton square-root iteration.
pub const SQRT_TOLERANCE: f64 = 1e-6;

/// What solving produced, carrying exactly the fields relevant to the case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every real number satisfies the equation.
    AllReals,
    /// A non-zero constant equals zero.
    NoSolution,
    /// Unique root of a linear equation.
    Single { root: f64 },
    /// Double root of a quadratic whose discriminant is zero.
    Double { root: f64, discriminant: f64 },
    /// Two real roots, '+' branch first.
    RealPair {
        first: f64,
        second: f64,
        discriminant: f64,
    },
    /// Two conjugate complex roots, '+' branch first.
    ComplexPair {
        first: Complex64,
        second: Complex64,
        discriminant: f64,
    },
    /// Degree above 2; no closed form attempted.
    Unsolved { degree: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub degree: u32,
    pub reduced_form: String,
    pub outcome: Outcome,
}

impl Outcome {
    /// Status line preceding the root values, when the case has one.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::AllReals => Some("All real numbers are solutions."),
            Outcome::NoSolution => Some("There is no solution."),
            Outcome::Single { .. } => None,
            Outcome::Double { .. } => Some("Discriminant is zero, the solution is:"),
            Outcome::RealPair { .. } => {
                Some("Discriminant is strictly positive, the two solutions are:")
            }
            Outcome::ComplexPair { .. } => {
                Some("Discriminant is strictly negative, the two complex solutions are:")
            }
            Outcome::Unsolved { .. } => {
                Some("The polynomial degree is strictly greater than 2, I can't solve.")
            }
        }
    }

    pub fn discriminant(&self) -> Option<f64> {
        match self {
            Outcome::Double { discriminant, .. }
            | Outcome::RealPair { discriminant, .. }
            | Outcome::ComplexPair { discriminant, .. } => Some(*discriminant),
            _ => None,
        }
    }

    /// Root values rendered for display, '+' branch first. The imaginary
    /// part of a complex pair keeps its own sign; only the joining operator
    /// alternates between the two lines.
    pub fn roots(&self) -> Vec<String> {
        match self {
            Outcome::Single { root } | Outcome::Double { root, .. } => {
                vec![format_number(*root)]
            }
            Outcome::RealPair { first, second, .. } => {
                vec![format_number(*first), format_number(*second)]
            }
            Outcome::ComplexPair { first, .. } => {
                let re = format_number(first.re);
                let im = format_number(first.im);
                vec![format!("{re} + {im}i"), format!("{re} - {im}i")]
            }
            _ => Vec::new(),
        }
    }
}

/// Solve a reduced equation, dispatching on its degree.
///
/// The reported degree and reduced form describe the equation after any
/// internal degree reduction, matching what was actually dispatched on.
pub fn solve(equation: &Equation) -> Solution {
    let mut eq = equation.clone();
    // A quadratic whose leading coefficient vanished re-dispatches as the
    // linear sub-equation built from the remaining terms. The rebuilt
    // equation has degree <= 1, so this runs at most once.
    while eq.degree == 2 && eq.coefficient(2) == 0.0 {
        eq = eq.without_exponent(2);
    }

    let outcome = match eq.degree {
        0 => solve_constant(&eq),
        1 => solve_linear(&eq),
        2 => solve_quadratic(&eq),
        degree => Outcome::Unsolved { degree },
    };

    Solution {
        degree: eq.degree,
        reduced_form: eq.to_string(),
        outcome,
    }
}

fn solve_constant(eq: &Equation) -> Outcome {
    if eq.coefficient(0) != 0.0 {
        Outcome::NoSolution
    } else {
        Outcome::AllReals
    }
}

fn solve_linear(eq: &Equation) -> Outcome {
    let a = eq.coefficient(1);
    let b = eq.coefficient(0);

    if a == 0.0 {
        return if b == 0.0 {
            Outcome::AllReals
        } else {
            Outcome::NoSolution
        };
    }

    Outcome::Single { root: -b / a }
}

fn solve_quadratic(eq: &Equation) -> Outcome {
    let a = eq.coefficient(2);
    let b = eq.coefficient(1);
    let c = eq.coefficient(0);
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        let re = -b / (2.0 * a);
        let im = newton_sqrt(-discriminant) / (2.0 * a);
        Outcome::ComplexPair {
            first: Complex64::new(re, im),
            second: Complex64::new(re, -im),
            discriminant,
        }
    } else if discriminant == 0.0 {
        Outcome::Double {
            root: -b / (2.0 * a),
            discriminant,
        }
    } else {
        let sqrt_discriminant = newton_sqrt(discriminant);
        Outcome::RealPair {
            first: (-b + sqrt_discriminant) / (2.0 * a),
            second: (-b - sqrt_discriminant) / (2.0 * a),
            discriminant,
        }
    }
}

/// Newton-Raphson square root: initial guess `n / 2`, converged when two
/// successive iterates differ by less than [`SQRT_TOLERANCE`]. Zero returns
/// zero immediately; a negative input is solved as the root of its absolute
/// value, the caller attaches the imaginary unit.
pub fn newton_sqrt(n: f64) -> f64 {
    if n == 0.0 {
        return 0.0;
    }
    let n = n.abs();
    let mut x = n / 2.0;
    loop {
        let next = (x + n / x) / 2.0;
        if (next - x).abs() < SQRT_TOLERANCE {
            return next;
        }
        x = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newton_sqrt_zero_short_circuits() {
        assert_eq!(newton_sqrt(0.0), 0.0);
    }

    #[test]
    fn newton_sqrt_perfect_square() {
        assert!((newton_sqrt(16.0) - 4.0).abs() < SQRT_TOLERANCE);
    }

    #[test]
    fn newton_sqrt_irrational() {
        assert!((newton_sqrt(2.0) - std::f64::consts::SQRT_2).abs() < SQRT_TOLERANCE);
    }

    #[test]
    fn newton_sqrt_negative_uses_absolute_value() {
        assert!((newton_sqrt(-9.0) - 3.0).abs() < SQRT_TOLERANCE);
    }

    #[test]
    fn newton_sqrt_starts_from_half() {
        // For n = 4 the guess is 2 and the first iterate repeats it exactly,
        // so convergence is immediate.
        assert_eq!(newton_sqrt(4.0), 2.0);
    }
}
