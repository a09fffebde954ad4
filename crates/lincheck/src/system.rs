//! The linear equation system model and its verification algorithm.

use std::fmt;

use itertools::Itertools;
use lincheck_linalg::{Matrix, Vector};

use crate::input::RealSource;

/// Maximum absolute residual magnitude at which an equation still counts as satisfied.
///
/// The comparison is inclusive: a residual of exactly `EPSILON` satisfies the equation.
pub const EPSILON: f64 = 1e-6;

/// A system of `N` linear equations in `N` unknowns.
///
/// Holds a row-major coefficient matrix (rows are equations, columns are unknowns) and a
/// right-hand-side vector, plus a display label distinguishing instances of different sizes.
/// The system is created all-zero and fully overwritten by [`set_coefficients`]; it never solves
/// itself, [`check`] only verifies a candidate supplied by the caller.
///
/// Size variants are labels, not types: a "2×2 system" and a "3×3 (SLAE) system" are both just
/// `LinearSystem` instances with different `N` and label.
///
/// [`set_coefficients`]: LinearSystem::set_coefficients
/// [`check`]: LinearSystem::check
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<const N: usize> {
    label: String,
    a: Matrix<f64, N, N>,
    b: Vector<f64, N>,
}

impl<const N: usize> LinearSystem<N> {
    /// Creates an all-zero system with the default "N×N" label.
    pub fn new() -> Self {
        Self::labeled(format!("{N}×{N}"))
    }

    /// Creates an all-zero system carrying a custom display label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            a: Matrix::ZERO,
            b: Vector::ZERO,
        }
    }

    /// Creates a system directly from a coefficient matrix and right-hand-side vector.
    pub fn from_parts(a: Matrix<f64, N, N>, b: impl Into<Vector<f64, N>>) -> Self {
        Self {
            a,
            b: b.into(),
            ..Self::new()
        }
    }

    /// The number of equations (and unknowns) in the system.
    pub const fn size(&self) -> usize {
        N
    }

    /// The display label of this instance.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Populates the whole system from `input`, one number at a time.
    ///
    /// Entry order is row-major, coefficients before the right-hand side: for each equation `i`,
    /// first `a[i,1] … a[i,N]`, then `b[i]`. Prompts use 1-based mathematical indices. The matrix
    /// and vector are fully overwritten.
    pub fn set_coefficients<S: RealSource + ?Sized>(&mut self, input: &mut S) -> anyhow::Result<()> {
        for i in 0..N {
            for j in 0..N {
                self.a[(i, j)] = input.read_real(&format!("a[{},{}] = ", i + 1, j + 1))?;
            }
            self.b[i] = input.read_real(&format!("b[{}] = ", i + 1))?;
        }
        log::debug!("{} system configured", self.label);
        Ok(())
    }

    /// Collects the `N` components of a candidate vector from `input`, in index order.
    pub fn read_vector<S: RealSource + ?Sized>(&self, input: &mut S) -> anyhow::Result<Vector<f64, N>> {
        let mut x = Vector::ZERO;
        for i in 0..N {
            x[i] = input.read_real(&format!("x{} = ", i + 1))?;
        }
        log::debug!("read {N}-component candidate vector");
        Ok(x)
    }

    /// Verifies whether `candidate` satisfies every equation of the system.
    ///
    /// A candidate of the wrong length yields [`Verification::SizeMismatch`] without any
    /// arithmetic. Otherwise every equation is evaluated (no short-circuit on the first mismatch)
    /// and the per-equation results are returned for reporting. The aggregate verdict is
    /// available through [`Verification::satisfied`].
    pub fn check(&self, candidate: &[f64]) -> Verification {
        if candidate.len() != N {
            return Verification::SizeMismatch {
                expected: N,
                found: candidate.len(),
            };
        }

        let x = Vector::from_fn(|i| candidate[i]);
        let left = self.a * x;
        let equations = (0..N)
            .map(|i| {
                let eq = EquationCheck {
                    left: left[i],
                    right: self.b[i],
                };
                log::trace!("equation {}: residual {:e}", i + 1, eq.residual());
                eq
            })
            .collect();
        Verification::Checked(equations)
    }
}

impl<const N: usize> Default for LinearSystem<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the system as readable equations, one line per equation, in row order.
impl<const N: usize> fmt::Display for LinearSystem<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..N {
            let terms = (0..N)
                .map(|j| format!("{}*x{}", self.a[(i, j)], j + 1))
                .join(" + ");
            writeln!(f, "{} = {}", terms, self.b[i])?;
        }
        Ok(())
    }
}

/// Outcome of evaluating one equation against a candidate vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationCheck {
    /// Left-hand side under the candidate: `Σ_j a[i,j] * x[j]`.
    pub left: f64,
    /// Right-hand side of the equation.
    pub right: f64,
}

impl EquationCheck {
    /// The absolute difference between the two sides.
    pub fn residual(&self) -> f64 {
        (self.left - self.right).abs()
    }

    /// Whether the residual is within [`EPSILON`], inclusive.
    ///
    /// A NaN residual (from non-finite inputs) compares greater than nothing, so it reports as an
    /// ordinary mismatch.
    pub fn satisfied(&self) -> bool {
        self.residual() <= EPSILON
    }
}

/// Result of [`LinearSystem::check`].
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    /// The candidate vector's length does not match the system size; nothing was computed.
    SizeMismatch { expected: usize, found: usize },
    /// One [`EquationCheck`] per equation, in row order.
    Checked(Vec<EquationCheck>),
}

impl Verification {
    /// The aggregate verdict: every equation satisfied, and the dimensions matched.
    pub fn satisfied(&self) -> bool {
        match self {
            Verification::SizeMismatch { .. } => false,
            Verification::Checked(equations) => equations.iter().all(EquationCheck::satisfied),
        }
    }

    /// The per-equation results (empty for a size mismatch).
    pub fn equations(&self) -> &[EquationCheck] {
        match self {
            Verification::SizeMismatch { .. } => &[],
            Verification::Checked(equations) => equations,
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verification::SizeMismatch { expected, found } => {
                write!(f, "vector length {found} does not match system size {expected}")
            }
            Verification::Checked(equations) => {
                for (i, eq) in equations.iter().enumerate() {
                    write!(
                        f,
                        "equation {}: left side {:.6}, right side {:.6}",
                        i + 1,
                        eq.left,
                        eq.right
                    )?;
                    if eq.satisfied() {
                        writeln!(f)?;
                    } else {
                        writeln!(f, " (difference: {:.2e})", eq.residual())?;
                    }
                }
                if self.satisfied() {
                    write!(f, "the vector satisfies the system (within tolerance)")
                } else {
                    write!(f, "the vector does not satisfy the system")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lincheck_linalg::{assert_approx_eq, Mat3d, Matrix, Vector};

    use crate::input::Scripted;

    use super::*;

    fn two_by_two() -> LinearSystem<2> {
        LinearSystem::from_parts(Matrix::from_rows([[1.0, 1.0], [2.0, -1.0]]), [3.0, 0.0])
    }

    #[test]
    fn satisfied_candidate() {
        let report = two_by_two().check(&[1.0, 2.0]);
        assert!(report.satisfied());
        assert_eq!(report.equations().len(), 2);
        assert_approx_eq!(report.equations()[0].left, 3.0).abs(0.0);
        assert_approx_eq!(report.equations()[1].left, 0.0).abs(0.0);
        assert_approx_eq!(report.equations()[0].residual(), 0.0).abs(0.0);
    }

    #[test]
    fn size_mismatch_skips_arithmetic() {
        let report = two_by_two().check(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            report,
            Verification::SizeMismatch {
                expected: 2,
                found: 4
            }
        );
        assert!(report.equations().is_empty());
        assert!(!report.satisfied());
    }

    #[test]
    fn near_miss_within_tolerance() {
        let sys = LinearSystem::<3>::from_parts(Mat3d::IDENTITY, [1.0, 2.0, 3.0]);

        let report = sys.check(&[1.0, 2.0, 3.0000005]);
        assert!(report.satisfied());

        let report = sys.check(&[1.0, 2.0, 3.00001]);
        assert!(!report.satisfied());
        // All three equations are still evaluated and reported.
        let eqs = report.equations();
        assert_eq!(eqs.len(), 3);
        assert!(eqs[0].satisfied());
        assert!(eqs[1].satisfied());
        assert!(!eqs[2].satisfied());
    }

    #[test]
    fn tolerance_boundary_is_inclusive() {
        let sys = LinearSystem::<1>::from_parts(Matrix::from_rows([[1.0]]), [0.0]);
        assert!(sys.check(&[EPSILON]).satisfied());
        assert!(!sys.check(&[EPSILON + 1e-12]).satisfied());
    }

    #[test]
    fn no_short_circuit() {
        let sys = LinearSystem::<2>::from_parts(Matrix::IDENTITY, [0.0, 0.0]);
        let report = sys.check(&[5.0, 5.0]);
        assert_eq!(report.equations().len(), 2);
        assert!(report.equations().iter().all(|eq| !eq.satisfied()));
    }

    #[test]
    fn nan_reports_as_mismatch() {
        let sys = LinearSystem::<1>::from_parts(Matrix::from_rows([[1.0]]), [f64::NAN]);
        let report = sys.check(&[1.0]);
        assert!(!report.satisfied());
        assert!(!report.equations()[0].satisfied());
    }

    #[test]
    fn display_renders_one_line_per_equation() {
        let rendered = two_by_two().to_string();
        assert_eq!(rendered, "1*x1 + 1*x2 = 3\n2*x1 + -1*x2 = 0\n");
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn report_rendering() {
        let report = two_by_two().check(&[1.0, 2.0]);
        let rendered = report.to_string();
        assert!(rendered.contains("equation 1: left side 3.000000, right side 3.000000"));
        assert!(rendered.contains("equation 2: left side 0.000000, right side 0.000000"));
        assert!(rendered.ends_with("the vector satisfies the system (within tolerance)"));

        let report = two_by_two().check(&[0.0, 0.0]);
        let rendered = report.to_string();
        assert!(rendered.contains("(difference: "));
        assert!(rendered.ends_with("the vector does not satisfy the system"));

        let report = two_by_two().check(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            report.to_string(),
            "vector length 4 does not match system size 2"
        );
    }

    #[test]
    fn set_coefficients_overwrites_everything() {
        let mut sys = two_by_two();
        let mut input = Scripted::new(["0", "0", "0", "0", "0", "0"]);
        sys.set_coefficients(&mut input).unwrap();
        assert_eq!(sys, LinearSystem::<2>::new());
    }

    #[test]
    fn entry_order_is_row_major_with_rhs_per_row() {
        let mut sys = LinearSystem::<2>::new();
        let mut input = Scripted::new(["1", "2", "3", "4", "5", "6"]);
        sys.set_coefficients(&mut input).unwrap();
        assert_eq!(
            sys,
            LinearSystem::from_parts(Matrix::from_rows([[1.0, 2.0], [4.0, 5.0]]), [3.0, 6.0])
        );
    }

    #[test]
    fn read_vector_in_index_order() {
        let sys = LinearSystem::<3>::new();
        let mut input = Scripted::new(["1", "2,5", "-3"]);
        let x = sys.read_vector(&mut input).unwrap();
        assert_eq!(x, [1.0, 2.5, -3.0]);
    }

    #[test]
    fn labels() {
        assert_eq!(LinearSystem::<2>::new().label(), "2×2");
        assert_eq!(LinearSystem::<3>::labeled("3×3 (SLAE)").label(), "3×3 (SLAE)");
        assert_eq!(LinearSystem::<3>::new().size(), 3);
    }

    #[test]
    fn randomized_exact_solutions_verify() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..100 {
            let a: Mat3d = Matrix::from_fn(|_, _| rng.i32(-10..=10) as f64);
            let x: Vector<f64, 3> = Vector::from_fn(|_| rng.i32(-10..=10) as f64);
            let sys = LinearSystem::from_parts(a, a * x);
            assert!(sys.check(x.as_slice()).satisfied());
        }
    }
}
