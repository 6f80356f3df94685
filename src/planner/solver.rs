use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem, Variable};
use thiserror::Error;

use crate::planner::constants::EMPTY_ROW_TOLERANCE;

/// Minimize `objective · x` subject to `rows · x <= rhs`.
///
/// Each variable also carries a `(min, max)` range, unrestricted by default.
/// The range is a hint to the solver and may repeat bounds already stated as rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearProgram {
    pub objective: Vec<f64>,
    pub rows: Vec<Vec<f64>>,
    pub rhs: Vec<f64>,
    pub var_bounds: Vec<(f64, f64)>,
}

impl LinearProgram {
    pub fn new(objective: Vec<f64>) -> Self {
        let var_bounds = vec![(f64::NEG_INFINITY, f64::INFINITY); objective.len()];
        Self {
            objective,
            rows: Vec::new(),
            rhs: Vec::new(),
            var_bounds,
        }
    }

    /// Restrict every variable to `[min, max]`.
    pub fn bound_all(&mut self, min: f64, max: f64) {
        self.var_bounds.fill((min, max));
    }

    /// Append the constraint `row · x <= rhs`.
    pub fn push_le(&mut self, row: Vec<f64>, rhs: f64) {
        self.rows.push(row);
        self.rhs.push(rhs);
    }

    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.rows.len()
    }

    fn check_shape(&self) -> Result<(), SolveError> {
        if self.rows.len() != self.rhs.len() {
            return Err(SolveError::Malformed(format!(
                "{} constraint rows but {} right-hand sides",
                self.rows.len(),
                self.rhs.len()
            )));
        }

        if let Some(i) = self.rows.iter().position(|r| r.len() != self.objective.len()) {
            return Err(SolveError::Malformed(format!(
                "row {} has {} coefficients, expected {}",
                i,
                self.rows[i].len(),
                self.objective.len()
            )));
        }

        if self.var_bounds.len() != self.objective.len() {
            return Err(SolveError::Malformed(format!(
                "{} variable ranges for {} variables",
                self.var_bounds.len(),
                self.objective.len()
            )));
        }

        if let Some(i) = self
            .var_bounds
            .iter()
            .position(|(min, max)| min.is_nan() || max.is_nan() || min > max)
        {
            return Err(SolveError::Malformed(format!(
                "variable {} has an empty range {:?}",
                i, self.var_bounds[i]
            )));
        }

        let all_finite = self.objective.iter().chain(self.rhs.iter()).all(|v| v.is_finite())
            && self.rows.iter().flatten().all(|v| v.is_finite());
        if !all_finite {
            return Err(SolveError::Malformed("non-finite coefficient".to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("problem is infeasible")]
    Infeasible,

    #[error("problem is unbounded")]
    Unbounded,

    #[error("malformed problem: {0}")]
    Malformed(String),
}

/// A single-call linear-programming capability.
pub trait LpSolver {
    /// Return an optimal `x`, one value per objective coefficient.
    fn minimize(&self, program: &LinearProgram) -> Result<Vec<f64>, SolveError>;
}

/// Dense simplex solve backed by `minilp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexSolver;

impl LpSolver for SimplexSolver {
    fn minimize(&self, program: &LinearProgram) -> Result<Vec<f64>, SolveError> {
        program.check_shape()?;

        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<Variable> = program
            .objective
            .iter()
            .zip(&program.var_bounds)
            .map(|(&c, &range)| problem.add_var(c, range))
            .collect();

        for (row, &rhs) in program.rows.iter().zip(&program.rhs) {
            let mut expr = LinearExpr::empty();
            let mut terms = 0;
            for (&var, &coeff) in vars.iter().zip(row) {
                if coeff != 0.0 {
                    expr.add(var, coeff);
                    terms += 1;
                }
            }

            // 0 <= rhs: decided here rather than handed to the solver.
            if terms == 0 {
                if rhs < -EMPTY_ROW_TOLERANCE {
                    return Err(SolveError::Infeasible);
                }
                continue;
            }

            problem.add_constraint(expr, ComparisonOp::Le, rhs);
        }

        let solution = problem.solve().map_err(|e| match e {
            minilp::Error::Infeasible => SolveError::Infeasible,
            minilp::Error::Unbounded => SolveError::Unbounded,
        })?;

        // minilp can report an unbounded direction as an infinite value.
        let values: Vec<f64> = vars.iter().map(|&v| solution[v]).collect();
        if values.iter().any(|v| !v.is_finite()) || !solution.objective().is_finite() {
            return Err(SolveError::Unbounded);
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_minimum() {
        // min -x - y  s.t.  x + y <= 4, x <= 3, y <= 3, -x <= 0, -y <= 0
        let mut lp = LinearProgram::new(vec![-1.0, -2.0]);
        lp.push_le(vec![1.0, 1.0], 4.0);
        lp.push_le(vec![1.0, 0.0], 3.0);
        lp.push_le(vec![0.0, 1.0], 3.0);
        lp.push_le(vec![-1.0, 0.0], 0.0);
        lp.push_le(vec![0.0, -1.0], 0.0);

        let x = SimplexSolver.minimize(&lp).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-9);
        assert!((x[1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_infeasible() {
        let mut lp = LinearProgram::new(vec![1.0]);
        lp.push_le(vec![1.0], 1.0);
        lp.push_le(vec![-1.0], -2.0);
        assert_eq!(SimplexSolver.minimize(&lp), Err(SolveError::Infeasible));
    }

    #[test]
    fn test_unbounded() {
        let mut lp = LinearProgram::new(vec![-1.0]);
        lp.push_le(vec![-1.0], 0.0);
        assert_eq!(SimplexSolver.minimize(&lp), Err(SolveError::Unbounded));
    }

    #[test]
    fn test_unbounded_below_with_row_bound_only() {
        // min x  s.t.  x <= 5: nothing stops x from falling forever.
        let mut lp = LinearProgram::new(vec![1.0]);
        lp.push_le(vec![1.0], 5.0);
        assert_eq!(SimplexSolver.minimize(&lp), Err(SolveError::Unbounded));
    }

    #[test]
    fn test_var_bounds_respected() {
        let mut lp = LinearProgram::new(vec![-1.0, 1.0]);
        lp.bound_all(0.0, 2.0);
        let x = SimplexSolver.minimize(&lp).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-9);
        assert!(x[1].abs() < 1e-9);
    }

    #[test]
    fn test_empty_var_range_is_malformed() {
        let mut lp = LinearProgram::new(vec![1.0]);
        lp.bound_all(3.0, 0.0);
        assert!(matches!(
            SimplexSolver.minimize(&lp),
            Err(SolveError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_row() {
        let mut lp = LinearProgram::new(vec![1.0]);
        lp.push_le(vec![-1.0], 0.0);
        lp.push_le(vec![0.0], 5.0);
        assert!(SimplexSolver.minimize(&lp).is_ok());

        lp.push_le(vec![0.0], -5.0);
        assert_eq!(SimplexSolver.minimize(&lp), Err(SolveError::Infeasible));
    }

    #[test]
    fn test_malformed_shape() {
        let mut lp = LinearProgram::new(vec![1.0, 1.0]);
        lp.push_le(vec![1.0], 1.0);
        assert!(matches!(
            SimplexSolver.minimize(&lp),
            Err(SolveError::Malformed(_))
        ));
    }
}
