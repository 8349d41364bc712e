//! Stationary distribution of a persistent class by power iteration.

use chainscope_matrix::Matrix;
use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::error::MarkovError;

/// Outcome of a power-iteration run.
///
/// The distribution is returned whether or not the run converged; callers
/// decide whether to trust a non-converged approximation.
#[derive(Debug, Clone, PartialEq)]
pub struct StationaryDistribution {
    distribution: Vec<f64>,
    iterations: usize,
    converged: bool,
    difference: f64,
    lazy: bool,
}

impl StationaryDistribution {
    /// Returns the probability vector, in the class's member order.
    pub fn distribution(&self) -> &[f64] {
        &self.distribution
    }

    /// Returns the number of iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns `true` if the L1 step fell below epsilon within the cap.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Returns the L1 difference of the last step.
    pub fn difference(&self) -> f64 {
        self.difference
    }

    /// Returns `true` if the matrix was damped into a lazy chain.
    pub fn lazy(&self) -> bool {
        self.lazy
    }

    /// Consumes the result and returns the probability vector.
    pub fn into_distribution(self) -> Vec<f64> {
        self.distribution
    }
}

/// Runs undamped power iteration `pi <- pi * matrix` from `initial`.
///
/// Each step clamps negative entries to 0, renormalises to sum 1 and
/// measures the L1 change. Iteration stops when the change drops below
/// `config.epsilon()` or after `config.max_iterations()` steps.
///
/// On a periodic matrix this can cycle forever; see [`solve_stationary`]
/// for the damped variant.
///
/// # Errors
///
/// Returns [`MarkovError::InvalidConfig`] for a bad configuration,
/// [`MarkovError::InitialLength`] if `initial` does not match the matrix,
/// and [`MarkovError::InvalidInitial`] if it has negative or non-finite
/// entries or sums to zero.
pub fn power_iterate(
    matrix: &Matrix,
    initial: &[f64],
    config: &SolverConfig,
) -> Result<StationaryDistribution, MarkovError> {
    config.validate()?;
    let n = matrix.size();
    if initial.len() != n {
        return Err(MarkovError::InitialLength {
            expected: n,
            got: initial.len(),
        });
    }
    if initial.iter().any(|&p| !p.is_finite() || p < 0.0) {
        return Err(MarkovError::InvalidInitial {
            reason: "entries must be finite and non-negative".to_string(),
        });
    }
    let total: f64 = initial.iter().sum();
    if total <= 0.0 {
        return Err(MarkovError::InvalidInitial {
            reason: "entries sum to zero".to_string(),
        });
    }

    let mut pi: Vec<f64> = initial.iter().map(|p| p / total).collect();
    let mut difference = f64::INFINITY;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations() {
        iterations += 1;
        let mut next = matrix.left_multiply_vector(&pi)?;
        for p in next.iter_mut() {
            if *p < 0.0 {
                *p = 0.0;
            }
        }
        let sum: f64 = next.iter().sum();
        if sum > 0.0 {
            for p in next.iter_mut() {
                *p /= sum;
            }
        }
        difference = next.iter().zip(&pi).map(|(a, b)| (a - b).abs()).sum();
        pi = next;
        if difference < config.epsilon() {
            converged = true;
            break;
        }
    }

    Ok(StationaryDistribution {
        distribution: pi,
        iterations,
        converged,
        difference,
        lazy: false,
    })
}

/// Computes the stationary distribution of a class from its transition
/// submatrix and period.
///
/// A periodic class (`period > 1`) is first damped into the lazy chain
/// `alpha * S + (1 - alpha) * I`, which is aperiodic and has the same
/// stationary distribution. Power iteration then starts from the uniform
/// vector. A single-state class returns `[1.0]` without iterating.
///
/// # Errors
///
/// Returns [`MarkovError::InvalidConfig`] for a bad configuration.
#[tracing::instrument(skip(sub, config), fields(n = sub.size()))]
pub fn solve_stationary(
    sub: &Matrix,
    period: usize,
    config: &SolverConfig,
) -> Result<StationaryDistribution, MarkovError> {
    config.validate()?;
    let n = sub.size();
    if n == 1 {
        return Ok(StationaryDistribution {
            distribution: vec![1.0],
            iterations: 0,
            converged: true,
            difference: 0.0,
            lazy: false,
        });
    }

    let lazy = period > 1;
    let working = if lazy {
        debug!(period, alpha = config.lazy_alpha(), "damping periodic class");
        sub.mix(&Matrix::identity(n)?, config.lazy_alpha())?
    } else {
        sub.clone()
    };

    let uniform = vec![1.0 / n as f64; n];
    let mut result = power_iterate(&working, &uniform, config)?;
    result.lazy = lazy;

    if result.converged {
        debug!(iterations = result.iterations, "stationary distribution converged");
    } else {
        warn!(
            iterations = result.iterations,
            difference = result.difference,
            "stationary distribution did not converge"
        );
    }
    Ok(result)
}
