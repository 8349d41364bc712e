//! Limit of matrix powers `M^k` for the whole chain.

use chainscope_matrix::Matrix;
use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::error::MarkovError;

/// Outcome of iterating matrix powers towards a limit.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitMatrix {
    matrix: Matrix,
    power: usize,
    converged: bool,
    difference: f64,
}

impl LimitMatrix {
    /// Returns the last computed power.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns the exponent of [`LimitMatrix::matrix`].
    pub fn power(&self) -> usize {
        self.power
    }

    /// Returns `true` if two successive powers differed by less than epsilon.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Returns the L1 difference between the last two powers.
    pub fn difference(&self) -> f64 {
        self.difference
    }
}

/// Multiplies `M^k` by `M` until successive powers differ by less than
/// `config.epsilon()` (summed absolute difference) or the iteration cap is
/// reached.
///
/// For an aperiodic chain every row of the limit is a stationary
/// distribution. A periodic chain never settles and is reported as not
/// converged.
///
/// # Errors
///
/// Returns [`MarkovError::InvalidConfig`] for a bad configuration.
#[tracing::instrument(skip_all, fields(n = matrix.size()))]
pub fn limit_matrix(matrix: &Matrix, config: &SolverConfig) -> Result<LimitMatrix, MarkovError> {
    config.validate()?;
    let mut current = matrix.clone();
    let mut power = 1;
    let mut difference = f64::INFINITY;
    let mut converged = false;

    for _ in 0..config.max_iterations() {
        let next = current.multiply(matrix)?;
        difference = current.difference(&next)?;
        current = next;
        power += 1;
        if difference < config.epsilon() {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(power, difference, "matrix powers converged");
    } else {
        warn!(power, difference, "matrix powers did not converge");
    }
    Ok(LimitMatrix {
        matrix: current,
        power,
        converged,
        difference,
    })
}
