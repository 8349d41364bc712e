//! Configuration for the stationary solver and the analysis pipeline.

use chainscope_graph::DEFAULT_MARKOV_TOLERANCE;

use crate::error::MarkovError;

/// Configuration for power iteration.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use chainscope_markov::SolverConfig;
///
/// let config = SolverConfig::new()
///     .with_epsilon(1e-8)
///     .with_max_iterations(5_000);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SolverConfig {
    epsilon: f64,
    max_iterations: usize,
    lazy_alpha: f64,
}

impl SolverConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `epsilon = 1e-6`, `max_iterations = 10_000`,
    /// `lazy_alpha = 0.5`.
    pub fn new() -> Self {
        Self {
            epsilon: 1e-6,
            max_iterations: 10_000,
            lazy_alpha: 0.5,
        }
    }

    /// Sets the L1 convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the weight kept on the original matrix when damping a periodic
    /// class: `alpha * S + (1 - alpha) * I`.
    pub fn with_lazy_alpha(mut self, alpha: f64) -> Self {
        self.lazy_alpha = alpha;
        self
    }

    // --- Accessors ---

    /// Returns the L1 convergence threshold.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the damping weight for periodic classes.
    pub fn lazy_alpha(&self) -> f64 {
        self.lazy_alpha
    }

    /// Validates this configuration.
    ///
    /// Checks that epsilon is finite and positive, the iteration cap is
    /// non-zero, and alpha lies in the open interval (0, 1).
    pub fn validate(&self) -> Result<(), MarkovError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(MarkovError::InvalidConfig {
                reason: format!("epsilon must be finite and positive, got {}", self.epsilon),
            });
        }
        if self.max_iterations == 0 {
            return Err(MarkovError::InvalidConfig {
                reason: "max_iterations must be at least 1".to_string(),
            });
        }
        if !self.lazy_alpha.is_finite() || self.lazy_alpha <= 0.0 || self.lazy_alpha >= 1.0 {
            return Err(MarkovError::InvalidConfig {
                reason: format!("lazy_alpha must be in (0, 1), got {}", self.lazy_alpha),
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for [`crate::analyze`].
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    solver: SolverConfig,
    markov_tolerance: f64,
}

impl AnalysisConfig {
    /// Creates a new configuration with the default solver and a Markov
    /// tolerance of 0.01.
    pub fn new() -> Self {
        Self {
            solver: SolverConfig::new(),
            markov_tolerance: DEFAULT_MARKOV_TOLERANCE,
        }
    }

    /// Sets the solver configuration.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the tolerance around 1.0 for outgoing probability sums.
    pub fn with_markov_tolerance(mut self, tolerance: f64) -> Self {
        self.markov_tolerance = tolerance;
        self
    }

    /// Returns the solver configuration.
    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// Returns the Markov validity tolerance.
    pub fn markov_tolerance(&self) -> f64 {
        self.markov_tolerance
    }

    /// Validates the solver configuration and the tolerance.
    pub fn validate(&self) -> Result<(), MarkovError> {
        self.solver.validate()?;
        if !self.markov_tolerance.is_finite() || self.markov_tolerance < 0.0 {
            return Err(MarkovError::InvalidConfig {
                reason: format!(
                    "markov_tolerance must be finite and non-negative, got {}",
                    self.markov_tolerance
                ),
            });
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}
