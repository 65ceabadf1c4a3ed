//! Search configuration.

/// Configuration parameters for the tabu search.
///
/// # Examples
///
/// ```
/// use smtwt_tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(200)
///     .with_tabu_tenure(8);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.tabu_tenure, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of search iterations to execute.
    pub max_iterations: usize,
    /// How many of the most recently applied moves stay forbidden.
    pub tabu_tenure: usize,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tabu_tenure: 10,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (number of recent moves kept forbidden).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.tabu_tenure == 0 {
            return Err("tabu_tenure must be at least 1".into());
        }
        Ok(())
    }
}
