//! Configuration for model validation

use serde::{Deserialize, Serialize};

/// Opt-in checks layered on top of [`super::validate_model`].
///
/// The default configuration enables nothing extra, so
/// `validate_model_with(model, &ValidationConfig::default())` is the same as
/// `validate_model(model)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Check attribute constraint maps (lengths, ranges, patterns)
    pub check_constraints: bool,

    /// Report multi-level `base_type` cycles (A -> B -> A)
    pub detect_inheritance_cycles: bool,
}

impl ValidationConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with every opt-in check enabled
    pub fn strict() -> Self {
        Self {
            check_constraints: true,
            detect_inheritance_cycles: true,
        }
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder::default()
    }
}

/// Builder for ValidationConfig
#[derive(Debug, Default)]
pub struct ValidationConfigBuilder {
    config: ValidationConfig,
}

impl ValidationConfigBuilder {
    /// Enable or disable constraint map checks
    pub fn check_constraints(mut self, check: bool) -> Self {
        self.config.check_constraints = check;
        self
    }

    /// Enable or disable inheritance cycle detection
    pub fn detect_inheritance_cycles(mut self, detect: bool) -> Self {
        self.config.detect_inheritance_cycles = detect;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ValidationConfig {
        self.config
    }
}
