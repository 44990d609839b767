//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Insert a demo session at startup when the store is empty
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
            verbose_errors: false,
        }
    }
}

fn default_seed_demo_data() -> bool {
    true
}
