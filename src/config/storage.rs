//! Session store configuration

use serde::Deserialize;

use super::server::Environment;

/// Session store configuration
///
/// Sessions live in process memory; the only knob is whether the store
/// starts out with a demo session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Seed one demo session with three ideas at startup.
    /// Unset means "only in development".
    #[serde(default)]
    pub seed_demo_data: Option<bool>,
}

impl StorageConfig {
    /// Whether the store should be seeded when running in `environment`.
    pub fn seeds_demo_data(&self, environment: &Environment) -> bool {
        self.seed_demo_data
            .unwrap_or(*environment == Environment::Development)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_by_default_only_in_development() {
        let config = StorageConfig::default();
        assert!(config.seeds_demo_data(&Environment::Development));
        assert!(!config.seeds_demo_data(&Environment::Staging));
        assert!(!config.seeds_demo_data(&Environment::Production));
    }

    #[test]
    fn test_explicit_flag_wins() {
        let off = StorageConfig {
            seed_demo_data: Some(false),
        };
        assert!(!off.seeds_demo_data(&Environment::Development));

        let on = StorageConfig {
            seed_demo_data: Some(true),
        };
        assert!(on.seeds_demo_data(&Environment::Production));
    }
}
