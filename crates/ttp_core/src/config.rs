//! Run configuration and pre-search validation.

/// Options for one generation run, normally built by the CLI.
///
/// `max` bounds the number of completed schedules (unbounded when
/// absent); `count` is the progress-report interval (0 = final report
/// only); `verbose` caps how many schedules are retained in memory and
/// printed; `save` names the schedule output; `random` switches to the
/// restart-sampling mode and is incompatible with a user-set `max`.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub normalize: bool,
    pub max: Option<u64>,
    pub count: Option<u64>,
    pub verbose: Option<usize>,
    pub save: Option<String>,
    pub append: bool,
    pub random: Option<u64>,
}

impl GeneratorConfig {
    /// Reject invalid configurations before any search starts. A
    /// failed validation must leave no partial output behind, so this
    /// runs before directories or files are touched.
    pub fn validate(&self, n: usize) -> Result<(), String> {
        if n % 2 != 0 {
            return Err("Number of teams must be even".to_string());
        }
        if n < 4 {
            return Err("Number of teams must be greater than or equal to 4".to_string());
        }
        if self.verbose == Some(0) {
            return Err("Verbose must be greater than 0".to_string());
        }
        if self.random.is_some() && self.max.is_some() {
            return Err("Random and max cannot be used together".to_string());
        }
        if self.append && self.save.is_none() {
            return Err("Append can only be used together with save".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate(4).is_ok());
        assert!(GeneratorConfig::default().validate(10).is_ok());
    }

    #[test]
    fn test_odd_or_small_n_rejected() {
        let config = GeneratorConfig::default();
        assert!(config.validate(5).is_err());
        assert!(config.validate(2).is_err());
        assert!(config.validate(0).is_err());
    }

    #[test]
    fn test_zero_verbose_rejected() {
        let config = GeneratorConfig {
            verbose: Some(0),
            ..Default::default()
        };
        assert!(config.validate(4).is_err());
    }

    #[test]
    fn test_random_excludes_max() {
        let config = GeneratorConfig {
            random: Some(10),
            max: Some(5),
            ..Default::default()
        };
        assert!(config.validate(4).is_err());

        let config = GeneratorConfig {
            random: Some(10),
            ..Default::default()
        };
        assert!(config.validate(4).is_ok());
    }

    #[test]
    fn test_append_requires_save() {
        let config = GeneratorConfig {
            append: true,
            ..Default::default()
        };
        assert!(config.validate(4).is_err());

        let config = GeneratorConfig {
            append: true,
            save: Some("runs".to_string()),
            ..Default::default()
        };
        assert!(config.validate(4).is_ok());
    }
}
