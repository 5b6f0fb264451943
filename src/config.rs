use crate::error::SymSpellError;

#[derive(Debug, Clone, Copy)]
pub struct SymSpellConfig {
    pub initial_capacity: usize,
    pub max_dictionary_edit_distance: usize,
    pub prefix_length: usize,
    pub count_threshold: u64,
    pub compact_level: u32,
}

impl Default for SymSpellConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            max_dictionary_edit_distance: 2,
            prefix_length: 7,
            count_threshold: 1,
            compact_level: 5,
        }
    }
}

impl SymSpellConfig {
    pub fn validate(self) -> Result<Self, SymSpellError> {
        if self.prefix_length < 1 || self.prefix_length <= self.max_dictionary_edit_distance {
            return Err(SymSpellError::InvalidConfig(
                "prefix_length cannot be less than 1 or smaller than max_dictionary_edit_distance"
                    .to_string(),
            ));
        }
        if self.compact_level > 16 {
            return Err(SymSpellError::InvalidConfig(
                "compact_level must be between 0 and 16".to_string(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SymSpellConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_prefix_length_not_exceeding_max_distance() {
        let cfg = SymSpellConfig {
            prefix_length: 2,
            max_dictionary_edit_distance: 2,
            ..SymSpellConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_compact_level_out_of_range() {
        let cfg = SymSpellConfig {
            compact_level: 17,
            ..SymSpellConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
