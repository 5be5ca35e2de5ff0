use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesetError {
    #[error("royale game can't shrink more frequently than every turn")]
    ShrinkTooFrequent,
    #[error("royale damage per turn must be greater than zero")]
    NonPositiveHazardDamage,
    #[error("snake {0} is length zero")]
    ZeroLengthSnake(String),
    #[error("unknown ruleset: {0}")]
    UnknownRuleset(String),
}

impl RulesetError {
    /// Configuration errors will happen again on every call until the ruleset is rebuilt
    pub fn is_configuration(&self) -> bool {
        !matches!(self, RulesetError::ZeroLengthSnake(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors() {
        assert!(RulesetError::ShrinkTooFrequent.is_configuration());
        assert!(RulesetError::NonPositiveHazardDamage.is_configuration());
        assert!(RulesetError::UnknownRuleset("wrapped".to_owned()).is_configuration());
        assert!(!RulesetError::ZeroLengthSnake("one".to_owned()).is_configuration());
    }
}
