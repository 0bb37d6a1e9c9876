use std::ops::Deref;

use serde::Serialize;

use crate::domain::{
    entities::ProjectConfig,
    error::DomainError,
    rules::{RULES, RuleId},
};

/// A configuration that passed every compatibility rule.
///
/// Only [`Validator::validate`] constructs one, so holding a
/// `ValidatedConfig` proves the rules ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedConfig(ProjectConfig);

impl ValidatedConfig {
    pub fn config(&self) -> &ProjectConfig {
        &self.0
    }

    pub fn into_inner(self) -> ProjectConfig {
        self.0
    }
}

impl Deref for ValidatedConfig {
    type Target = ProjectConfig;

    fn deref(&self) -> &ProjectConfig {
        &self.0
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: RuleId,
    pub message: String,
}

impl From<Violation> for DomainError {
    fn from(v: Violation) -> Self {
        DomainError::IncompatibleSelection {
            rule: v.rule,
            message: v.message,
        }
    }
}

/// Runs the rule table against a configuration.
pub struct Validator;

impl Validator {
    /// Check every rule in order; the first violation is the error.
    ///
    /// The configuration is returned unchanged on success.
    pub fn validate(config: ProjectConfig) -> Result<ValidatedConfig, DomainError> {
        for rule in RULES {
            if let Err(message) = (rule.check)(&config) {
                return Err(Violation {
                    rule: rule.id,
                    message,
                }
                .into());
            }
        }
        Ok(ValidatedConfig(config))
    }

    /// Every violation, in rule order.
    pub fn violations(config: &ProjectConfig) -> Vec<Violation> {
        RULES
            .iter()
            .filter_map(|rule| {
                (rule.check)(config).err().map(|message| Violation {
                    rule: rule.id,
                    message,
                })
            })
            .collect()
    }
}
