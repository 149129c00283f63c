/// Field format rules
///
/// Pure text predicates gating navigation and submission. Each rule accepts
/// or rejects a raw input value; rules never look at anything but the value.

use regex::Regex;

use crate::error::RegistryError;

/// Format rule for a survey value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueRule {
    /// Exactly two uppercase letters (e.g. "AL")
    RegionCode,

    /// Non-negative integer, digits only
    Count,

    /// Literal "Yes" or "No", case-sensitive
    YesNo,

    /// Non-negative integer or decimal (one optional decimal point)
    Minutes,
}

impl ValueRule {
    /// Get the anchored regex pattern for this rule
    pub fn pattern(&self) -> &'static str {
        match self {
            ValueRule::RegionCode => r"^[A-Z]{2}$",
            ValueRule::Count => r"^\d+$",
            ValueRule::YesNo => r"^(Yes|No)$",
            ValueRule::Minutes => r"^\d+(\.\d+)?$",
        }
    }
}

/// Compiled rule set
///
/// Compiles each rule's regex once at construction and reuses it for every
/// check.
pub struct RuleSet {
    region_code: Regex,
    count: Regex,
    yes_no: Regex,
    minutes: Regex,
}

impl RuleSet {
    /// Compile all rules
    pub fn new() -> Result<Self, RegistryError> {
        Ok(Self {
            region_code: Self::compile(ValueRule::RegionCode)?,
            count: Self::compile(ValueRule::Count)?,
            yes_no: Self::compile(ValueRule::YesNo)?,
            minutes: Self::compile(ValueRule::Minutes)?,
        })
    }

    fn compile(rule: ValueRule) -> Result<Regex, RegistryError> {
        Regex::new(rule.pattern()).map_err(|source| RegistryError::BadPattern {
            pattern: rule.pattern(),
            source,
        })
    }

    /// Check a value against a rule
    pub fn matches(&self, rule: ValueRule, value: &str) -> bool {
        self.regex_for(rule).is_match(value)
    }

    fn regex_for(&self, rule: ValueRule) -> &Regex {
        match rule {
            ValueRule::RegionCode => &self.region_code,
            ValueRule::Count => &self.count,
            ValueRule::YesNo => &self.yes_no,
            ValueRule::Minutes => &self.minutes,
        }
    }
}
