pub mod matcher;
pub mod rules;

pub use matcher::{IntentMatcher, Rule};
pub use rules::{default_rule_definitions, FALLBACK_RESPONSE};
