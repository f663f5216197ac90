// =====================================================================================
// INTENT MATCHER - ORDERED KEYWORD RULES, FIRST MATCH WINS
// =====================================================================================

use std::fs;
use std::path::Path;

use regex::{Regex, RegexBuilder};
use shared_config::AppConfig;
use tracing::info;

use crate::error::ChatbotError;
use crate::models::{ClassificationResult, RuleDefinition, RulesDocument};
use crate::services::rules::{default_rule_definitions, FALLBACK_RESPONSE};

/// Compiled size cap for one rule's keyword alternation. Exceeding it is the
/// only way a rule yields `ChatbotError::InvalidPattern`, since keywords are escaped.
const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A compiled rule. Matches when any keyword occurs anywhere in the lowercased message.
#[derive(Debug, Clone)]
pub struct Rule {
    intent: String,
    pattern: Regex,
    response: String,
}

impl Rule {
    fn compile(index: usize, definition: RuleDefinition) -> Result<Self, ChatbotError> {
        Self::compile_with_limit(index, definition, PATTERN_SIZE_LIMIT)
    }

    fn compile_with_limit(
        index: usize,
        definition: RuleDefinition,
        size_limit: usize,
    ) -> Result<Self, ChatbotError> {
        if definition.intent.trim().is_empty() {
            return Err(ChatbotError::InvalidRule {
                index,
                reason: "intent must not be blank".to_string(),
            });
        }
        if definition.response.trim().is_empty() {
            return Err(ChatbotError::InvalidRule {
                index,
                reason: format!("response for intent '{}' must not be blank", definition.intent),
            });
        }
        if definition.keywords.is_empty() {
            return Err(ChatbotError::InvalidRule {
                index,
                reason: format!("intent '{}' has no keywords", definition.intent),
            });
        }
        if definition.keywords.iter().any(|k| k.is_empty()) {
            // An empty alternative would match every message.
            return Err(ChatbotError::InvalidRule {
                index,
                reason: format!("intent '{}' has an empty keyword", definition.intent),
            });
        }

        let alternation = definition
            .keywords
            .iter()
            .map(|keyword| regex::escape(&keyword.to_lowercase()))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&format!("({})", alternation))
            .size_limit(size_limit)
            .build()
            .map_err(|source| ChatbotError::InvalidPattern { index, source })?;

        Ok(Self {
            intent: definition.intent,
            pattern,
            response: definition.response,
        })
    }

    pub fn intent(&self) -> &str {
        &self.intent
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn matches(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }
}

/// Immutable rule set. Safe to share behind an `Arc` across any number of handlers.
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    rules: Vec<Rule>,
    fallback: String,
}

impl IntentMatcher {
    pub fn with_default_rules() -> Self {
        Self::from_definitions(default_rule_definitions(), FALLBACK_RESPONSE)
            .expect("built-in rule table is valid")
    }

    pub fn from_definitions(
        definitions: Vec<RuleDefinition>,
        fallback: &str,
    ) -> Result<Self, ChatbotError> {
        if fallback.trim().is_empty() {
            return Err(ChatbotError::BlankFallback);
        }

        let rules = definitions
            .into_iter()
            .enumerate()
            .map(|(index, definition)| Rule::compile(index, definition))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules,
            fallback: fallback.to_string(),
        })
    }

    pub fn from_document(document: RulesDocument) -> Result<Self, ChatbotError> {
        let fallback = document.fallback.as_deref().unwrap_or(FALLBACK_RESPONSE);
        Self::from_definitions(document.rules, fallback)
    }

    pub fn from_rules_file(path: &Path) -> Result<Self, ChatbotError> {
        let raw = fs::read_to_string(path).map_err(|source| ChatbotError::RulesFile {
            path: path.to_path_buf(),
            source,
        })?;
        let document: RulesDocument = serde_json::from_str(&raw)?;
        Self::from_document(document)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ChatbotError> {
        let matcher = match &config.chatbot_rules_path {
            Some(path) => {
                info!("Loading chatbot rules from {}", path.display());
                Self::from_rules_file(path)?
            }
            None => Self::with_default_rules(),
        };

        info!("Chatbot ready with {} rules", matcher.len());
        Ok(matcher)
    }

    /// Returns the response of the first matching rule, or the fallback.
    pub fn classify(&self, message: &str) -> &str {
        let normalized = message.to_lowercase();
        self.first_match(&normalized)
            .map(Rule::response)
            .unwrap_or(self.fallback.as_str())
    }

    pub fn classify_detailed(&self, message: &str) -> ClassificationResult {
        let normalized = message.to_lowercase();
        match self.first_match(&normalized) {
            Some(rule) => ClassificationResult {
                matched: true,
                intent: Some(rule.intent.clone()),
                response: rule.response.clone(),
            },
            None => ClassificationResult {
                matched: false,
                intent: None,
                response: self.fallback.clone(),
            },
        }
    }

    pub fn intents(&self) -> Vec<String> {
        self.rules.iter().map(|rule| rule.intent.clone()).collect()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn first_match(&self, normalized: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(normalized))
    }
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
