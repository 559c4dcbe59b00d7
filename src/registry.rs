use crate::patterns::builtin_rules;
use crate::rule::Rule;

/// The mutable catalog of all currently known rules.
///
/// Rules are kept in registration order, and that order is semantically
/// significant: during redaction each rule operates on text already mutated by
/// the rules before it, so earlier rules win overlapping spans.
///
/// Registering a rule under an existing name replaces the old rule in place,
/// keeping its position in the application order.
///
/// A registry is ordinary single-threaded state. Embedders that share one
/// registry across threads must supply their own locking; see
/// [`global`](crate::global) for the shared-default convenience layer.
///
/// # Examples
///
/// ```
/// use redact_core::{PatternRegistry, Rule};
/// use regex::Regex;
///
/// let mut registry = PatternRegistry::empty();
/// registry.register(Rule::new(
///     "custom",
///     vec![Regex::new(r"CUSTOM_[A-Z0-9]{20}").unwrap()],
/// ));
///
/// assert!(registry.has("custom"));
/// assert_eq!(registry.len(), 1);
/// assert!(registry.unregister("custom"));
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Vec<Rule>,
}

impl PatternRegistry {
    /// Creates a registry seeded with the built-in default rules.
    ///
    /// The defaults cover API keys, secrets, passwords, bearer tokens, AWS
    /// access/secret keys, GitHub/GitLab/Slack tokens, PEM private-key blocks,
    /// and JWTs.
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Creates a registry with no rules at all.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Inserts a rule, replacing any existing rule with the same name.
    ///
    /// Replacement keeps the original rule's position in application order.
    pub fn register(&mut self, rule: Rule) {
        tracing::debug!(rule = %rule.name(), "registering redaction rule");
        match self.rules.iter_mut().find(|r| r.name() == rule.name()) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
    }

    /// Removes the rule with the given name.
    ///
    /// Returns `true` if a rule existed and was removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.name() != name);
        let removed = self.rules.len() != before;
        if removed {
            tracing::debug!(rule = %name, "unregistered redaction rule");
        }
        removed
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Returns all rules in registration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns `true` if a rule with the given name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Removes every rule.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.rules.len(), "clearing redaction rules");
        self.rules.clear();
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}
