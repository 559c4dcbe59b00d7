use std::fmt;
use std::sync::Arc;

use regex::Regex;

/// Predicate that decides whether a shape-matching candidate is a true secret.
///
/// A validator receives the full matched text and returns `false` to veto the
/// match. Rules without a validator treat every pattern match as a secret.
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A named rule for recognizing one category of secret.
///
/// A rule bundles an ordered, non-empty list of regular expressions with an
/// optional validator and some metadata. Rules are immutable once registered;
/// registering a second rule under the same name replaces the first.
///
/// # Examples
///
/// ```
/// use redact_core::Rule;
/// use regex::Regex;
///
/// let rule = Rule::new(
///     "internal-token",
///     vec![Regex::new(r"itk_[a-z0-9]{24}").unwrap()],
/// )
/// .with_description("Internal service tokens");
///
/// assert_eq!(rule.name(), "internal-token");
/// assert_eq!(rule.patterns().len(), 1);
/// ```
#[derive(Clone)]
pub struct Rule {
    name: String,
    patterns: Vec<Regex>,
    validator: Option<Validator>,
    env_var: Option<String>,
    description: Option<String>,
}

impl Rule {
    /// Creates a rule from a name and its patterns.
    ///
    /// Patterns are applied in list order, and every application scans for all
    /// non-overlapping occurrences, never just the first.
    ///
    /// # Panics
    ///
    /// Panics if `patterns` is empty.
    pub fn new(name: impl Into<String>, patterns: Vec<Regex>) -> Self {
        assert!(!patterns.is_empty(), "a rule needs at least one pattern");
        Self {
            name: name.into(),
            patterns,
            validator: None,
            env_var: None,
            description: None,
        }
    }

    /// Attaches a validator that can veto shape-matching candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// use redact_core::Rule;
    /// use regex::Regex;
    ///
    /// // Hex strings are only treated as secrets when they are not all zeros.
    /// let rule = Rule::new("hex-key", vec![Regex::new(r"\b[0-9a-f]{32}\b").unwrap()])
    ///     .with_validator(|candidate| candidate.chars().any(|c| c != '0'));
    ///
    /// assert!(rule.validator().is_some());
    /// ```
    pub fn with_validator(mut self, validator: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Records the environment variable this secret usually lives in.
    ///
    /// Metadata only: the engine never reads the environment.
    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = Some(env_var.into());
        self
    }

    /// Attaches a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the rule's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rule's patterns in application order.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Returns the validator, if one is attached.
    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// Returns the associated environment variable name, if recorded.
    pub fn env_var(&self) -> Option<&str> {
        self.env_var.as_deref()
    }

    /// Returns the description, if one was attached.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field(
                "patterns",
                &self.patterns.iter().map(Regex::as_str).collect::<Vec<_>>(),
            )
            .field("has_validator", &self.validator.is_some())
            .field("env_var", &self.env_var)
            .field("description", &self.description)
            .finish()
    }
}
