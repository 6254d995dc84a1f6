//! Ordered text rewrite pipeline.

use tracing::trace;

/// Pure whole-text substitution step.
pub type Rewrite = fn(&str) -> String;

/// Named rewrite step of a pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    name: &'static str,
    rewrite: Rewrite,
}

impl Rule {
    /// Creates rule from name and rewrite function.
    ///
    /// # Arguments
    ///
    /// * `name`: Identifier used in trace output and rule listings
    /// * `rewrite`: Substitution applied to the whole working text
    pub const fn new(name: &'static str, rewrite: Rewrite) -> Self {
        Self { name, rewrite }
    }

    /// Returns rule name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies rule to text and returns rewritten copy.
    pub fn apply(&self, text: &str) -> String {
        (self.rewrite)(text)
    }
}

/// Fixed sequence of rewrite rules.
///
/// Rules run in insertion order. Each rule sees the complete output of the
/// rule before it, so reordering rules changes the produced text.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    rules: Vec<Rule>,
}

impl Pipeline {
    /// Creates empty pipeline that returns input unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends rule to the end of the pipeline.
    ///
    /// # Arguments
    ///
    /// * `rule`: Rule to run after all rules already present
    ///
    /// # Returns
    ///
    /// Pipeline with rule appended
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns rules in execution order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs every rule in order over input.
    ///
    /// # Arguments
    ///
    /// * `input`: Source text
    ///
    /// # Returns
    ///
    /// Text after the last rule has been applied
    pub fn run(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |text, rule| {
                let rewritten = rule.apply(&text);
                trace!(
                    rule = rule.name(),
                    before = text.len(),
                    after = rewritten.len(),
                    "applied rewrite rule"
                );
                rewritten
            })
    }
}

impl FromIterator<Rule> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
