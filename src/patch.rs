//! Literal substitution rules applied to the HTML returned by the endpoint.
//!
//! The rules are plain string matches, not HTML-aware rewrites. A rule that
//! does not find its exact pattern leaves the body untouched.

/// How a rule is applied to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchMode {
    /// One left-to-right pass replacing every non-overlapping occurrence.
    Once,
    /// Repeat the pass until the pattern no longer occurs. Only honored when
    /// the replacement is shorter than the pattern.
    UntilStable,
}

/// A single `pattern -> replacement` substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub mode: PatchMode,
}

impl PatchRule {
    /// Applies the rule, returning the patched text.
    pub fn apply(&self, text: &str) -> String {
        let mut patched = text.replace(self.pattern, self.replacement);
        if self.mode == PatchMode::UntilStable && self.shrinks() {
            while patched.contains(self.pattern) {
                patched = patched.replace(self.pattern, self.replacement);
            }
        }
        patched
    }

    fn shrinks(&self) -> bool {
        !self.pattern.is_empty() && self.replacement.len() < self.pattern.len()
    }
}

/// Rules run against every converted body, in order.
pub const BODY_RULES: &[PatchRule] = &[
    PatchRule {
        name: "collapse-double-break",
        pattern: "<br><br>",
        replacement: "<br>",
        mode: PatchMode::UntilStable,
    },
    PatchRule {
        name: "strip-user-content-anchor",
        pattern: "<a name=\"user-content-",
        replacement: "<a name=\"",
        mode: PatchMode::Once,
    },
    // Only fires on this exact heading markup.
    PatchRule {
        name: "inject-charset-meta",
        pattern: "<p><strong>SPAdes",
        replacement: " <meta charset=\"UTF-8\"> <p><strong>SPAdes",
        mode: PatchMode::Once,
    },
];

/// Applies `rules` to `body` in sequence.
pub fn apply_rules(body: &str, rules: &[PatchRule]) -> String {
    rules.iter().fold(body.to_string(), |text, rule| {
        let patched = rule.apply(&text);
        if patched != text {
            log::debug!("Patch rule '{}' changed the body", rule.name);
        }
        patched
    })
}
