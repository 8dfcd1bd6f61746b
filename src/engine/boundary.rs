//! Morpheme-boundary resolution.
//!
//! The romanization writes every morpheme juncture as `-`; how the juncture is
//! actually spelled depends on the letters around it. Resolution is a single
//! left-to-right scan:
//!
//! ```text
//! input   k a - t a      left = last char already written to the output
//!             ^          right = next char of the input
//! output  k a ā t a  ──▶ cleanup (aā → ā) ──▶ k ā t a
//! ```
//!
//! Left context is read from the output, so a glyph written for one marker is
//! what the next marker sees; it is never itself re-examined.

use crate::{CharClass, Rule, apply_rules};

/// `(left class, right class) → glyph` entry of the boundary table.
#[derive(Debug, Clone)]
pub struct BoundaryRule {
    pub name: &'static str,
    pub left: CharClass,
    pub right: CharClass,
    pub glyph: char,
}

impl BoundaryRule {
    pub fn new(name: &'static str, left: &CharClass, right: &CharClass, glyph: char) -> Self {
        Self { name, left: left.clone(), right: right.clone(), glyph }
    }

    fn applies(&self, left: Option<char>, right: Option<char>) -> bool {
        self.left.matches(left) && self.right.matches(right)
    }
}

/// Rewrites boundary markers into their context-dependent glyphs.
#[derive(Debug, Clone)]
pub struct BoundaryResolver {
    marker: char,
    rules: Vec<BoundaryRule>,
    cleanup: Vec<Rule>,
}

impl BoundaryResolver {
    pub fn new(marker: char, rules: Vec<BoundaryRule>, cleanup: Vec<Rule>) -> Self {
        Self { marker, rules, cleanup }
    }

    /// Resolve every marker in `text`.
    ///
    /// Markers no rule covers (for example at the start of a word) are kept
    /// as-is and reported at `warn` level.
    pub fn resolve(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out: Vec<char> = Vec::with_capacity(chars.len());

        for (i, &ch) in chars.iter().enumerate() {
            if ch != self.marker {
                out.push(ch);
                continue;
            }

            let left = out.last().copied();
            let right = chars.get(i + 1).copied();

            match self.rules.iter().find(|rule| rule.applies(left, right)) {
                Some(rule) => out.push(rule.glyph),
                None => {
                    tracing::warn!(?left, ?right, position = i, input = text, "unresolved boundary marker");
                    out.push(ch);
                }
            }
        }

        let resolved: String = out.into_iter().collect();
        apply_rules(&resolved, &self.cleanup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::classes::ClassTable;
    use crate::rules::orthography::{MARKER, boundary_rules, cleanup_rules};

    fn resolver() -> BoundaryResolver {
        BoundaryResolver::new(MARKER, boundary_rules(&ClassTable::default()), cleanup_rules())
    }

    #[test]
    fn text_without_markers_is_unchanged() {
        let r = resolver();
        for input in ["", "ngimete", "yë 'ama nga", "ndoní, lawana."] {
            assert_eq!(r.resolve(input), input);
        }
    }

    #[test]
    fn rule_precedence() {
        let r = resolver();
        // (input, expected)
        let cases = [
            ("ka-ta", "kāta"),  // low vowel + C
            ("ko-ta", "koəta"), // P + C wins over V + A
            ("ke-ma", "kezma"), // V + C1
            ("ke-ga", "kecga"), // V + D
            ("ke-ta", "kezta"), // V + A
            ("kn-ta", "knəta"), // C + C
            ("ke-a", "keca"),   // V + V
            ("ka-a", "kaca"),   // low vowel before a vowel is plain hiatus
        ];
        for (input, expected) in cases {
            assert_eq!(r.resolve(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn unresolvable_markers_pass_through() {
        let r = resolver();
        assert_eq!(r.resolve("-ka"), "-ka");
        assert_eq!(r.resolve("ka-"), "ka-");
        assert_eq!(r.resolve("ka - ta"), "ka - ta");
    }

    #[test]
    fn adjacent_markers_stay_unresolved() {
        let r = resolver();
        assert_eq!(r.resolve("ka--ta"), "ka--ta");
    }

    #[test]
    fn multiple_markers_in_one_word() {
        let r = resolver();
        assert_eq!(r.resolve("ka-li-ma"), "kāliəma");
        assert_eq!(r.resolve("ke-a-ta"), "kecāta");
    }
}
