//! Syllable template compiler and matcher.
//!
//! Templates are short patterns over the encoded alphabet:
//!
//! - a character with an entry in the [`GroupTable`] stands for its whole class
//!   (`2` = any consonant);
//! - `(`…`)` wraps an optional segment;
//! - `(?=`…`)` / `(?!`…`)` is a lookahead whose body is an ordinary regular
//!   expression, evaluated at the current position without consuming input;
//! - anything else matches itself.
//!
//! The `regex` crate has no lookaround, so templates compile to a small node
//! list matched by backtracking instead of being rewritten into one regex.
//!
//! ```text
//! "(2)13(?![aeiou])"
//!   Optional[Class(2)] Class(1) Class(3) Lookahead(!, ^(?:[aeiou]))
//! ```

use regex::Regex;

use crate::CharClass;
use crate::error::ConfigError;
use crate::rules::classes::GroupTable;

#[derive(Debug, Clone)]
enum Node {
    Class(CharClass),
    Literal(char),
    Optional(Vec<Node>),
    Lookahead { negated: bool, body: Regex },
}

/// A compiled syllable template, anchored at the start of its input.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    nodes: Vec<Node>,
}

impl Template {
    pub fn compile(source: &str, groups: &GroupTable) -> Result<Self, ConfigError> {
        let nodes = parse(source, groups)?;
        tracing::debug!(template = source, nodes = nodes.len(), "compiled syllable template");
        Ok(Self { source: source.to_string(), nodes })
    }

    /// The template text this matcher was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Length in bytes of the longest-first match at the start of `input`.
    ///
    /// Optional segments are greedy and give their input back when the rest
    /// of the template would otherwise fail. A zero-length match is returned
    /// as `Some(0)`; callers decide what that means.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        match_nodes(&self.nodes, input, 0, &|end| Some(end))
    }
}

fn match_nodes(nodes: &[Node], input: &str, pos: usize, next: &dyn Fn(usize) -> Option<usize>) -> Option<usize> {
    let Some((first, rest)) = nodes.split_first() else {
        return next(pos);
    };

    match first {
        Node::Class(class) => {
            let ch = input[pos..].chars().next()?;
            if !class.contains(ch) {
                return None;
            }
            match_nodes(rest, input, pos + ch.len_utf8(), next)
        }
        Node::Literal(lit) => {
            let ch = input[pos..].chars().next()?;
            if ch != *lit {
                return None;
            }
            match_nodes(rest, input, pos + ch.len_utf8(), next)
        }
        Node::Optional(inner) => match_nodes(inner, input, pos, &|after| match_nodes(rest, input, after, next))
            .or_else(|| match_nodes(rest, input, pos, next)),
        Node::Lookahead { negated, body } => {
            if body.is_match(&input[pos..]) == *negated {
                return None;
            }
            match_nodes(rest, input, pos, next)
        }
    }
}

// --- Parsing -----------------------------------------------------------------

const LOOKAHEAD_PREFIXES: [(&str, bool); 2] = [("(?=", false), ("(?!", true)];

fn parse(source: &str, groups: &GroupTable) -> Result<Vec<Node>, ConfigError> {
    // Open optional groups: (offset of `(`, nodes collected so far in the enclosing level).
    let mut frames: Vec<(usize, Vec<Node>)> = Vec::new();
    let mut current: Vec<Node> = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];

        if let Some(&(prefix, negated)) = LOOKAHEAD_PREFIXES.iter().find(|(prefix, _)| rest.starts_with(*prefix)) {
            let body_start = pos + prefix.len();
            let body_end = find_lookahead_end(source, body_start)
                .ok_or_else(|| ConfigError::UnclosedLookahead { template: source.to_string(), position: pos })?;
            let body = &source[body_start..body_end];
            let body = Regex::new(&format!("^(?:{body})"))
                .map_err(|err| ConfigError::InvalidLookahead { template: source.to_string(), source: err })?;
            current.push(Node::Lookahead { negated, body });
            pos = body_end + 1;
            continue;
        }

        let Some(ch) = rest.chars().next() else { break };
        match ch {
            '(' => frames.push((pos, std::mem::take(&mut current))),
            ')' => {
                let (_, mut outer) = frames
                    .pop()
                    .ok_or_else(|| ConfigError::UnmatchedClose { template: source.to_string(), position: pos })?;
                outer.push(Node::Optional(std::mem::take(&mut current)));
                current = outer;
            }
            _ => match groups.get(ch) {
                Some(class) => current.push(Node::Class(class.clone())),
                None => current.push(Node::Literal(ch)),
            },
        }
        pos += ch.len_utf8();
    }

    if let Some((position, _)) = frames.pop() {
        return Err(ConfigError::UnclosedGroup { template: source.to_string(), position });
    }
    Ok(current)
}

/// Byte offset of the `)` closing a lookahead whose body starts at `start`.
///
/// Nested parentheses are counted; escaped characters and bracket
/// expressions never affect the depth.
fn find_lookahead_end(source: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_brackets = false;
    let mut chars = source[start..].char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '[' if !in_brackets => in_brackets = true,
            ']' if in_brackets => in_brackets = false,
            '(' if !in_brackets => depth += 1,
            ')' if !in_brackets => {
                if depth == 0 {
                    return Some(start + offset);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(source: &str) -> Template {
        Template::compile(source, &GroupTable::default()).unwrap()
    }

    #[test]
    fn class_and_literal_nodes() {
        let t = compile("2a");
        assert_eq!(t.match_len("ka"), Some(2));
        assert_eq!(t.match_len("ke"), None);
        assert_eq!(t.match_len("aa"), None);
    }

    #[test]
    fn optional_segment_is_greedy_but_backtracks() {
        let t = compile("(2)1");
        assert_eq!(t.match_len("ka"), Some(2));
        assert_eq!(t.match_len("a"), Some(1));
        assert_eq!(t.match_len("k"), None);

        // On "ak" the optional vowel has to be given back.
        let t = compile("(1)1");
        assert_eq!(t.match_len("aa"), Some(2));
        assert_eq!(t.match_len("ak"), Some(1));
    }

    #[test]
    fn nested_optional_segments() {
        let t = compile("((2)2)1");
        assert_eq!(t.match_len("ska"), Some(3));
        assert_eq!(t.match_len("ka"), Some(2));
        assert_eq!(t.match_len("a"), Some(1));
    }

    #[test]
    fn negative_lookahead_blocks_vowel_onsets() {
        let t = compile("(2)13(?![aeiouɑəyAEIOUQ])");
        assert_eq!(t.match_len("leŋki"), Some("leŋ".len()));
        assert_eq!(t.match_len("lema"), None);
        // End of input satisfies a negative lookahead.
        assert_eq!(t.match_len("am"), Some(2));
    }

    #[test]
    fn positive_lookahead_does_not_consume() {
        let t = compile("2(?=1)");
        assert_eq!(t.match_len("ka"), Some(1));
        assert_eq!(t.match_len("kk"), None);
    }

    #[test]
    fn lookahead_body_with_nested_groups_and_brackets() {
        let t = compile("1(?!(s|[()])\\))");
        assert_eq!(t.match_len("at"), Some(1));
        assert_eq!(t.match_len("as)"), None);
        assert_eq!(t.match_len("a(x"), Some(1));
        assert_eq!(t.match_len("a()"), None);
        assert_eq!(t.match_len("a))"), None);
        assert_eq!(t.source(), "1(?!(s|[()])\\))");
    }

    #[test]
    fn multibyte_classes() {
        let t = compile("21");
        assert_eq!(t.match_len("ŋɑ"), Some("ŋɑ".len()));
    }

    #[test]
    fn malformed_templates_are_rejected() {
        let groups = GroupTable::default();
        assert!(matches!(
            Template::compile("(21", &groups),
            Err(ConfigError::UnclosedGroup { position: 0, .. })
        ));
        assert!(matches!(
            Template::compile("21)", &groups),
            Err(ConfigError::UnmatchedClose { position: 2, .. })
        ));
        assert!(matches!(
            Template::compile("1(?![aeiou", &groups),
            Err(ConfigError::UnclosedLookahead { position: 1, .. })
        ));
        assert!(matches!(Template::compile("1(?=[)", &groups), Err(ConfigError::UnclosedLookahead { .. })));
        assert!(matches!(Template::compile("1(?=a{2,1})", &groups), Err(ConfigError::InvalidLookahead { .. })));
    }
}
