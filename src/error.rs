//! Configuration-time errors.
//!
//! Transformations themselves never fail: unknown input passes through. The
//! only failures are malformed static configuration, reported once when a
//! [`Pipeline`](crate::Pipeline) is built.

/// A rule table or syllable template that cannot be compiled.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("template `{template}`: optional group opened at offset {position} is never closed")]
    UnclosedGroup { template: String, position: usize },

    #[error("template `{template}`: `)` at offset {position} has no matching `(`")]
    UnmatchedClose { template: String, position: usize },

    #[error("template `{template}`: lookahead opened at offset {position} is never closed")]
    UnclosedLookahead { template: String, position: usize },

    #[error("template `{template}`: invalid lookahead body")]
    InvalidLookahead {
        template: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule `{name}`: invalid pattern")]
    InvalidRule {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// A name or number that does not denote any variant of a selector enum
/// (script mode, layout, representation).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
}
