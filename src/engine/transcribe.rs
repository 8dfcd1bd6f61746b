//! Orthography to bracketed broad IPA.
//!
//! The stage order is load-bearing: prosodic breaks are taken out before
//! encoding so a period never becomes a syllable delimiter, boundary glyphs
//! become delimiters before `ə` is reused as a vowel, and syllabification only
//! ever sees single-character placeholders.

use std::fmt;

use unicode_normalization::UnicodeNormalization;

use crate::{Rule, apply_rules};

use super::boundary::BoundaryResolver;
use super::syllabify::Syllabifier;

/// One step of [`Transcriber::run`], in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Normalized,
    Resolved,
    Prosody,
    Delimiters,
    Encoded,
    Syllabified,
    Adjusted,
    Decoded,
    Spaced,
    Bracketed,
}

impl Stage {
    pub const ALL: [Stage; 10] = [
        Stage::Normalized,
        Stage::Resolved,
        Stage::Prosody,
        Stage::Delimiters,
        Stage::Encoded,
        Stage::Syllabified,
        Stage::Adjusted,
        Stage::Decoded,
        Stage::Spaced,
        Stage::Bracketed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Normalized => "normalized",
            Stage::Resolved => "resolved",
            Stage::Prosody => "prosody",
            Stage::Delimiters => "delimiters",
            Stage::Encoded => "encoded",
            Stage::Syllabified => "syllabified",
            Stage::Adjusted => "adjusted",
            Stage::Decoded => "decoded",
            Stage::Spaced => "spaced",
            Stage::Bracketed => "bracketed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The phonemic transcriber: boundary resolution, rule passes and
/// syllabification wired in their fixed order.
#[derive(Debug, Clone)]
pub(crate) struct Transcriber {
    pub resolver: BoundaryResolver,
    pub prosody: Vec<Rule>,
    pub delimiters: Vec<Rule>,
    pub encode: Vec<Rule>,
    pub syllabifier: Syllabifier,
    pub post_fix: Vec<Rule>,
    pub decode: Vec<Rule>,
}

impl Transcriber {
    pub fn run(&self, text: &str) -> String {
        self.run_observed(text, &mut |_, _| {})
    }

    /// Like [`run`](Self::run), handing every intermediate string to `observe`.
    pub fn run_observed(&self, text: &str, observe: &mut dyn FnMut(Stage, &str)) -> String {
        let normalized: String = text.nfc().collect();
        observe(Stage::Normalized, &normalized);

        let resolved = self.resolver.resolve(&normalized);
        observe(Stage::Resolved, &resolved);

        let prosody = apply_rules(&resolved, &self.prosody);
        observe(Stage::Prosody, &prosody);

        let delimited = apply_rules(&prosody, &self.delimiters);
        observe(Stage::Delimiters, &delimited);

        let encoded = apply_rules(&delimited, &self.encode);
        observe(Stage::Encoded, &encoded);

        let syllabified =
            encoded.split(' ').map(|word| self.syllabifier.syllabify(word)).collect::<Vec<_>>().join(" ");
        observe(Stage::Syllabified, &syllabified);

        let adjusted = apply_rules(&syllabified, &self.post_fix);
        observe(Stage::Adjusted, &adjusted);

        let decoded = apply_rules(&adjusted, &self.decode);
        observe(Stage::Decoded, &decoded);

        let spaced = space_breaks(&decoded);
        observe(Stage::Spaced, &spaced);

        let bracketed = format!("[{spaced}]");
        observe(Stage::Bracketed, &bracketed);
        bracketed
    }
}

/// Collapse every run of delimiters and spaces around break pipes into a
/// single spaced break, then drop breaks at either end.
fn space_breaks(text: &str) -> String {
    let spaced = regex!(r"[.\s]*\|[.\s|]*").replace_all(text, |caps: &regex::Captures<'_>| {
        if caps[0].matches('|').count() >= 2 { " || " } else { " | " }
    });
    spaced.trim_matches(|c: char| c == '|' || c.is_whitespace()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_runs_collapse() {
        assert_eq!(space_breaks("ka.| ki.|.|"), "ka | ki");
        assert_eq!(space_breaks("ka.|.| ki"), "ka || ki");
        assert_eq!(space_breaks("ka. |.|.|. ki"), "ka || ki");
        assert_eq!(space_breaks("|.| ka"), "ka");
        assert_eq!(space_breaks("ka.ta"), "ka.ta");
        assert_eq!(space_breaks(""), "");
    }

    #[test]
    fn stage_names_are_unique() {
        let mut names: Vec<_> = Stage::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Stage::ALL.len());
        assert_eq!(Stage::Syllabified.to_string(), "syllabified");
    }
}
