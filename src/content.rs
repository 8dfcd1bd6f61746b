//! Multi-line aggregation.
//!
//! [`Content`] runs every line of a block through the pipeline once and keeps
//! all representations side by side, so callers can print any subset in
//! either layout without re-running the rules.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use unicode_normalization::UnicodeNormalization;

use crate::api::Pipeline;
use crate::engine::ScriptMode;
use crate::error::UnknownVariant;

/// One output kind of a [`Line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    Orthography,
    Script(ScriptMode),
    Ipa,
}

impl Representation {
    /// Orthography, separate script, IPA.
    pub const DEFAULT_SET: [Representation; 3] =
        [Representation::Orthography, Representation::Script(ScriptMode::Separate), Representation::Ipa];
}

impl FromStr for Representation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ortho" | "orthography" | "o" => Ok(Representation::Orthography),
            "ipa" | "i" => Ok(Representation::Ipa),
            "script" | "s" => Ok(Representation::Script(ScriptMode::default())),
            "script-separate" | "separate" | "sep" => Ok(Representation::Script(ScriptMode::Separate)),
            "script-merged" | "merged" | "mer" | "condensed" => Ok(Representation::Script(ScriptMode::Merged)),
            _ => Err(UnknownVariant::new("representation", s)),
        }
    }
}

/// How [`Content::render`] arranges representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// All lines of the first representation, then all lines of the next.
    #[default]
    Sequential,
    /// For each line, every representation; lines separated by a blank line.
    Grouped,
}

impl FromStr for Layout {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Layout::Sequential),
            "grouped" | "group" | "alternate" => Ok(Layout::Grouped),
            _ => Err(UnknownVariant::new("layout", s)),
        }
    }
}

/// Every representation of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub orthography: String,
    /// `None` when the transcription is empty (`[]`).
    pub ipa: Option<String>,
    pub script_separate: String,
    pub script_merged: String,
}

impl Line {
    fn build(raw: &str, pipeline: &Pipeline) -> Self {
        let orthography = pipeline.resolve_orthography(raw);
        let ipa = pipeline.transcribe(raw);
        let renderer = pipeline.script_renderer();

        Line {
            ipa: (ipa != "[]").then_some(ipa),
            script_separate: renderer.render(&orthography, ScriptMode::Separate),
            script_merged: renderer.render(&orthography, ScriptMode::Merged),
            orthography,
        }
    }

    /// The requested representation, or `None` when it is empty.
    pub fn get(&self, representation: Representation) -> Option<&str> {
        let text = match representation {
            Representation::Orthography => self.orthography.as_str(),
            Representation::Ipa => self.ipa.as_deref()?,
            Representation::Script(ScriptMode::Separate) => self.script_separate.as_str(),
            Representation::Script(ScriptMode::Merged) => self.script_merged.as_str(),
        };
        (!text.is_empty()).then_some(text)
    }
}

/// A block of text with every line transcribed and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    lines: Vec<Line>,
}

impl Content {
    pub fn new(text: &str) -> Self {
        Self::with_pipeline(text, Pipeline::builtin())
    }

    /// Trim and NFC-normalize `text`, then process each `\n`-separated line
    /// with `pipeline`. Lines are processed in parallel; order is kept. Blank
    /// input has no lines.
    pub fn with_pipeline(text: &str, pipeline: &Pipeline) -> Self {
        let normalized: String = text.trim().nfc().collect();
        if normalized.is_empty() {
            return Self::default();
        }
        let raw: Vec<&str> = normalized.split('\n').map(|line| line.trim_end_matches('\r')).collect();
        let lines = raw.par_iter().map(|line| Line::build(line, pipeline)).collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Resolved orthography of every line.
    pub fn orthography_text(&self) -> String {
        self.join(Representation::Orthography)
    }

    /// Transcription of every line; empty transcriptions become empty lines.
    pub fn ipa_text(&self) -> String {
        self.join(Representation::Ipa)
    }

    pub fn script_text(&self, mode: ScriptMode) -> String {
        self.join(Representation::Script(mode))
    }

    fn join(&self, representation: Representation) -> String {
        self.lines.iter().map(|line| line.get(representation).unwrap_or("")).collect::<Vec<_>>().join("\n")
    }

    /// Serialize the chosen representations, in the order given.
    pub fn render(&self, shown: &[Representation], layout: Layout) -> String {
        match layout {
            Layout::Sequential => {
                let mut out = String::new();
                for &representation in shown {
                    out.push_str(&self.join(representation));
                    out.push('\n');
                }
                collapse_blank_runs(out.trim())
            }
            Layout::Grouped => self
                .lines
                .iter()
                .map(|line| shown.iter().filter_map(|&r| line.get(r)).collect::<Vec<_>>().join("\n"))
                .filter(|group| !group.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::new(text)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Representation::DEFAULT_SET, Layout::Sequential))
    }
}

/// Never leave more than one blank line in a row.
fn collapse_blank_runs(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("\n\n\n") {
        out = out.replace("\n\n\n", "\n\n");
    }
    out
}
