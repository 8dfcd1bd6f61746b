use crate::Rule;
use crate::engine::{BoundaryResolver, BoundaryRule, Glyph, Marks, ScriptMode, ScriptRenderer, Syllabifier, Transcriber};
use crate::error::ConfigError;
use crate::rules::classes::{ClassTable, GroupTable};
use crate::rules::{orthography, phonemic, script};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use unicode_normalization::UnicodeNormalization;

pub use crate::engine::Stage;

static DEFAULT_PIPELINE: Lazy<Pipeline> =
    Lazy::new(|| Pipeline::new(Config::default()).expect("built-in configuration must compile"));

/// Every table the pipeline runs on.
///
/// `Config::default()` is the built-in Ngimete configuration. Fields are
/// public so single tables can be swapped before building a [`Pipeline`];
/// nothing is validated until [`Pipeline::new`].
#[derive(Debug, Clone)]
pub struct Config {
    pub classes: ClassTable,
    /// Character written for a morpheme boundary in raw text.
    pub marker: char,
    pub boundary_rules: Vec<BoundaryRule>,
    pub boundary_cleanup: Vec<Rule>,

    pub prosody_rules: Vec<Rule>,
    pub delimiter_rules: Vec<Rule>,
    pub encode_rules: Vec<Rule>,
    pub post_fix_rules: Vec<Rule>,
    pub decode_rules: Vec<Rule>,
    /// Syllable template sources, tried in order.
    pub templates: Vec<String>,
    pub groups: GroupTable,
    pub syllable_delimiter: char,

    pub script_encode_rules: Vec<Rule>,
    pub glyphs: HashMap<char, Glyph>,
    pub marks: Marks,
    pub filler: char,
    pub secondary_bases: Vec<char>,
    pub non_mergeable_bases: Vec<char>,
    pub minor_break: char,
    pub major_break: char,
    pub wide_space: char,
}

impl Default for Config {
    fn default() -> Self {
        let classes = ClassTable::default();
        let boundary_rules = orthography::boundary_rules(&classes);

        Self {
            classes,
            marker: orthography::MARKER,
            boundary_rules,
            boundary_cleanup: orthography::cleanup_rules(),

            prosody_rules: phonemic::prosody_rules(),
            delimiter_rules: phonemic::boundary_delimiter_rules(),
            encode_rules: phonemic::encode_rules(),
            post_fix_rules: phonemic::post_fix_rules(),
            decode_rules: phonemic::decode_rules(),
            templates: phonemic::syllable_templates(),
            groups: GroupTable::default(),
            syllable_delimiter: phonemic::SYLLABLE_DELIMITER,

            script_encode_rules: script::encode_rules(),
            glyphs: script::glyph_table(),
            marks: script::MARKS,
            filler: script::FILLER,
            secondary_bases: script::secondary_bases(),
            non_mergeable_bases: script::non_mergeable_bases(),
            minor_break: script::MINOR_BREAK,
            major_break: script::MAJOR_BREAK,
            wide_space: script::WIDE_SPACE,
        }
    }
}

impl Config {
    /// Replace the syllable templates.
    pub fn with_templates<I, S>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates = templates.into_iter().map(Into::into).collect();
        self
    }
}

/// A compiled configuration. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct Pipeline {
    resolver: BoundaryResolver,
    transcriber: Transcriber,
    renderer: ScriptRenderer,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let syllabifier = Syllabifier::compile(&config.templates, &config.groups, config.syllable_delimiter)?;
        let resolver = BoundaryResolver::new(config.marker, config.boundary_rules, config.boundary_cleanup);

        tracing::debug!(
            templates = config.templates.len(),
            glyphs = config.glyphs.len(),
            "built pipeline"
        );

        let transcriber = Transcriber {
            resolver: resolver.clone(),
            prosody: config.prosody_rules,
            delimiters: config.delimiter_rules,
            encode: config.encode_rules,
            syllabifier,
            post_fix: config.post_fix_rules,
            decode: config.decode_rules,
        };

        let renderer = ScriptRenderer {
            encode: config.script_encode_rules,
            table: config.glyphs,
            marks: config.marks,
            filler: config.filler,
            secondary_bases: config.secondary_bases,
            non_mergeable_bases: config.non_mergeable_bases,
            minor_break: config.minor_break,
            major_break: config.major_break,
            wide_space: config.wide_space,
        };

        Ok(Self { resolver, transcriber, renderer })
    }

    /// The lazily built pipeline behind the free functions.
    pub fn builtin() -> &'static Pipeline {
        &DEFAULT_PIPELINE
    }

    /// NFC-normalize `text` and resolve its boundary markers.
    pub fn resolve_orthography(&self, text: &str) -> String {
        let normalized: String = text.nfc().collect();
        self.resolver.resolve(&normalized)
    }

    /// Bracketed broad IPA for `text`.
    pub fn transcribe(&self, text: &str) -> String {
        self.transcriber.run(text)
    }

    /// Featural script for `text`; boundary markers are resolved first.
    pub fn render_script(&self, text: &str, mode: ScriptMode) -> String {
        self.renderer.render(&self.resolve_orthography(text), mode)
    }

    /// Transcribe `text`, keeping the intermediate string of every stage.
    pub fn trace(&self, text: &str) -> TranscriptionTrace {
        let start = Instant::now();
        let mut stages = Vec::with_capacity(Stage::ALL.len());

        let output = self.transcriber.run_observed(text, &mut |stage, snapshot| {
            stages.push(StageSnapshot { stage, text: snapshot.to_string(), at: start.elapsed() });
        });

        TranscriptionTrace { input: text.to_string(), stages, output, elapsed: start.elapsed() }
    }

    pub fn syllabifier(&self) -> &Syllabifier {
        &self.transcriber.syllabifier
    }

    pub fn script_renderer(&self) -> &ScriptRenderer {
        &self.renderer
    }
}

/// Intermediate string after one transcription stage.
#[derive(Debug, Clone)]
pub struct StageSnapshot {
    pub stage: Stage,
    pub text: String,
    /// Time since the start of the run when the stage finished.
    pub at: Duration,
}

/// Result of [`Pipeline::trace`].
#[derive(Debug, Clone)]
pub struct TranscriptionTrace {
    pub input: String,
    /// One entry per [`Stage`], in execution order.
    pub stages: Vec<StageSnapshot>,
    /// Same as [`Pipeline::transcribe`] on the input.
    pub output: String,
    pub elapsed: Duration,
}

impl TranscriptionTrace {
    pub fn stage(&self, stage: Stage) -> Option<&str> {
        self.stages.iter().find(|s| s.stage == stage).map(|s| s.text.as_str())
    }
}

/// Resolve morpheme-boundary markers with the built-in configuration.
///
/// # Example
/// ```
/// assert_eq!(ngimete::resolve_orthography("ka-ta"), "kāta");
/// ```
pub fn resolve_orthography(text: &str) -> String {
    DEFAULT_PIPELINE.resolve_orthography(text)
}

/// Bracketed broad IPA with the built-in configuration.
///
/// # Example
/// ```
/// assert_eq!(ngimete::transcribe("ka, ki."), "[ka | ki]");
/// ```
pub fn transcribe(text: &str) -> String {
    DEFAULT_PIPELINE.transcribe(text)
}

/// Featural script with the built-in configuration.
pub fn render_script(text: &str, mode: ScriptMode) -> String {
    DEFAULT_PIPELINE.render_script(text, mode)
}
