//! Transformation engines.
//!
//! Each engine is a pure function of its input string and the immutable
//! tables it was built with. They compose like this:
//!
//! ```text
//! raw line
//!   │  BoundaryResolver::resolve           (boundary.rs)
//!   v
//! orthography ─────────────────────────────────────────────┐
//!   │  Transcriber::run                    (transcribe.rs)  │  ScriptRenderer::render
//!   │    encode rules (crate::rules::phonemic)              │  (script.rs)
//!   │    Syllabifier::syllabify            (syllabify.rs)   │    encode rules
//!   │      Template::match_len             (template.rs)    │    glyph lookup / merge
//!   │    post-fix + decode rules                            │    post-processing
//!   v                                                       v
//! [ipa]                                                   script
//! ```
//!
//! ## Responsibilities by module
//!
//! - `boundary.rs`: single left-to-right scan that rewrites `-` markers.
//! - `template.rs`: compiles the syllable template language into anchored
//!   matchers (class / literal / optional / lookahead nodes).
//! - `syllabify.rs`: first-match-wins segmentation with a one-character
//!   fallback.
//! - `transcribe.rs`: the ordered phonemic stages, optionally recording a
//!   snapshot after each one.
//! - `script.rs`: glyph model, separate and merged rendering.
//!
//! ## Debugging
//!
//! Engines log through `tracing`: unresolved boundary markers at `warn`,
//! syllabifier fallbacks at `trace`. The CLI reads its filter from
//! `NGIMETE_LOG`.

#[path = "engine/boundary.rs"]
mod boundary;
#[path = "engine/script.rs"]
mod script;
#[path = "engine/syllabify.rs"]
mod syllabify;
#[path = "engine/template.rs"]
mod template;
#[path = "engine/transcribe.rs"]
mod transcribe;

pub use boundary::{BoundaryResolver, BoundaryRule};
pub use script::{Glyph, Marks, ScriptMode, ScriptRenderer, Slots};
pub use syllabify::Syllabifier;
pub use template::Template;
pub use transcribe::Stage;
pub(crate) use transcribe::Transcriber;
