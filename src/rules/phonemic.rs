//! Rule tables for the phonemic transcriber.
//!
//! Multi-letter sounds are first collapsed into single placeholder characters
//! so that syllable templates can treat them as one segment, then expanded to
//! their IPA symbols once syllabification and the phonetic fixes are done:
//!
//! ```text
//! placeholder  M    N    S    B   D   G   A   E   I   O   U   Q
//! orthography  mbb  ndd  ts   mb  nd  ngg á   é   í   ó   ú   är
//! IPA          m.b  n.d  t͡s   ᵐb  ⁿd  ᵑɡ  aː  eː  iː  oː  uː  ɑː
//! ```
//!
//! Every list is applied strictly in order.

use crate::Rule;

pub const SYLLABLE_DELIMITER: char = '.';
pub const MINOR_BREAK: &str = "|";
pub const MAJOR_BREAK: &str = "||";

/// Sentence punctuation to prosodic breaks. Runs before encoding so the
/// period can never be confused with the syllable delimiter.
pub fn prosody_rules() -> Vec<Rule> {
    vec![
        rule! { name: "period", lit: "." => MAJOR_BREAK },
        rule! { name: "question mark", lit: "?" => MAJOR_BREAK },
        rule! { name: "exclamation mark", lit: "!" => MAJOR_BREAK },
        rule! { name: "comma", lit: "," => MINOR_BREAK },
    ]
}

/// Resolved boundary glyphs to syllable delimiters.
pub fn boundary_delimiter_rules() -> Vec<Rule> {
    vec![
        rule! { name: "z boundary", lit: "z" => "." },
        rule! { name: "c boundary", lit: "c" => "." },
        rule! { name: "ə boundary", lit: "ə" => "." },
        rule! { name: "ā boundary", lit: "ā" => "a." },
    ]
}

/// Orthography to placeholder alphabet.
pub fn encode_rules() -> Vec<Rule> {
    vec![
        // multigraphs
        rule! { name: "mbb", lit: "mbb" => "M" },
        rule! { name: "ndd", lit: "ndd" => "N" },
        rule! { name: "palatal stop", re: "gy|ky" => "c" },
        rule! { name: "ts", lit: "ts" => "S" },
        rule! { name: "palatal glide", lit: "y" => "j" },
        // prenasalization
        rule! { name: "nd", lit: "nd" => "D" },
        rule! { name: "mb", lit: "mb" => "B" },
        rule! { name: "ngg", lit: "ngg" => "G" },
        rule! { name: "ng", lit: "ng" => "ŋ" },
        // glottal
        rule! { name: "glottal stop", lit: "'" => "ʔ" },
        // long vowels
        rule! { name: "long a", lit: "á" => "A" },
        rule! { name: "long e", lit: "é" => "E" },
        rule! { name: "long i", lit: "í" => "I" },
        rule! { name: "long o", lit: "ó" => "O" },
        rule! { name: "long u", lit: "ú" => "U" },
        // other vowels
        rule! { name: "back a", lit: "ä" => "ɑ" },
        rule! { name: "schwa", lit: "ë" => "ə" },
        rule! { name: "front rounded", lit: "ü" => "y" },
        // after `ä`, so plain `är` reaches the decode pass as `ɑ.r`
        rule! { name: "long back a", lit: "är" => "Q" },
        rule! { name: "double delimiter", lit: ".." => "." },
    ]
}

/// Phonetic adjustments over the syllabified placeholder string.
pub fn post_fix_rules() -> Vec<Rule> {
    vec![
        // le.ŋa stays, lem.a → le.ma
        rule! { name: "nasal onset", re: r"([mnŋ])\.([aeiouɑəyAEIOUQ])" => ".${1}${2}" },
        rule! { name: "fw cluster", re: r"(\.?)f\.w" => "${1}fw" },
        rule! { name: "geminate nasal", re: r"\.([MN])" => "${1}" },
        rule! {
            name: "sibilant coda",
            re: r"([bdfghklmnpstvwjcŋʔMNSBDG])([aeiouɑəyAEIOUQ])\.s([^aeiouɑəyAEIOUQ]|$)" => "${1}${2}s${3}",
        },
        rule! { name: "dental n", lit: "n" => "n\u{32A}" },
        rule! { name: "script g", lit: "g" => "ɡ" },
        rule! { name: "ao diphthong", lit: "a.o" => "ao\u{32F}" },
        rule! { name: "eo diphthong", lit: "e.o" => "eo\u{32F}" },
        rule! { name: "triple delimiter", lit: "..." => "." },
        rule! { name: "word-initial delimiter", lit: " .." => " " },
    ]
}

/// Placeholder alphabet back to IPA.
pub fn decode_rules() -> Vec<Rule> {
    vec![
        rule! { name: "long a", lit: "A" => "aː" },
        rule! { name: "long e", lit: "E" => "eː" },
        rule! { name: "long i", lit: "I" => "iː" },
        rule! { name: "long o", lit: "O" => "oː" },
        rule! { name: "long u", lit: "U" => "uː" },
        rule! { name: "long back a", lit: "Q" => "ɑː" },
        rule! { name: "mb", lit: "B" => "ᵐb" },
        rule! { name: "nd", lit: "D" => "ⁿd" },
        rule! { name: "ngg", lit: "G" => "ᵑɡ" },
        rule! { name: "ts", lit: "S" => "t\u{361}s" },
        rule! { name: "mbb", lit: "M" => "m.b" },
        rule! { name: "ndd", lit: "N" => "n.d" },
        rule! { name: "empty syllable", lit: ".." => "" },
        rule! { name: "split long back a", lit: "ɑ.r" => "ɑː" },
    ]
}

/// Syllable shapes, most specific first.
///
/// `1` vowel, `2` consonant, `3` nasal, `4` sibilant; `(…)` is optional and
/// lookaheads are plain regex. A sibilant coda needs an onset: `as` stays
/// two chunks.
pub fn syllable_templates() -> Vec<String> {
    vec![
        "214(?![aeiouɑəyAEIOUQ])".to_string(),
        "(2)13(?![aeiouɑəyAEIOUQ])".to_string(),
        "(2)1".to_string(),
    ]
}
