//! Featural script tables.
//!
//! Consonants share a base per place of articulation and mark voicing,
//! prenasalization or length with a diacritic slot; vowels are a carrier base
//! (`ᨔ` short, `ᨖ` long) plus slots. In merged mode a vowel's slots move onto
//! the preceding consonant.
//!
//! ```text
//! slot     left  top  special  bottom  right
//! mark     ᨙ     ᨗ    ᨛ        ᨘ       ᨚ
//! ```

use std::collections::HashMap;

use crate::Rule;
use crate::engine::{Glyph, Marks, Slots};

/// Rendered for every resolved boundary glyph.
pub const BOUNDARY: char = '\u{1A10}'; // ᨐ
/// Raw seam pushed after a merged long vowel; removed when rendering.
pub const FILLER: char = '\u{1A11}'; // ᨑ
pub const SHORT_CARRIER: char = '\u{1A14}'; // ᨔ
pub const LONG_CARRIER: char = '\u{1A16}'; // ᨖ
pub const MINOR_BREAK: char = '\u{1A1E}'; // ᨞
pub const MAJOR_BREAK: char = '\u{1A1F}'; // ᨟
pub const WIDE_SPACE: char = '\u{3000}';

pub const MARKS: Marks = Marks {
    left: '\u{1A19}',    // ᨙ
    top: '\u{1A17}',     // ᨗ
    special: '\u{1A1B}', // ᨛ
    bottom: '\u{1A18}',  // ᨘ
    right: '\u{1A1A}',   // ᨚ
};

/// Orthography to the script's placeholder alphabet.
pub fn encode_rules() -> Vec<Rule> {
    vec![
        // boundaries
        rule! { name: "ā boundary", lit: "ā" => format!("a{BOUNDARY}") },
        rule! { name: "c boundary", lit: "c" => BOUNDARY },
        rule! { name: "ə boundary", lit: "ə" => BOUNDARY },
        rule! { name: "z boundary", lit: "z" => BOUNDARY },
        // clusters
        rule! { name: "mbb", lit: "mbb" => "X" },
        rule! { name: "ndd", lit: "ndd" => "Y" },
        rule! { name: "mb", lit: "mb" => "B" },
        rule! { name: "nd", lit: "nd" => "D" },
        rule! { name: "ngg", lit: "ngg" => "G" },
        rule! { name: "ng", lit: "ng" => "N" },
        rule! { name: "ts", lit: "ts" => "T" },
        rule! { name: "palatal stop", re: "gy|ky" => "C" },
        rule! { name: "long back a", lit: "är" => "R" },
        rule! { name: "glottal stop", lit: "'" => "Q" },
        // punctuation
        rule! { name: "comma", lit: "," => format!(" {MINOR_BREAK}") },
        rule! { name: "sentence end", re: r"[.?!]" => format!(" {MAJOR_BREAK}") },
    ]
}

pub fn glyph_table() -> HashMap<char, Glyph> {
    let none = Slots::empty();
    HashMap::from([
        // stops
        ('p', Glyph::consonant('\u{1A03}', none)),
        ('b', Glyph::consonant('\u{1A03}', Slots::BOTTOM)),
        ('t', Glyph::consonant('\u{1A08}', none)),
        ('d', Glyph::consonant('\u{1A0A}', none)),
        ('C', Glyph::consonant('\u{1A07}', none)),
        ('k', Glyph::consonant('\u{1A0D}', none)),
        ('g', Glyph::consonant('\u{1A0D}', Slots::BOTTOM)),
        ('Q', Glyph::consonant('\u{1A00}', none)),
        // prenasalized
        ('B', Glyph::consonant('\u{1A03}', Slots::LEFT)),
        ('D', Glyph::consonant('\u{1A08}', Slots::LEFT)),
        ('G', Glyph::consonant('\u{1A0D}', Slots::LEFT)),
        // nasals
        ('m', Glyph::consonant('\u{1A05}', none)),
        ('n', Glyph::consonant('\u{1A04}', none)),
        ('N', Glyph::consonant('\u{1A0B}', none)),
        // fricatives and affricate
        ('f', Glyph::consonant('\u{1A02}', none)),
        ('v', Glyph::consonant('\u{1A02}', Slots::BOTTOM)),
        ('s', Glyph::consonant('\u{1A06}', none)),
        ('h', Glyph::consonant('\u{1A00}', Slots::BOTTOM)),
        ('T', Glyph::consonant('\u{1A09}', none)),
        // approximants
        ('w', Glyph::consonant('\u{1A0F}', none)),
        ('y', Glyph::consonant('\u{1A12}', none)),
        ('l', Glyph::consonant('\u{1A13}', none)),
        ('r', Glyph::consonant('\u{1A13}', Slots::BOTTOM)),
        // vowels
        ('a', Glyph::vowel(SHORT_CARRIER, none)),
        ('á', Glyph::vowel(LONG_CARRIER, none)),
        ('e', Glyph::vowel(SHORT_CARRIER, Slots::LEFT)),
        ('é', Glyph::vowel(LONG_CARRIER, Slots::LEFT)),
        ('i', Glyph::vowel(SHORT_CARRIER, Slots::TOP)),
        ('í', Glyph::vowel(LONG_CARRIER, Slots::TOP)),
        ('o', Glyph::vowel(SHORT_CARRIER, Slots::RIGHT)),
        ('ó', Glyph::vowel(LONG_CARRIER, Slots::RIGHT)),
        ('u', Glyph::vowel(SHORT_CARRIER, Slots::TOP | Slots::RIGHT)),
        ('ú', Glyph::vowel(LONG_CARRIER, Slots::TOP | Slots::RIGHT)),
        ('ä', Glyph::vowel(SHORT_CARRIER, Slots::BOTTOM)),
        ('R', Glyph::vowel(LONG_CARRIER, Slots::BOTTOM)),
        ('ë', Glyph::vowel(SHORT_CARRIER, Slots::SPECIAL)),
        ('ü', Glyph::vowel(SHORT_CARRIER, Slots::TOP | Slots::SPECIAL)),
        // geminate nasal clusters
        ('X', Glyph::multi(vec![Glyph::consonant('\u{1A05}', none), Glyph::consonant('\u{1A03}', Slots::BOTTOM)])),
        ('Y', Glyph::multi(vec![Glyph::consonant('\u{1A04}', none), Glyph::consonant('\u{1A0A}', none)])),
    ])
}

/// Bases that never take part in a merge. The built-in table maps no vowel
/// onto either of them; the list guards tables that do.
pub fn non_mergeable_bases() -> Vec<char> {
    vec![FILLER, BOUNDARY]
}

/// Vowel bases that leave a filler seam behind when merged.
pub fn secondary_bases() -> Vec<char> {
    vec![LONG_CARRIER]
}
