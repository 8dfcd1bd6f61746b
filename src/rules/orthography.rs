//! Boundary-marker resolution table.
//!
//! A `-` between two letters marks a morpheme juncture. Which glyph it becomes
//! depends on the letter classes on either side:
//!
//! ```text
//! a - C   → ā     (low vowel absorbs the break)
//! P - C   → ə
//! V - C1  → z
//! V - D   → c
//! V - A   → z
//! C - C   → ə
//! V - V   → c
//! ```
//!
//! Order matters: P ⊂ V and C1/A/D ⊂ C, so the narrow pairs come first.

use crate::engine::BoundaryRule;
use crate::rules::classes::ClassTable;
use crate::Rule;

pub const MARKER: char = '-';

pub const LOW_BOUNDARY: char = 'ā';
pub const CONSONANT_BOUNDARY: char = 'ə';
pub const HIATUS_BOUNDARY: char = 'c';
pub const ONSET_BOUNDARY: char = 'z';

pub fn boundary_rules(classes: &ClassTable) -> Vec<BoundaryRule> {
    vec![
        BoundaryRule::new("low+C", &classes.low_vowel, &classes.consonants, LOW_BOUNDARY),
        BoundaryRule::new("P+C", &classes.p, &classes.consonants, CONSONANT_BOUNDARY),
        BoundaryRule::new("V+C1", &classes.vowels, &classes.c1, ONSET_BOUNDARY),
        BoundaryRule::new("V+D", &classes.vowels, &classes.d, HIATUS_BOUNDARY),
        BoundaryRule::new("V+A", &classes.vowels, &classes.a, ONSET_BOUNDARY),
        BoundaryRule::new("C+C", &classes.consonants, &classes.consonants, CONSONANT_BOUNDARY),
        BoundaryRule::new("V+V", &classes.vowels, &classes.vowels, HIATUS_BOUNDARY),
    ]
}

/// Collapses the doubled low vowel left behind by `a-C`.
pub fn cleanup_rules() -> Vec<Rule> {
    vec![rule! { name: "low vowel collision", lit: "aā" => "ā" }]
}
