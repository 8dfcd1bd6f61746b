//! Featural script rendering.
//!
//! Text is first encoded into a placeholder alphabet (one character per
//! glyph), then every placeholder is looked up in the glyph table. A glyph is
//! a base character plus up to five diacritic slots:
//!
//! ```text
//!            top
//!   left   [base]   right        rendered: base left top special bottom right
//!          special
//!           bottom
//! ```
//!
//! In merged mode a vowel hands its slots to the consonant before it, so a CV
//! syllable becomes a single glyph. A merge never overwrites a slot: when the
//! consonant already holds any slot the vowel needs, the vowel keeps its own
//! carrier glyph.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::UnknownVariant;
use crate::{Rule, apply_rules};

bitflags::bitflags! {
    /// Diacritic slots of a glyph, declared in rendering order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Slots: u8 {
        const LEFT    = 1 << 0;
        const TOP     = 1 << 1;
        const SPECIAL = 1 << 2;
        const BOTTOM  = 1 << 3;
        const RIGHT   = 1 << 4;
    }
}

/// The mark character written for each slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks {
    pub left: char,
    pub top: char,
    pub special: char,
    pub bottom: char,
    pub right: char,
}

impl Marks {
    /// Mark for a single slot flag; `None` for an empty or combined set.
    pub fn get(&self, slot: Slots) -> Option<char> {
        if slot == Slots::LEFT {
            Some(self.left)
        } else if slot == Slots::TOP {
            Some(self.top)
        } else if slot == Slots::SPECIAL {
            Some(self.special)
        } else if slot == Slots::BOTTOM {
            Some(self.bottom)
        } else if slot == Slots::RIGHT {
            Some(self.right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyph {
    /// Passed through untouched; never merges and ends a merge chain.
    Raw { base: char },
    /// A cluster written with several bases. Merges go into the last part.
    Multi { parts: Vec<Glyph> },
    Simple { base: char, slots: Slots, vowel: bool, merged: bool },
}

impl Glyph {
    pub fn consonant(base: char, slots: Slots) -> Self {
        Glyph::Simple { base, slots, vowel: false, merged: false }
    }

    pub fn vowel(base: char, slots: Slots) -> Self {
        Glyph::Simple { base, slots, vowel: true, merged: false }
    }

    pub fn multi(parts: Vec<Glyph>) -> Self {
        Glyph::Multi { parts }
    }

    pub fn raw(base: char) -> Self {
        Glyph::Raw { base }
    }

    /// Base character; for a cluster, the base of its first part.
    pub fn base(&self) -> Option<char> {
        match self {
            Glyph::Raw { base } | Glyph::Simple { base, .. } => Some(*base),
            Glyph::Multi { parts } => parts.first().and_then(Glyph::base),
        }
    }

    /// Union of the slots of this glyph (and of every part of a cluster).
    pub fn slots(&self) -> Slots {
        match self {
            Glyph::Raw { .. } => Slots::empty(),
            Glyph::Simple { slots, .. } => *slots,
            Glyph::Multi { parts } => parts.iter().fold(Slots::empty(), |acc, part| acc | part.slots()),
        }
    }

    pub fn is_vowel(&self) -> bool {
        matches!(self, Glyph::Simple { vowel: true, .. })
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Glyph::Raw { .. })
    }

    /// Move `incoming` slots onto this glyph. Returns `false` and leaves the
    /// glyph untouched when it cannot host them.
    fn absorb(&mut self, incoming: Slots) -> bool {
        match self {
            Glyph::Raw { .. } => false,
            Glyph::Multi { parts } => parts.last_mut().is_some_and(|last| last.absorb(incoming)),
            Glyph::Simple { vowel: true, .. } | Glyph::Simple { merged: true, .. } => false,
            Glyph::Simple { slots, merged, .. } => {
                if slots.intersects(incoming) {
                    return false;
                }
                *slots |= incoming;
                *merged = true;
                true
            }
        }
    }

    pub fn write_to(&self, marks: &Marks, out: &mut String) {
        match self {
            Glyph::Raw { base } => out.push(*base),
            Glyph::Multi { parts } => parts.iter().for_each(|part| part.write_to(marks, out)),
            Glyph::Simple { base, slots, .. } => {
                out.push(*base);
                out.extend(slots.iter().filter_map(|slot| marks.get(slot)));
            }
        }
    }
}

/// How vowels are written relative to the consonant before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScriptMode {
    /// Every vowel on its own carrier.
    Separate,
    /// Vowel diacritics folded onto the preceding consonant when possible.
    #[default]
    Merged,
}

impl ScriptMode {
    pub fn name(self) -> &'static str {
        match self {
            ScriptMode::Separate => "separate",
            ScriptMode::Merged => "merged",
        }
    }
}

impl TryFrom<u8> for ScriptMode {
    type Error = UnknownVariant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ScriptMode::Separate),
            1 => Ok(ScriptMode::Merged),
            other => Err(UnknownVariant::new("script mode", other.to_string())),
        }
    }
}

impl FromStr for ScriptMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "separate" | "sep" | "0" => Ok(ScriptMode::Separate),
            "merged" | "mer" | "condensed" | "1" => Ok(ScriptMode::Merged),
            _ => Err(UnknownVariant::new("script mode", s)),
        }
    }
}

/// Renders orthographic text in the featural script.
#[derive(Debug, Clone)]
pub struct ScriptRenderer {
    pub(crate) encode: Vec<Rule>,
    pub(crate) table: HashMap<char, Glyph>,
    pub(crate) marks: Marks,
    pub(crate) filler: char,
    pub(crate) secondary_bases: Vec<char>,
    pub(crate) non_mergeable_bases: Vec<char>,
    pub(crate) minor_break: char,
    pub(crate) major_break: char,
    pub(crate) wide_space: char,
}

impl ScriptRenderer {
    pub fn render(&self, text: &str, mode: ScriptMode) -> String {
        let mut out = String::with_capacity(text.len() * 3);
        for glyph in self.glyphs(text, mode) {
            glyph.write_to(&self.marks, &mut out);
        }
        self.post_process(&out)
    }

    /// The glyph sequence for `text`, before marks are written and before
    /// post-processing.
    pub fn glyphs(&self, text: &str, mode: ScriptMode) -> Vec<Glyph> {
        let encoded = apply_rules(text, &self.encode);
        match mode {
            ScriptMode::Separate => {
                encoded.chars().map(|ch| self.table.get(&ch).cloned().unwrap_or_else(|| Glyph::raw(ch))).collect()
            }
            ScriptMode::Merged => self.merge(&encoded),
        }
    }

    fn merge(&self, encoded: &str) -> Vec<Glyph> {
        let mut pipeline: Vec<Glyph> = Vec::with_capacity(encoded.len());

        for ch in encoded.chars() {
            let Some(glyph) = self.table.get(&ch) else {
                pipeline.push(Glyph::raw(ch));
                continue;
            };

            let fresh = match pipeline.last() {
                None => true,
                Some(prev) => {
                    prev.is_raw()
                        || matches!(glyph, Glyph::Multi { .. })
                        || glyph.slots().contains(Slots::SPECIAL)
                        || glyph.base().is_some_and(|base| self.non_mergeable_bases.contains(&base))
                }
            };
            if fresh || !glyph.is_vowel() || glyph.slots().is_empty() {
                pipeline.push(glyph.clone());
                continue;
            }

            let merged = pipeline.last_mut().is_some_and(|prev| prev.absorb(glyph.slots()));
            if !merged {
                pipeline.push(glyph.clone());
            } else if glyph.base().is_some_and(|base| self.secondary_bases.contains(&base)) {
                pipeline.push(Glyph::raw(self.filler));
            }
        }

        pipeline
    }

    fn post_process(&self, rendered: &str) -> String {
        let text = self.collapse_breaks(rendered);

        let mut out = String::with_capacity(text.len());
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            let keep = ch != self.filler || prev.is_some_and(char::is_whitespace);
            if keep {
                out.push(if ch == ' ' { self.wide_space } else { ch });
            }
            prev = Some(ch);
        }
        out
    }

    /// Turn every run of spaces and break glyphs that holds a break into one
    /// spaced break, the major one if the run has any. Runs at either end are
    /// dropped.
    fn collapse_breaks(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut run = String::new();
        let mut strongest: Option<char> = None;

        for ch in text.chars() {
            if ch == ' ' || ch == self.minor_break || ch == self.major_break {
                run.push(ch);
                if ch == self.major_break || (ch == self.minor_break && strongest.is_none()) {
                    strongest = Some(ch);
                }
                continue;
            }

            match strongest.take() {
                Some(mark) if !out.is_empty() => {
                    out.push(' ');
                    out.push(mark);
                    out.push(' ');
                }
                Some(_) => {}
                None => out.push_str(&run),
            }
            run.clear();
            out.push(ch);
        }

        if strongest.is_none() {
            out.push_str(&run);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::classes::ClassTable;
    use crate::rules::script::{
        BOUNDARY, FILLER, LONG_CARRIER, MAJOR_BREAK, MARKS, MINOR_BREAK, SHORT_CARRIER, WIDE_SPACE, encode_rules,
        glyph_table, non_mergeable_bases, secondary_bases,
    };

    const K: char = '\u{1A0D}';
    const M: char = '\u{1A05}';
    const P: char = '\u{1A03}';

    fn renderer() -> ScriptRenderer {
        ScriptRenderer {
            encode: encode_rules(),
            table: glyph_table(),
            marks: MARKS,
            filler: FILLER,
            secondary_bases: secondary_bases(),
            non_mergeable_bases: non_mergeable_bases(),
            minor_break: MINOR_BREAK,
            major_break: MAJOR_BREAK,
            wide_space: WIDE_SPACE,
        }
    }

    fn s(chars: &[char]) -> String {
        chars.iter().collect()
    }

    #[test]
    fn cv_syllable_in_both_modes() {
        let r = renderer();
        assert_eq!(r.render("ki", ScriptMode::Separate), s(&[K, SHORT_CARRIER, MARKS.top]));
        assert_eq!(r.render("ki", ScriptMode::Merged), s(&[K, MARKS.top]));
    }

    #[test]
    fn marks_follow_slot_order() {
        let r = renderer();
        // g = k + bottom; the vowel's top mark is written before it.
        assert_eq!(r.render("gi", ScriptMode::Merged), s(&[K, MARKS.top, MARKS.bottom]));
    }

    #[test]
    fn shared_slot_blocks_merge() {
        let r = renderer();
        assert_eq!(r.render("gä", ScriptMode::Merged), s(&[K, MARKS.bottom, SHORT_CARRIER, MARKS.bottom]));
    }

    #[test]
    fn long_vowel_merge_leaves_filler_that_is_dropped() {
        let r = renderer();
        let glyphs = r.glyphs("kí", ScriptMode::Merged);
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[1], Glyph::raw(FILLER));
        assert_eq!(r.render("kí", ScriptMode::Merged), s(&[K, MARKS.top]));
    }

    #[test]
    fn vowels_never_merge_into_vowels() {
        let r = renderer();
        assert_eq!(r.render("ai", ScriptMode::Merged), s(&[SHORT_CARRIER, SHORT_CARRIER, MARKS.top]));
    }

    #[test]
    fn merged_consonant_takes_no_second_vowel() {
        let r = renderer();
        assert_eq!(r.render("kie", ScriptMode::Merged), s(&[K, MARKS.top, SHORT_CARRIER, MARKS.left]));
    }

    #[test]
    fn bare_vowels_and_special_slot_stay_separate() {
        let r = renderer();
        assert_eq!(r.render("ka", ScriptMode::Merged), s(&[K, SHORT_CARRIER]));
        assert_eq!(r.render("kë", ScriptMode::Merged), s(&[K, SHORT_CARRIER, MARKS.special]));
    }

    #[test]
    fn cluster_merges_into_last_part() {
        let r = renderer();
        let glyphs = r.glyphs("mbbi", ScriptMode::Merged);
        assert_eq!(glyphs.len(), 1);
        assert!(matches!(&glyphs[0], Glyph::Multi { parts } if parts.len() == 2));
        assert_eq!(r.render("mbbi", ScriptMode::Merged), s(&[M, P, MARKS.top, MARKS.bottom]));
    }

    #[test]
    fn prenasalized_digraph_is_one_glyph() {
        let r = renderer();
        for mode in [ScriptMode::Separate, ScriptMode::Merged] {
            let glyphs = r.glyphs("mb", mode);
            assert_eq!(glyphs, vec![Glyph::consonant(P, Slots::LEFT)], "mode {mode:?}");
        }
    }

    #[test]
    fn boundaries_never_merge() {
        let r = renderer();
        let rendered = r.render("kezi", ScriptMode::Merged);
        assert_eq!(rendered, s(&[K, MARKS.left, BOUNDARY, SHORT_CARRIER, MARKS.top]));
    }

    #[test]
    fn punctuation_and_spaces() {
        let r = renderer();
        assert_eq!(r.render("ki.", ScriptMode::Merged), s(&[K, MARKS.top]));
        assert_eq!(r.render("ka ki", ScriptMode::Merged), s(&[K, SHORT_CARRIER, WIDE_SPACE, K, MARKS.top]));
        let comma = r.render("ka, ki.", ScriptMode::Separate);
        assert!(comma.contains(WIDE_SPACE));
        assert!(!comma.ends_with(MAJOR_BREAK));
        assert!(!comma.contains(' '));
    }

    #[test]
    fn break_runs_collapse() {
        let r = renderer();
        let ka = s(&[K, SHORT_CARRIER]);
        let ki = s(&[K, MARKS.top]);
        // Array of (input, expected)
        let cases = [
            ("ka...", ka.clone()),
            (", ka", ka.clone()),
            ("ka!?", ka.clone()),
            ("ka., ki", format!("{ka}{WIDE_SPACE}{MAJOR_BREAK}{WIDE_SPACE}{ki}")),
            ("ka,, ki", format!("{ka}{WIDE_SPACE}{MINOR_BREAK}{WIDE_SPACE}{ki}")),
            ("ka, ki", format!("{ka}{WIDE_SPACE}{MINOR_BREAK}{WIDE_SPACE}{ki}")),
            ("ka  ki", format!("{ka}{WIDE_SPACE}{WIDE_SPACE}{ki}")),
        ];

        for (input, expected) in cases {
            assert_eq!(r.render(input, ScriptMode::Merged), expected, "input {input:?}");
        }
        for input in ["ka...", ", ka", "ka!?"] {
            assert_eq!(r.render(input, ScriptMode::Separate), ka, "input {input:?}");
        }
    }

    #[test]
    fn non_mergeable_base_is_never_absorbed() {
        let mut r = renderer();
        r.table.insert('q', Glyph::vowel(BOUNDARY, Slots::TOP));
        r.table.insert('j', Glyph::vowel(FILLER, Slots::TOP));

        for text in ["kq", "kj"] {
            let glyphs = r.glyphs(text, ScriptMode::Merged);
            assert_eq!(glyphs.len(), 2, "text {text:?}");
            assert_eq!(glyphs[0], Glyph::consonant(K, Slots::empty()));
        }

        r.non_mergeable_bases.clear();
        let glyphs = r.glyphs("kq", ScriptMode::Merged);
        assert_eq!(glyphs, vec![Glyph::Simple { base: K, slots: Slots::TOP, vowel: false, merged: true }]);
    }

    #[test]
    fn unmapped_characters_pass_through() {
        let r = renderer();
        assert_eq!(r.render("k#", ScriptMode::Merged), s(&[K, '#']));
        assert_eq!(r.render("#i", ScriptMode::Merged), s(&['#', SHORT_CARRIER, MARKS.top]));
    }

    #[test]
    fn every_class_letter_has_a_glyph() {
        let classes = ClassTable::default();
        let table = glyph_table();
        for ch in classes.vowels.members().iter().chain(classes.consonants.members()) {
            assert!(table.contains_key(ch), "no glyph for {ch:?}");
        }
        assert!(table.values().any(|g| g.base() == Some(LONG_CARRIER)));
    }

    #[test]
    fn merge_never_doubles_a_slot() {
        let r = renderer();
        let classes = ClassTable::default();
        for &c in classes.consonants.members() {
            for &v in classes.vowels.members() {
                let text = format!("{c}{v}");
                for glyph in r.glyphs(&text, ScriptMode::Merged) {
                    let mut rendered = String::new();
                    glyph.write_to(&MARKS, &mut rendered);
                    for mark in [MARKS.left, MARKS.top, MARKS.special, MARKS.bottom, MARKS.right] {
                        let count = rendered.chars().filter(|&ch| ch == mark).count();
                        assert!(count <= 1, "{text:?} doubles {mark:?} in {rendered:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn script_mode_conversions() {
        assert_eq!(ScriptMode::try_from(0u8), Ok(ScriptMode::Separate));
        assert_eq!(ScriptMode::try_from(1u8), Ok(ScriptMode::Merged));
        assert!(ScriptMode::try_from(2u8).is_err());
        assert_eq!("condensed".parse::<ScriptMode>(), Ok(ScriptMode::Merged));
        assert_eq!(" Sep ".parse::<ScriptMode>(), Ok(ScriptMode::Separate));
        assert!("both".parse::<ScriptMode>().is_err());
    }
}
