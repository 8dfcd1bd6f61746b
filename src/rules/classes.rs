use crate::CharClass;

/// Letter classes of the romanized orthography.
///
/// These drive boundary-marker resolution and the class-coverage checks of the
/// script tables.
#[derive(Debug, Clone)]
pub struct ClassTable {
    /// V: every vowel letter.
    pub vowels: CharClass,
    /// C: every consonant letter.
    pub consonants: CharClass,
    /// C1: nasals, liquids, fricatives and the sibilant.
    pub c1: CharClass,
    /// A: onsets that take the `z` boundary after a vowel.
    pub a: CharClass,
    /// D: onsets that take the `c` boundary after a vowel.
    pub d: CharClass,
    /// P: high and back vowels.
    pub p: CharClass,
    /// The low vowel that absorbs a following boundary (`a` + `-` → `ā`).
    pub low_vowel: CharClass,
}

impl Default for ClassTable {
    fn default() -> Self {
        Self {
            vowels: CharClass::new("V", "aeiouáéíóúäëü"),
            consonants: CharClass::new("C", "bdfghklmnpstvwyr"),
            c1: CharClass::new("C1", "mnsvwr"),
            a: CharClass::new("A", "bdfhklt"),
            d: CharClass::new("D", "gpy"),
            p: CharClass::new("P", "oiu"),
            low_vowel: CharClass::single("low", 'a'),
        }
    }
}

/// Placeholder characters usable in syllable templates, each standing for a
/// class of the encoded (placeholder) alphabet.
#[derive(Debug, Clone)]
pub struct GroupTable {
    groups: Vec<(char, CharClass)>,
}

impl GroupTable {
    pub fn new(groups: Vec<(char, CharClass)>) -> Self {
        Self { groups }
    }

    pub fn get(&self, placeholder: char) -> Option<&CharClass> {
        self.groups.iter().find(|(key, _)| *key == placeholder).map(|(_, class)| class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(char, CharClass)> {
        self.groups.iter()
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::new(vec![
            ('1', CharClass::new("vowel", "aeiouɑəyAEIOUQ")),
            ('2', CharClass::new("consonant", "bdfghklmnpstvwjcŋʔMNSBDG")),
            ('3', CharClass::new("nasal", "mnŋ")),
            ('4', CharClass::new("sibilant", "s")),
        ])
    }
}
