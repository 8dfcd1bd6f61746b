use crate::error::ConfigError;
use crate::rules::classes::GroupTable;

use super::template::Template;

/// Splits encoded words into syllables with an ordered template list.
#[derive(Debug, Clone)]
pub struct Syllabifier {
    templates: Vec<Template>,
    delimiter: char,
}

impl Syllabifier {
    pub fn new(templates: Vec<Template>, delimiter: char) -> Self {
        Self { templates, delimiter }
    }

    /// Compile every template source against `groups`; the first malformed
    /// template aborts construction.
    pub fn compile<S: AsRef<str>>(sources: &[S], groups: &GroupTable, delimiter: char) -> Result<Self, ConfigError> {
        let templates = sources
            .iter()
            .map(|source| Template::compile(source.as_ref(), groups))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(templates, delimiter))
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Segment `word` into chunks.
    ///
    /// At each position the first template (in list order) with a non-empty
    /// match wins; when none matches, a single character becomes its own
    /// chunk. Joining the chunks always gives back `word`.
    pub fn chunks<'a>(&self, word: &'a str) -> Vec<&'a str> {
        let mut chunks = Vec::new();
        let mut pos = 0;

        while pos < word.len() {
            let rest = &word[pos..];
            let matched = self.templates.iter().find_map(|t| t.match_len(rest).filter(|&len| len > 0));

            let len = match matched {
                Some(len) => len,
                None => {
                    let len = rest.chars().next().map_or(1, char::len_utf8);
                    tracing::trace!(word, position = pos, chunk = &rest[..len], "no template matched");
                    len
                }
            };

            chunks.push(&rest[..len]);
            pos += len;
        }

        chunks
    }

    /// [`chunks`](Self::chunks) joined with the syllable delimiter.
    pub fn syllabify(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() * 2);
        for (i, chunk) in self.chunks(word).into_iter().enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }
            out.push_str(chunk);
        }
        out
    }
}
