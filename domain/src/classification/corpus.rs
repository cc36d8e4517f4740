//! Search corpus

use super::input::ClassificationInput;

/// Lower-cased text that every pattern is tested against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus(String);

impl Corpus {
    /// Build a corpus from raw text, lower-casing it once.
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    /// Concatenate the input's sections in a fixed order:
    /// activities, objectives, areas, beneficiaries, causes.
    ///
    /// Free-text sections are skipped when empty; each list section is
    /// space-joined and skipped when it has no entries.
    pub fn from_input(input: &ClassificationInput) -> Self {
        let mut sections: Vec<String> = Vec::with_capacity(5);

        for text in [&input.activities, &input.objectives].into_iter().flatten() {
            if !text.is_empty() {
                sections.push(text.clone());
            }
        }

        for names in [&input.areas, &input.beneficiaries, &input.causes] {
            if !names.is_empty() {
                sections.push(names.join(" "));
            }
        }

        Self::new(&sections.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
