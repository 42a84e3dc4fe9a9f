use crate::compose::compose;
use crate::dictionary::GlossDictionary;
use crate::matcher::find_matches;
use crate::preprocess::{DefaultPreprocessor, Normalized, Preprocessor};
use crate::types::{MatchResult, TranslationOutcome};

/// Text processing and gloss lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Primary language of the gloss dictionary (ISO 639-1 code)
    fn language_code(&self) -> &str;

    /// Gloss table used for every request
    fn dictionary(&self) -> &dyn GlossDictionary;

    /// Lowercase, strip punctuation and tokenize
    fn normalize(&self, text: &str) -> Normalized {
        DefaultPreprocessor.normalize(text)
    }

    /// Find dictionary terms in normalized text
    fn lookup(&self, normalized: &Normalized) -> Vec<MatchResult> {
        find_matches(normalized, self.dictionary())
    }

    /// Synchronous translation entry point. Total over every input.
    fn translate(&self, text: &str) -> TranslationOutcome {
        let normalized = self.normalize(text);
        let matches = self.lookup(&normalized);
        let composed_text = compose(&matches, text);

        TranslationOutcome {
            matches,
            composed_text,
        }
    }
}
