use std::path::Path;

use libras_core::dictionary::GlossDictionary;
use libras_core::language::LanguageProcessor;

use crate::dictionary::LibrasDictionary;
use crate::loader::LibrasLoader;

/// Primary language of the LIBRAS gloss tables
pub const PRIMARY_LANGUAGE: &str = "pt";

/// Portuguese → LIBRAS gloss processor
pub struct LibrasProcessor {
    dictionary: LibrasDictionary,
}

impl LibrasProcessor {
    /// Create a new processor with default configuration (embedded dictionary)
    pub fn new() -> Self {
        Self::with_dictionary_path(None)
    }

    /// Create a processor whose table comes from `path`, falling back to the
    /// embedded table when the file cannot be loaded
    pub fn with_dictionary_path(path: Option<&str>) -> Self {
        let from_file = path.and_then(|path| {
            match LibrasLoader::load_from_file(Path::new(path)) {
                Ok(dict) => Some(dict),
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                    tracing::warn!("Falling back to embedded dictionary");
                    None
                }
            }
        });

        let dictionary = match from_file {
            Some(dict) => dict,
            None => LibrasLoader::load_embedded().unwrap_or_else(|e| {
                tracing::error!("Failed to load embedded dictionary: {}", e);
                tracing::warn!("Starting with empty dictionary");
                LibrasDictionary::empty(PRIMARY_LANGUAGE)
            }),
        };

        Self::with_dictionary(dictionary)
    }

    pub fn with_dictionary(dictionary: LibrasDictionary) -> Self {
        if dictionary.language() != PRIMARY_LANGUAGE {
            tracing::warn!(
                "Dictionary declares language '{}', treating it as '{}'",
                dictionary.language(),
                PRIMARY_LANGUAGE
            );
        }
        Self { dictionary }
    }
}

impl Default for LibrasProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for LibrasProcessor {
    fn language_code(&self) -> &str {
        PRIMARY_LANGUAGE
    }

    fn dictionary(&self) -> &dyn GlossDictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libras_core::compose::MANUAL_ALPHABET;

    fn terms(text: &str) -> Vec<String> {
        LibrasProcessor::new()
            .translate(text)
            .matches
            .into_iter()
            .map(|m| m.term)
            .collect()
    }

    #[test]
    fn test_greeting_phrase_and_word() {
        assert_eq!(terms("Oi, tudo bem?"), vec!["oi", "tudo bem"]);
    }

    #[test]
    fn test_hello_gloss() {
        let outcome = LibrasProcessor::new().translate("hello");

        assert_eq!(terms("hello"), vec!["hello"]);
        assert!(outcome.composed_text.contains("• \"hello\" → 👋 [Wave hand gesture]"));
    }

    #[test]
    fn test_phrase_with_punctuation_inside() {
        assert_eq!(terms("Bom, dia!"), vec!["bom dia"]);
    }

    #[test]
    fn test_substring_terms_inside_words_are_kept() {
        // "oi" and "no" both sit inside "noite"
        assert_eq!(terms("Boa noite"), vec!["oi", "boa noite", "no"]);
        assert_eq!(terms("Olá, bom dia!"), vec!["olá", "bom dia"]);
    }

    #[test]
    fn test_family_sentence() {
        assert_eq!(
            terms("Minha mãe e meu pai amam a família"),
            vec!["família", "pai", "mãe"]
        );
    }

    #[test]
    fn test_each_term_once() {
        assert_eq!(terms("obrigado obrigado OBRIGADO!"), vec!["obrigado"]);
    }

    #[test]
    fn test_uppercase_accented_input() {
        assert_eq!(terms("ÁGUA e COMIDA"), vec!["água", "comida"]);
    }

    #[test]
    fn test_not_found_fallback() {
        let outcome = LibrasProcessor::new().translate("xyzzy plugh");

        assert!(outcome.matches.is_empty());
        assert!(outcome.composed_text.contains("📝 TEXTO DIGITADO: \"xyzzy plugh\""));
        for (letter, sign) in MANUAL_ALPHABET {
            assert!(outcome.composed_text.contains(&format!("{letter}={sign}")));
        }
    }

    #[test]
    fn test_empty_text() {
        let outcome = LibrasProcessor::new().translate("");

        assert!(outcome.matches.is_empty());
        assert!(outcome.composed_text.contains("📝 TEXTO DIGITADO: \"\""));
    }

    #[test]
    fn test_primary_language() {
        assert_eq!(LibrasProcessor::new().language_code(), PRIMARY_LANGUAGE);
    }

    #[test]
    fn test_override_table_keeps_primary_language() {
        let json = r#"{
            "name": "custom",
            "version": "1.0",
            "language": "en",
            "entries": [{ "term": "casa", "gloss": "🏠 [Teto com as mãos]" }]
        }"#;
        let processor = LibrasProcessor::with_dictionary(LibrasDictionary::from_json(json).unwrap());

        assert_eq!(processor.language_code(), PRIMARY_LANGUAGE);
        assert_eq!(processor.dictionary().len(), 1);
    }

    #[test]
    fn test_bad_path_falls_back_to_embedded() {
        let processor = LibrasProcessor::with_dictionary_path(Some("/nonexistent/table.json"));
        assert_eq!(processor.dictionary().len(), 46);
    }
}
