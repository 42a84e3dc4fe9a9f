//! Two-pass gloss matching.
//!
//! The phrase pass walks the dictionary in its own order and keeps every term
//! that occurs anywhere inside the joined text. The word pass then walks the
//! tokens and picks up exact single-token hits the phrase pass did not already
//! report. Containment is plain substring search, so a short term inside a
//! longer word ("oi" in "noite") is reported as well.

use std::collections::HashSet;

use crate::dictionary::GlossDictionary;
use crate::preprocess::Normalized;
use crate::types::MatchResult;

pub fn find_matches(normalized: &Normalized, dictionary: &dyn GlossDictionary) -> Vec<MatchResult> {
    let mut matches = Vec::new();
    let mut found: HashSet<&str> = HashSet::new();

    if normalized.is_empty() || dictionary.is_empty() {
        return matches;
    }

    // Phrase pass
    for entry in dictionary.entries() {
        if found.contains(entry.term.as_str()) {
            continue;
        }
        if normalized.joined.contains(entry.term.as_str()) {
            matches.push(MatchResult {
                term: entry.term.clone(),
                gloss: entry.gloss.clone(),
            });
            found.insert(entry.term.as_str());
        }
    }

    // Word pass
    for token in &normalized.tokens {
        let word = token.trim();
        if word.is_empty() {
            continue;
        }
        if let Some(entry) = dictionary.lookup_exact(word) {
            if found.insert(entry.term.as_str()) {
                matches.push(MatchResult {
                    term: entry.term.clone(),
                    gloss: entry.gloss.clone(),
                });
            }
        }
    }

    tracing::debug!(
        "Matched {} of {} dictionary terms against {} tokens",
        matches.len(),
        dictionary.len(),
        normalized.tokens.len()
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{GlossEntry, GlossTable};
    use crate::preprocess::{DefaultPreprocessor, Preprocessor};

    fn table(pairs: &[(&str, &str)]) -> GlossTable {
        GlossTable::from_entries(pairs.iter().map(|(t, g)| GlossEntry::new(*t, *g))).unwrap()
    }

    fn run(text: &str, dictionary: &GlossTable) -> Vec<MatchResult> {
        find_matches(&DefaultPreprocessor.normalize(text), dictionary)
    }

    fn terms(matches: &[MatchResult]) -> Vec<&str> {
        matches.iter().map(|m| m.term.as_str()).collect()
    }

    #[test]
    fn test_phrase_matches_follow_dictionary_order() {
        let dict = table(&[("oi", "G-oi"), ("tudo bem", "G-tb"), ("amor", "G-amor")]);

        let matches = run("Tudo bem? Oi!", &dict);

        assert_eq!(terms(&matches), vec!["oi", "tudo bem"]);
        assert_eq!(matches[1].gloss, "G-tb");
    }

    #[test]
    fn test_phrase_and_constituent_word_are_both_reported_once() {
        let dict = table(&[("bom dia", "G1"), ("bom", "G2")]);

        let matches = run("Bom dia!", &dict);

        assert_eq!(terms(&matches), vec!["bom dia", "bom"]);
    }

    #[test]
    fn test_phrase_found_without_its_words_as_entries() {
        let dict = table(&[("bom dia", "G1"), ("amigo", "G2")]);

        let matches = run("bom dia", &dict);

        assert_eq!(terms(&matches), vec!["bom dia"]);
    }

    #[test]
    fn test_repeated_terms_are_reported_once() {
        let dict = table(&[("oi", "G1"), ("tchau", "G2")]);

        let matches = run("oi oi OI tchau oi tchau", &dict);

        assert_eq!(terms(&matches), vec!["oi", "tchau"]);
    }

    #[test]
    fn test_substring_inside_longer_word_matches() {
        let dict = table(&[("oi", "G-oi"), ("boa noite", "G-bn")]);

        let matches = run("Boa noite", &dict);

        assert_eq!(terms(&matches), vec!["oi", "boa noite"]);
    }

    #[test]
    fn test_punctuation_adjacent_phrase_matches() {
        let dict = table(&[("por favor", "G")]);

        let matches = run("Por, favor!", &dict);

        assert_eq!(terms(&matches), vec!["por favor"]);
    }

    #[test]
    fn test_no_term_appears_twice() {
        let dict = table(&[
            ("no", "G1"),
            ("não", "G2"),
            ("oi", "G3"),
            ("noite", "G4"),
            ("boa noite", "G5"),
        ]);

        for text in ["não não no noite", "boa noite oi oi", "no no no", "noite boa noite"] {
            let matches = run(text, &dict);
            let mut seen = HashSet::new();
            for m in &matches {
                assert!(seen.insert(m.term.clone()), "{} duplicated for {text:?}", m.term);
            }
        }
    }

    #[test]
    fn test_empty_input_or_dictionary() {
        let dict = table(&[("oi", "G")]);

        assert!(run("", &dict).is_empty());
        assert!(run("   ?!", &dict).is_empty());
        assert!(run("oi", &GlossTable::new()).is_empty());
    }

    #[test]
    fn test_unknown_words_yield_nothing() {
        let dict = table(&[("oi", "G"), ("casa", "G")]);
        assert!(run("xyzzy plugh", &dict).is_empty());
    }
}
