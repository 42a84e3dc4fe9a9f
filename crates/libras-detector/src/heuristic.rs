//! Offline language identification from script ranges and function words.
//!
//! Non-Latin scripts decide the language directly (kana → ja, hangul → ko,
//! ideographs → zh, Cyrillic → ru, Arabic → ar). Latin text is scored
//! against small lexicons of frequent words plus a few diacritics that only
//! one of the candidate languages uses. No signal, or a tie, gives "und".

use libras_core::types::LanguageCode;

use crate::language::UNDETERMINED;
use crate::{Classifier, ClassifierError, ProviderMetadata};

struct Lexicon {
    code: &'static str,
    words: &'static [&'static str],
    marks: &'static [char],
}

const WORD_WEIGHT: u32 = 2;
const MARK_WEIGHT: u32 = 1;

const LEXICONS: [Lexicon; 6] = [
    Lexicon {
        code: "pt",
        words: &[
            "oi", "olá", "tchau", "obrigado", "obrigada", "desculpa", "desculpe", "sim", "não",
            "bom", "boa", "dia", "tarde", "noite", "vai", "tudo", "bem", "você", "eu", "é",
            "um", "uma", "os", "do", "da", "em", "para", "com", "meu", "minha", "mãe", "pai",
            "água", "comida", "família", "irmão", "irmã", "filho", "filha", "avô", "avó",
            "trabalho", "escola", "amor", "feliz", "triste", "nome", "idade", "por", "favor",
            "casa", "amigo", "amiga", "como", "que", "de", "muito",
        ],
        marks: &['ã', 'õ'],
    },
    Lexicon {
        code: "en",
        words: &[
            "hello", "hi", "thanks", "thank", "you", "yes", "good", "morning", "afternoon",
            "night", "how", "are", "the", "is", "and", "i", "my", "what", "this", "it", "of",
            "to", "in", "with", "please", "sorry", "friend", "love", "water", "house", "home",
            "family", "bye",
        ],
        marks: &[],
    },
    Lexicon {
        code: "es",
        words: &[
            "hola", "gracias", "adiós", "sí", "buenos", "buenas", "días", "noches", "cómo",
            "estás", "el", "los", "las", "y", "yo", "tú", "muy", "bien", "agua", "perdón",
            "usted", "hasta", "luego",
        ],
        marks: &['ñ', '¿', '¡'],
    },
    Lexicon {
        code: "fr",
        words: &[
            "bonjour", "salut", "merci", "oui", "non", "bonsoir", "comment", "vous", "je",
            "le", "les", "et", "est", "une", "du", "des", "très", "ami", "eau", "maison",
            "avec", "pour", "pas", "au", "revoir",
        ],
        marks: &['è', 'œ', 'ù'],
    },
    Lexicon {
        code: "de",
        words: &[
            "hallo", "danke", "ja", "nein", "guten", "morgen", "tag", "abend", "nacht", "wie",
            "geht", "ich", "du", "der", "die", "das", "und", "ist", "ein", "eine", "nicht",
            "mit", "bitte", "freund", "wasser", "haus", "tschüss",
        ],
        marks: &['ä', 'ö', 'ü', 'ß'],
    },
    Lexicon {
        code: "it",
        words: &[
            "ciao", "grazie", "sì", "buongiorno", "buonasera", "stai", "io", "il", "lo", "gli",
            "di", "che", "per", "molto", "bene", "amico", "acqua", "prego", "arrivederci",
        ],
        marks: &['ì', 'ò'],
    },
];

#[derive(Debug, Default, Clone, Copy)]
struct ScriptCounts {
    kana: usize,
    hangul: usize,
    han: usize,
    cyrillic: usize,
    arabic: usize,
    latin: usize,
}

impl ScriptCounts {
    fn of(text: &str) -> Self {
        let mut counts = Self::default();
        for c in text.chars().filter(|c| c.is_alphabetic()) {
            match c {
                '\u{3040}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' => counts.kana += 1,
                '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' => {
                    counts.hangul += 1
                }
                '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' => counts.han += 1,
                '\u{0400}'..='\u{052F}' => counts.cyrillic += 1,
                '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' | '\u{FB50}'..='\u{FEFF}' => {
                    counts.arabic += 1
                }
                '\u{0041}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}' => counts.latin += 1,
                _ => {}
            }
        }
        counts
    }

    /// Language decided by a non-Latin script, if any dominates
    fn script_language(&self) -> Option<&'static str> {
        // Japanese mixes kanji with kana, so any kana settles it
        if self.kana > 0 {
            return Some("ja");
        }

        let candidates = [
            (self.hangul, "ko"),
            (self.han, "zh"),
            (self.cyrillic, "ru"),
            (self.arabic, "ar"),
        ];

        candidates
            .into_iter()
            .filter(|(count, _)| *count > self.latin && *count > 0)
            .max_by_key(|(count, _)| *count)
            .map(|(_, code)| code)
    }
}

/// Zero-dependency classifier used when no remote provider is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, text: &str) -> LanguageCode {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return UNDETERMINED.to_string();
        }

        let counts = ScriptCounts::of(trimmed);
        if let Some(code) = counts.script_language() {
            return code.to_string();
        }
        if counts.latin == 0 {
            return UNDETERMINED.to_string();
        }

        let lowered = trimmed.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
            .collect();

        let scores: Vec<(&'static str, u32)> = LEXICONS
            .iter()
            .map(|lexicon| (lexicon.code, score(lexicon, &words, &lowered)))
            .collect();

        let best = scores.iter().map(|(_, s)| *s).max().unwrap_or(0);
        let mut leaders = scores.iter().filter(|(_, s)| *s == best);

        match (best, leaders.next(), leaders.next()) {
            (0, _, _) => UNDETERMINED.to_string(),
            (_, Some((code, _)), None) => code.to_string(),
            _ => UNDETERMINED.to_string(),
        }
    }
}

fn score(lexicon: &Lexicon, words: &[&str], lowered: &str) -> u32 {
    let word_hits = words.iter().filter(|w| lexicon.words.contains(*w)).count() as u32;
    let mark_hits = lowered.chars().filter(|c| lexicon.marks.contains(c)).count() as u32;
    word_hits * WORD_WEIGHT + mark_hits * MARK_WEIGHT
}

#[async_trait::async_trait]
impl Classifier for HeuristicClassifier {
    async fn identify(&self, text: &str) -> Result<LanguageCode, ClassifierError> {
        Ok(self.detect(text))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "heuristic".to_string(),
            requires_api_key: false,
            offline: true,
        }
    }
}
