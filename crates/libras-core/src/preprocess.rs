use unicode_normalization::UnicodeNormalization;

/// Punctuation deleted from input before tokenizing
pub const STRIPPED_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Normalized form of an input text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Tokens rejoined with single spaces; scanned for phrase containment
    pub joined: String,
    pub tokens: Vec<String>,
}

impl Normalized {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

pub trait Preprocessor {
    // Default LIBRAS preprocessor
    fn normalize(&self, text: &str) -> Normalized {
        let folded = fold_case(text);

        let stripped: String = folded
            .chars()
            .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
            .collect();

        let tokens: Vec<String> = stripped
            .split_whitespace()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        Normalized {
            joined: tokens.join(" "),
            tokens,
        }
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// NFC composition followed by locale-independent lowercasing.
///
/// Dictionary terms go through the same folding so decomposed input
/// ("a" + U+0303) still meets composed terms ("ã").
pub fn fold_case(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}
