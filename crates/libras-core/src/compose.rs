use crate::types::MatchResult;

const FOUND_HEADER: &str = "✅ SINAIS ENCONTRADOS:";

const WORD_ORDER_NOTE: &str = "💡 DICA IMPORTANTE - Estrutura em LIBRAS:\n\
A ordem das palavras em LIBRAS é diferente do português!\n\
Estrutura: TEMPO + SUJEITO + OBJETO + VERBO";

const WORD_ORDER_EXAMPLE: &str = "📝 EXEMPLO:\n\
Português: 'Eu vou trabalhar amanhã'\n\
LIBRAS: 'AMANHÃ EU TRABALHO IR'";

const CLOSING_TIP: &str = "🤲 Use também expressões faciais para complementar os sinais!";

const NOT_FOUND_HEADER: &str = "❌ PALAVRAS NÃO ENCONTRADAS no dicionário atual.";

/// Suggested categories shown when nothing matched
pub const SUGGESTIONS: [(&str, &str); 6] = [
    ("Cumprimentos", "oi, olá, tchau, bom dia"),
    ("Cortesia", "obrigado, por favor, desculpe"),
    ("Respostas", "sim, não, tudo bem"),
    ("Família", "pai, mãe, filho, irmão"),
    ("Lugares", "casa, escola, trabalho"),
    ("Sentimentos", "feliz, triste, amor"),
];

/// Manual alphabet (datilologia) reference
pub const MANUAL_ALPHABET: [(char, &str); 26] = [
    ('A', "✊"),
    ('B', "🤚"),
    ('C', "☝️"),
    ('D', "👌"),
    ('E', "✋"),
    ('F', "👍"),
    ('G', "👆"),
    ('H', "✌️"),
    ('I', "🤞"),
    ('J', "🤙"),
    ('K', "🤘"),
    ('L', "🤟"),
    ('M', "👊"),
    ('N', "👎"),
    ('O', "👌"),
    ('P', "👇"),
    ('Q', "☝️"),
    ('R', "✌️"),
    ('S', "✊"),
    ('T', "👍"),
    ('U', "✌️"),
    ('V', "✌️"),
    ('W', "🤟"),
    ('X', "☝️"),
    ('Y', "🤙"),
    ('Z', "☝️"),
];

const ALPHABET_ROW_WIDTH: usize = 10;

/// Render the user-facing translation text.
///
/// `original_text` is echoed verbatim (not normalized) in the not-found block.
pub fn compose(matches: &[MatchResult], original_text: &str) -> String {
    if matches.is_empty() {
        compose_not_found(original_text)
    } else {
        compose_found(matches)
    }
}

fn compose_found(matches: &[MatchResult]) -> String {
    let lines: Vec<String> = matches
        .iter()
        .map(|m| format!("• \"{}\" → {}", m.term, m.gloss))
        .collect();

    format!(
        "{FOUND_HEADER}\n\n{}\n\n{WORD_ORDER_NOTE}\n\n{WORD_ORDER_EXAMPLE}\n\n{CLOSING_TIP}",
        lines.join("\n\n")
    )
}

fn compose_not_found(original_text: &str) -> String {
    let suggestions: Vec<String> = SUGGESTIONS
        .iter()
        .map(|(category, examples)| format!("• {category}: {examples}"))
        .collect();

    format!(
        "{NOT_FOUND_HEADER}\n\n\
         📝 TEXTO DIGITADO: \"{original_text}\"\n\n\
         💡 SUGESTÕES:\n\
         Tente palavras básicas como:\n\
         {}\n\n\
         🔤 DATILOLOGIA (Alfabeto Manual):\n\
         Para palavras não encontradas, use o alfabeto manual:\n\
         {}",
        suggestions.join("\n"),
        manual_alphabet_table()
    )
}

/// The 26-letter table, ten letters per row
pub fn manual_alphabet_table() -> String {
    MANUAL_ALPHABET
        .chunks(ALPHABET_ROW_WIDTH)
        .map(|row| {
            row.iter()
                .map(|(letter, sign)| format!("{letter}={sign}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
