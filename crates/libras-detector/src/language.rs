/// Sentinel code for text whose language could not be determined
pub const UNDETERMINED: &str = "und";

const DISPLAY_NAMES: [(&str, &str); 12] = [
    ("pt", "Português"),
    ("en", "Inglês"),
    ("es", "Espanhol"),
    ("fr", "Francês"),
    ("de", "Alemão"),
    ("it", "Italiano"),
    ("ja", "Japonês"),
    ("ko", "Coreano"),
    ("zh", "Chinês"),
    ("ar", "Árabe"),
    ("ru", "Russo"),
    (UNDETERMINED, "Não identificado"),
];

/// Portuguese display name for a language code; unknown codes are shown uppercased
pub fn display_name(code: &str) -> String {
    DISPLAY_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}
