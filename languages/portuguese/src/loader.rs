use std::path::Path;

use libras_core::dictionary::LoadError;

use crate::dictionary::LibrasDictionary;

pub struct LibrasLoader;

impl LibrasLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<LibrasDictionary, LoadError> {
        let json = include_str!("../data/libras_pt.json");
        tracing::info!("Loading embedded LIBRAS dictionary...");
        let dict = LibrasDictionary::from_json(json)?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<LibrasDictionary, LoadError> {
        tracing::info!("Loading LIBRAS dictionary from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        let dict = LibrasDictionary::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libras_core::dictionary::GlossDictionary;
    use std::io::Write;

    #[test]
    fn test_embedded_table_loads_in_order() {
        let dict = LibrasLoader::load_embedded().unwrap();

        assert_eq!(dict.entry_count(), 46);
        assert_eq!(dict.language(), "pt");

        let terms: Vec<&str> = dict.entries().iter().map(|e| e.term.as_str()).collect();
        assert_eq!(&terms[..3], &["oi", "olá", "tchau"]);
        assert_eq!(terms.last(), Some(&"how are you"));
    }

    #[test]
    fn test_embedded_table_contents() {
        let dict = LibrasLoader::load_embedded().unwrap();

        assert_eq!(
            dict.lookup_exact("hello").unwrap().gloss,
            "👋 [Wave hand gesture]"
        );
        assert_eq!(
            dict.lookup_exact("tudo bem").unwrap().gloss,
            "👍✌️ [Polegar + sinal de OK]"
        );
        assert!(dict.lookup_exact("água").is_some());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "language": "pt", "entries": [{{ "term": "sol", "gloss": "☀️" }}] }}"#
        )
        .unwrap();

        let dict = LibrasLoader::load_from_file(file.path()).unwrap();

        assert_eq!(dict.entry_count(), 1);
        assert_eq!(dict.lookup_exact("sol").unwrap().gloss, "☀️");
    }

    #[test]
    fn test_missing_file() {
        let result = LibrasLoader::load_from_file(Path::new("/nonexistent/libras.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
