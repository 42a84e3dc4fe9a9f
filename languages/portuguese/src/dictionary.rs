use libras_core::dictionary::{
    DictionaryMetadata, GlossDictionary, GlossEntry, GlossTable, LoadError,
};
use serde::Deserialize;

// JSON layout of a gloss table file
#[derive(Debug, Deserialize)]
struct GlossFileJson {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default = "default_version")]
    version: String,
    language: String,
    entries: Vec<GlossEntry>,
}

fn default_name() -> String {
    "LIBRAS".to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

/// LIBRAS gloss dictionary
#[derive(Debug, Clone)]
pub struct LibrasDictionary {
    name: String,
    version: String,
    language: String,
    table: GlossTable,
}

impl LibrasDictionary {
    /// Empty dictionary for the given primary language; every lookup misses
    pub fn empty(language: &str) -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            language: language.to_string(),
            table: GlossTable::new(),
        }
    }

    /// Load a gloss table from its JSON representation. Entry order in the
    /// file is the dictionary order.
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: GlossFileJson = serde_json::from_str(json_str)?;

        let language = data.language.trim().to_lowercase();
        if language.is_empty() {
            return Err(LoadError::InvalidFormat(
                "missing primary language code".to_string(),
            ));
        }

        let table = GlossTable::from_entries(data.entries)?;

        Ok(Self {
            name: data.name,
            version: data.version,
            language,
            table,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn entry_count(&self) -> usize {
        self.table.len()
    }
}

impl GlossDictionary for LibrasDictionary {
    fn entries(&self) -> &[GlossEntry] {
        self.table.entries()
    }

    fn lookup_exact(&self, term: &str) -> Option<&GlossEntry> {
        self.table.get(term)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            version: self.version.clone(),
            language: self.language.clone(),
            entry_count: self.table.len(),
        }
    }
}
