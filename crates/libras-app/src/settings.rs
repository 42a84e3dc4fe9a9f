use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use libras_config::Config;

/// Load the config file given on the command line, or build one from the
/// environment when there is none
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let config = serde_json::from_reader(reader)?;
            Ok(config)
        }
        None => {
            tracing::info!("No config file given, using environment defaults");
            Ok(Config::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "processing_delay_ms": 10, "detector": {{ "enabled": false }} }}"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.processing_delay_ms, 10);
        assert!(!config.detector.enabled);
        assert_eq!(config.detector.provider, "heuristic");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/libras.json"))).is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "processing_delay_ms = 10").unwrap();

        assert!(load_config(Some(file.path())).is_err());
    }
}
