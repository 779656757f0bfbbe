//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Load and validate a panel from a YAML file
///
/// Read and parse failures name the file; validation failures name the
/// offending control.
pub fn load_config(path: &Path) -> Result<PanelConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read panel {:?}", path))?;
    let config: PanelConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse panel {:?}", path))?;
    config.validate()?;
    debug!(path = %path.display(), controls = config.controls.len(), "panel loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    #[test]
    fn test_load_minimal_config() {
        let yaml = r#"
controls:
  - name: max_position
    kind: dial
    min: 0
    max: 100
    safe_min: 5
    safe_max: 20
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.controls.len(), 1);
        assert_eq!(config.controls[0].safe_max, Some(20.0));
    }

    #[test]
    fn test_load_rejects_invalid() {
        let yaml = "controls:\n  - { name: a, kind: dial, min: 0, max: 10, step: -1 }\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/tactile.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tactile.yaml"), "got: {}", err);
    }

    #[test]
    fn test_parse_error_names_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"controls: [ {").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse panel"), "got: {}", err);
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
