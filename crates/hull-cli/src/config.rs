//! Optional `hull.toml` settings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hull_editor::EditorConfig;
use hull_kernel::GridLoftOptions;
use serde::Deserialize;

/// Contents of a `--config` file. Every table and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub editor: EditorConfig,
    pub grid: GridLoftOptions,
}

impl CliConfig {
    /// Load and validate `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::parse(&text).with_context(|| format!("in {}", path.display()))?;
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.editor.validate()?;
        config.grid.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_tables() {
        let cfg = CliConfig::parse(
            r#"
            [editor]
            pick_radius = 0.1

            [grid]
            stations = 31
            "#,
        )
        .unwrap();
        assert_eq!(cfg.editor.pick_radius, 0.1);
        assert_eq!(cfg.editor.pick_factor, 1.5);
        assert_eq!(cfg.grid.stations, 31);
        assert_eq!(cfg.grid.waterlines, 11);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(CliConfig::parse("[grid]\nstations = 1\n").is_err());
        assert!(CliConfig::parse("[editor]\npick_factor = 0.0\n").is_err());
    }
}
