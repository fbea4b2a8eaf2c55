// Application settings
// Loaded from ~/.config/gridpad/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// One seed column: display label plus width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSetting {
    pub name: String,
    pub width: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Seed configuration
    #[serde(rename = "seed.rows")]
    pub seed_rows: usize,

    #[serde(rename = "seed.sheetNames")]
    pub seed_sheet_names: Vec<String>,

    #[serde(rename = "seed.columns")]
    pub seed_columns: Vec<ColumnSetting>,

    // Grid appearance (render hints only)
    #[serde(rename = "grid.showGridLines")]
    pub show_grid_lines: bool,

    #[serde(rename = "grid.rowHeaderWidth")]
    pub row_header_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Seed
            seed_rows: 20,
            seed_sheet_names: vec!["Sheet1".to_string(), "Sheet2".to_string()],
            seed_columns: vec![
                ColumnSetting {
                    name: "A".to_string(),
                    width: 100.0,
                },
                ColumnSetting {
                    name: "B".to_string(),
                    width: 150.0,
                },
                ColumnSetting {
                    name: "C".to_string(),
                    width: 200.0,
                },
            ],
            // Grid
            show_grid_lines: true,
            row_header_width: 50.0,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gridpad");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                eprintln!("Error parsing settings.json: {}", e);
                eprintln!("Using default settings");
                Self::default()
            }),
            Err(e) => {
                eprintln!("Error reading settings.json: {}", e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON, ignoring `//` comment lines
    pub fn from_json(contents: &str) -> Result<Self, String> {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        serde_json::from_str(&cleaned).map_err(|e| e.to_string())
    }

    /// Save current settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;

        fs::write(&path, json).map_err(|e| e.to_string())
    }

    /// Get the config file path for display/opening
    pub fn config_path_display() -> String {
        Self::config_path().to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_seed() {
        let s = Settings::default();
        assert_eq!(s.seed_rows, 20);
        assert_eq!(s.seed_sheet_names, ["Sheet1", "Sheet2"]);
        assert_eq!(s.seed_columns.len(), 3);
        assert_eq!(s.seed_columns[1].name, "B");
        assert_eq!(s.seed_columns[1].width, 150.0);
    }

    #[test]
    fn test_from_json_with_comments_and_partial_keys() {
        let json = r#"{
    // demo seed tweaks
    "seed.rows": 5,
    "seed.sheetNames": ["Лист1"]
}"#;
        let s = Settings::from_json(json).unwrap();
        assert_eq!(s.seed_rows, 5);
        assert_eq!(s.seed_sheet_names, ["Лист1"]);
        // Unspecified keys keep their defaults
        assert_eq!(s.seed_columns.len(), 3);
        assert!(s.show_grid_lines);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Settings::from_json("not json").is_err());
    }
}
