use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical dot-grid dimensions in cells.
///
/// Caller-owned; selecting a new size invalidates all derived data and
/// triggers re-sampling of the most recently loaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self { width, height }
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Width-over-height aspect ratio.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One row of the enumerated grid-size option set, as surfaced in a
/// host UI dropdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridPreset {
    pub label: String,
    pub width: u32,
    pub height: u32,
}

impl GridPreset {
    pub fn size(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }
}

/// Immutable grid-size preset table, loaded once at startup.
///
/// The built-in table covers 16x16 through 128x64. Hosts may replace it
/// with a YAML list of presets; a document that fails to parse falls back
/// to the built-in table with a warning.
#[derive(Debug, Clone)]
pub struct GridConfig {
    presets: Vec<GridPreset>,
}

impl GridConfig {
    /// The compiled-in preset table.
    pub fn builtin() -> Self {
        let presets = [
            ("Small Square (16 \u{d7} 16)", 16, 16),
            ("Small Wide (32 \u{d7} 16)", 32, 16),
            ("Medium Square (32 \u{d7} 32)", 32, 32),
            ("Medium Wide (64 \u{d7} 32)", 64, 32),
            ("Large Square (64 \u{d7} 64)", 64, 64),
            ("Large Wide (128 \u{d7} 64)", 128, 64),
        ]
        .iter()
        .map(|&(label, width, height)| GridPreset {
            label: label.to_string(),
            width,
            height,
        })
        .collect();

        Self { presets }
    }

    /// Parse a preset table from a YAML list, falling back to the
    /// built-in table on parse failure or an empty document.
    pub fn from_yaml_str(content: &str) -> Self {
        match serde_yaml::from_str::<Vec<GridPreset>>(content) {
            Ok(presets) if !presets.is_empty() => {
                tracing::info!(presets = presets.len(), "Loaded grid presets");
                Self { presets }
            }
            Ok(_) => {
                tracing::warn!("Empty grid preset list, using defaults");
                Self::builtin()
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse grid presets, using defaults");
                Self::builtin()
            }
        }
    }

    pub fn presets(&self) -> &[GridPreset] {
        &self.presets
    }

    /// Look up a preset by its display label.
    pub fn find(&self, label: &str) -> Option<&GridPreset> {
        self.presets.iter().find(|p| p.label == label)
    }

    /// Whether a size is part of the option set.
    pub fn supports(&self, size: GridSize) -> bool {
        self.presets.iter().any(|p| p.size() == size)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grid_size_display() {
        assert_eq!(GridSize::new(32, 16).to_string(), "32x16");
    }

    #[test]
    fn test_grid_size_cell_count() {
        assert_eq!(GridSize::new(128, 64).cell_count(), 8192);
    }

    #[test]
    fn test_builtin_presets() {
        let config = GridConfig::builtin();
        assert_eq!(config.presets().len(), 6);
        assert_eq!(config.presets()[0].size(), GridSize::new(16, 16));
        assert_eq!(config.presets()[5].size(), GridSize::new(128, 64));
    }

    #[test]
    fn test_supports_membership() {
        let config = GridConfig::builtin();
        assert!(config.supports(GridSize::new(32, 16)));
        assert!(!config.supports(GridSize::new(17, 17)));
    }

    #[test]
    fn test_find_by_label() {
        let config = GridConfig::builtin();
        let preset = config.find("Medium Square (32 \u{d7} 32)").unwrap();
        assert_eq!(preset.size(), GridSize::new(32, 32));
        assert!(config.find("nonexistent").is_none());
    }

    #[test]
    fn test_from_yaml_str_valid() {
        let yaml = r#"
- label: "Tiny (8 x 8)"
  width: 8
  height: 8
- label: "Huge (256 x 128)"
  width: 256
  height: 128
"#;
        let config = GridConfig::from_yaml_str(yaml);
        assert_eq!(config.presets().len(), 2);
        assert!(config.supports(GridSize::new(8, 8)));
        assert!(config.supports(GridSize::new(256, 128)));
    }

    #[test]
    fn test_from_yaml_str_invalid_falls_back() {
        let config = GridConfig::from_yaml_str("not: [valid");
        assert_eq!(config.presets().len(), 6);
    }

    #[test]
    fn test_from_yaml_str_empty_falls_back() {
        let config = GridConfig::from_yaml_str("[]");
        assert_eq!(config.presets().len(), 6);
    }
}
