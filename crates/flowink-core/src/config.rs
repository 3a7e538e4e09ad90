//! Workspace configuration.

use crate::snap::DEFAULT_GRID_SIZE;
use serde::{Deserialize, Serialize};

/// Options recognized by the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Grid cell size for snapping; 0 disables snapping entirely.
    pub grid_size: f64,
    /// Allow blocks' padded boxes to touch without counting as an
    /// overlap.
    pub allow_adjacent_blocks: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            allow_adjacent_blocks: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorkspaceConfig::default();
        assert!((config.grid_size - 20.0).abs() < f64::EPSILON);
        assert!(!config.allow_adjacent_blocks);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WorkspaceConfig =
            serde_json::from_str(r#"{"allow_adjacent_blocks": true}"#).unwrap();
        assert!((config.grid_size - 20.0).abs() < f64::EPSILON);
        assert!(config.allow_adjacent_blocks);
    }
}
