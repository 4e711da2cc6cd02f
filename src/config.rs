use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::AnalyzerParams;

/// Configuration of the batch demo tool.
#[derive(Debug, Deserialize)]
pub struct AnalyzeToolConfig {
    /// Directory holding annotation edge maps and the matching originals.
    pub image_dir: PathBuf,
    /// Analysis parameters; `pixel_width` and `green_threshold` are
    /// required, walker knobs are optional.
    pub analyzer: AnalyzerParams,
}

/// Load a JSON tool configuration from `path`.
pub fn load_config(path: &Path) -> Result<AnalyzeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
