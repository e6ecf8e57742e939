use crate::error::{DeptreeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which stages run after tree construction, and where the lexicon lives.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PipelineConfig {
    pub merge_quotations: bool,
    pub merge_named_entities: bool,
    pub normalize: bool,
    /// JSON lexicon to load; the embedded seed lexicon is used when unset.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            merge_quotations: true,
            merge_named_entities: true,
            normalize: true,
            lexicon_path: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| DeptreeError::Config(e.to_string()))
    }

    /// Load from a JSON file. A relative `lexicon_path` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut config = Self::from_json_str(&raw)?;
        if let (Some(lexicon), Some(dir)) = (&config.lexicon_path, path.parent()) {
            if lexicon.is_relative() {
                config.lexicon_path = Some(dir.join(lexicon));
            }
        }
        Ok(config)
    }
}
