use crate::error::{EmprecError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "emprec.json";
const DEFAULT_DATA_FILE: &str = "employees.json";

/// Configuration for emprec, optionally stored as `emprec.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmprecConfig {
    /// Backing file holding the employee collection
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for EmprecConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl EmprecConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(config_path)
    }

    /// Load config from an explicit file. The file must exist.
    pub fn load_from<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let content = fs::read_to_string(config_path).map_err(|e| {
            EmprecError::Config(format!("cannot read {}: {}", config_path.display(), e))
        })?;
        let config: EmprecConfig =
            serde_json::from_str(&content).map_err(EmprecError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(EmprecError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(EmprecError::Serialization)?;
        fs::write(config_path, content).map_err(EmprecError::Io)?;
        Ok(())
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }
}
