use lotto_core::{LottoConfig, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub engine: LottoConfig,
}

impl CliConfig {
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lotto")
    }

    /// Load `config.json` from the data directory, falling back to defaults
    /// when the file does not exist.
    pub async fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);

        let engine = if tokio::fs::try_exists(&path).await? {
            let content = tokio::fs::read_to_string(&path).await?;
            let file: ConfigFile = serde_json::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            file.engine
        } else {
            LottoConfig::default()
        };

        engine.validate()?;

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            engine,
        })
    }

    pub fn tickets_path(&self) -> PathBuf {
        self.data_dir.join("tickets.json")
    }

    pub fn draws_path(&self) -> PathBuf {
        self.data_dir.join("draws.json")
    }
}

/// On-disk layout of `config.json`; the data directory itself is never stored.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    engine: LottoConfig,
}
