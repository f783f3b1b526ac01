use crate::error::{RecipeFinderError, Result};
use recipe_finder_common::MatchOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データセットパスを上書きする環境変数
pub const DATASET_ENV: &str = "RECIPE_FINDER_DATASET";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset_path: Option<PathBuf>,
    pub options: MatchOptions,
    /// カードに表示する不足食材の数
    pub missing_preview: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            options: MatchOptions::default(),
            missing_preview: 3,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecipeFinderError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("recipe-finder").join("config.json"))
    }

    /// 環境変数で指定されたデータセット（空文字は未指定扱い）
    pub fn dataset_override() -> Option<PathBuf> {
        std::env::var_os(DATASET_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// データセットのパスを決定（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_dataset(&self, cli_path: Option<&Path>) -> Result<PathBuf> {
        let path = match cli_path {
            Some(path) => path.to_path_buf(),
            None => match Self::dataset_override() {
                Some(env_path) => env_path,
                None => self.dataset_path.clone().ok_or_else(|| {
                    RecipeFinderError::Config(
                        "no dataset configured. Use --dataset or `recipe-finder config --set-dataset PATH`".into(),
                    )
                })?,
            },
        };

        if !path.exists() {
            return Err(RecipeFinderError::DatasetNotFound(path.display().to_string()));
        }
        Ok(path)
    }

    pub fn set_dataset(&mut self, path: PathBuf) -> Result<()> {
        self.dataset_path = Some(path);
        self.save()
    }
}
