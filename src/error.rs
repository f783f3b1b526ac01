//! CLIのエラー型定義

use thiserror::Error;

/// CLIエラー型
#[derive(Error, Debug)]
pub enum RecipeFinderError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("No ingredients given. Try something like `recipe-finder search chicken,rice`")]
    NoIngredients,

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] recipe_finder_common::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, RecipeFinderError>;
