//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use recipe_finder::config::Config;
use recipe_finder::error::RecipeFinderError;
use recipe_finder_common::load_recipes_from_file;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないデータセット
#[test]
fn test_dataset_not_found() {
    let config = Config::default();
    let err = config
        .resolve_dataset(Some(Path::new("/nonexistent/path/recipes.json")))
        .unwrap_err();
    assert!(matches!(err, RecipeFinderError::DatasetNotFound(_)));
}

/// 食材が空のレシピは読み込み時に拒否
#[test]
fn test_dataset_with_empty_recipe() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("recipes.json");
    std::fs::write(&path, r#"[{"id": 9, "cuisine": "thai", "ingredients": []}]"#).unwrap();

    let err: RecipeFinderError = load_recipes_from_file(&path).unwrap_err().into();
    assert!(matches!(
        err,
        RecipeFinderError::Common(recipe_finder_common::Error::InvalidRecipe { id: 9, .. })
    ));
    // 透過的エラーなのでメッセージがそのまま表示される
    assert_eq!(err.to_string(), "Invalid recipe 9: recipe has no ingredients");
}

/// 壊れたJSON
#[test]
fn test_dataset_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("recipes.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_recipes_from_file(&path).unwrap_err();
    assert!(matches!(err, recipe_finder_common::Error::Json(_)));
}

/// 壊れた設定ファイル
#[test]
fn test_config_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, RecipeFinderError::JsonParse(_)));
}

/// エラーメッセージ
#[test]
fn test_error_display() {
    let errors = vec![
        RecipeFinderError::Config("テスト設定エラー".to_string()),
        RecipeFinderError::DatasetNotFound("recipes.json".to_string()),
        RecipeFinderError::NoIngredients,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }

    assert!(RecipeFinderError::NoIngredients.to_string().contains("recipe-finder search"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: RecipeFinderError = io_err.into();

    assert!(matches!(err, RecipeFinderError::Io(_)));
    assert!(err.to_string().contains("IO"));
}
