//! レシピデータセットの読み込みと検証
//!
//! `[{"id": 10259, "cuisine": "greek", "ingredients": [...]}, ...]` 形式のJSON。
//! 照合エンジンが前提とする形を読み込み時点で保証する。

use crate::error::{Error, Result};
use crate::types::Recipe;
use std::collections::HashSet;

/// JSON文字列から読み込み
pub fn load_recipes_from_json(json: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    validate_recipes(&recipes)?;
    Ok(recipes)
}

/// JSONファイルから読み込み（非WASM環境のみ）
#[cfg(not(feature = "wasm"))]
pub fn load_recipes_from_file(path: &std::path::Path) -> Result<Vec<Recipe>> {
    let content = std::fs::read_to_string(path)?;
    let recipes = load_recipes_from_json(&content)?;
    tracing::info!(path = %path.display(), count = recipes.len(), "recipe dataset loaded");
    Ok(recipes)
}

/// 食材なし・ジャンル空・ID重複のレシピを拒否
fn validate_recipes(recipes: &[Recipe]) -> Result<()> {
    let mut seen_ids = HashSet::new();

    for recipe in recipes {
        let reason = if recipe.ingredients.is_empty() {
            Some("recipe has no ingredients")
        } else if recipe.cuisine.trim().is_empty() {
            Some("cuisine label is empty")
        } else if !seen_ids.insert(recipe.id) {
            Some("duplicate recipe id")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(Error::InvalidRecipe {
                id: recipe.id,
                reason: reason.to_string(),
            });
        }
    }

    Ok(())
}
