//! Recipe Finder Common Library
//!
//! CLIとWeb(WASM)で共有される型と食材照合エンジン

pub mod types;
pub mod normalize;
pub mod matcher;
pub mod input;
pub mod dataset;
pub mod error;

pub use types::{CuisineSummary, MatchOptions, MatchedRecipe, Recipe, ResultSet};
pub use normalize::{ingredients_match, main_words, normalize_ingredient, QUALIFIER_STOP_WORDS};
pub use matcher::{
    find_matching_recipes, find_matching_recipes_with, is_valid_match, score_recipe,
    top_cuisines, top_cuisines_with,
};
pub use input::{parse_ingredient_list, IngredientList, COMMON_INGREDIENTS};
pub use dataset::load_recipes_from_json;
#[cfg(not(feature = "wasm"))]
pub use dataset::load_recipes_from_file;
pub use error::{Error, Result};
