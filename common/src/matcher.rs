//! 食材照合・レシピランキング（CLI/WASM共通）
//!
//! ## 処理フロー
//! 1. 各レシピの食材をユーザー食材と照合し一致率を算出
//! 2. 一致が弱すぎるレシピを除外
//! 3. 一致率で3段階に分類・整列
//! 4. 上位2段階をジャンル別にまとめる（上限適用前）
//! 5. 各段階に表示上限を適用

use crate::normalize::{main_words, normalize_ingredient, words_overlap};
use crate::types::{CuisineSummary, MatchOptions, MatchedRecipe, Recipe, ResultSet};
use std::collections::{BTreeMap, HashSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const PERFECT_THRESHOLD: u32 = 100;
const ALMOST_THERE_THRESHOLD: u32 = 75;
const NEED_FEW_MORE_THRESHOLD: u32 = 50;

/// 1食材の一致だけで通す小さいレシピの食材数上限
const SHORT_RECIPE_MAX_INGREDIENTS: usize = 3;

/// 照合用に前処理したユーザー食材（主要語のリスト）
struct UserWords(Vec<Vec<String>>);

impl UserWords {
    /// 正規化形で重複を除き、主要語のない食材は捨てる
    fn new<S: AsRef<str>>(user_ingredients: &[S]) -> Self {
        let mut seen = HashSet::new();
        let words = user_ingredients
            .iter()
            .map(|ing| ing.as_ref())
            .filter(|ing| seen.insert(normalize_ingredient(ing)))
            .map(main_words)
            .filter(|words| !words.is_empty())
            .collect();
        Self(words)
    }

    fn covers(&self, recipe_ingredient: &str) -> bool {
        let recipe_words = main_words(recipe_ingredient);
        if recipe_words.is_empty() {
            return false;
        }
        self.0.iter().any(|user| words_overlap(user, &recipe_words))
    }
}

/// 四捨五入（0.5は切り上げ）した百分率。分母0は0%
fn rounded_percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * part + total) / (2 * total)) as u32
}

fn score_with(recipe: &Recipe, user: &UserWords) -> MatchedRecipe {
    let (matched, missing): (Vec<&String>, Vec<&String>) =
        recipe.ingredients.iter().partition(|ing| user.covers(ing));

    let total = recipe.ingredients.len();
    MatchedRecipe {
        recipe: recipe.clone(),
        matched_count: matched.len(),
        match_percentage: rounded_percentage(matched.len(), total),
        missing_count: missing.len(),
        missing_ingredients: missing.into_iter().cloned().collect(),
    }
}

/// 1レシピをユーザー食材と照合する
///
/// 食材が空のレシピは一致0%（一致数・不足数ともに0）になる。
pub fn score_recipe<S: AsRef<str>>(recipe: &Recipe, user_ingredients: &[S]) -> MatchedRecipe {
    score_with(recipe, &UserWords::new(user_ingredients))
}

/// 結果に残すだけの一致があるか判定
///
/// 2食材以上の一致、または食材3つ以下のレシピで1食材以上の一致。
pub fn is_valid_match(matched: &MatchedRecipe) -> bool {
    matched.matched_count >= 2
        || (matched.total_ingredients() <= SHORT_RECIPE_MAX_INGREDIENTS
            && matched.matched_count >= 1)
}

#[cfg(feature = "parallel")]
fn score_all(recipes: &[Recipe], user: &UserWords) -> Vec<MatchedRecipe> {
    recipes.par_iter().map(|r| score_with(r, user)).collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all(recipes: &[Recipe], user: &UserWords) -> Vec<MatchedRecipe> {
    recipes.iter().map(|r| score_with(r, user)).collect()
}

/// 一致率の高い順、同率なら不足数の少ない順
fn sort_by_closeness(recipes: &mut [MatchedRecipe]) {
    recipes.sort_by(|a, b| {
        b.match_percentage
            .cmp(&a.match_percentage)
            .then_with(|| a.missing_count.cmp(&b.missing_count))
    });
}

/// デフォルトの上限でレシピを照合・分類する
pub fn find_matching_recipes<S: AsRef<str>>(
    user_ingredients: &[S],
    recipes: &[Recipe],
) -> ResultSet {
    find_matching_recipes_with(user_ingredients, recipes, &MatchOptions::default())
}

/// レシピを照合して段階別に分類する
///
/// # Arguments
/// * `user_ingredients` - ユーザーの手持ち食材（未正規化で可、重複可）
/// * `recipes` - レシピデータセット
/// * `options` - 段階ごとの表示上限
pub fn find_matching_recipes_with<S: AsRef<str>>(
    user_ingredients: &[S],
    recipes: &[Recipe],
    options: &MatchOptions,
) -> ResultSet {
    let user = UserWords::new(user_ingredients);

    let mut perfect_matches = Vec::new();
    let mut almost_there = Vec::new();
    let mut need_few_more = Vec::new();

    for matched in score_all(recipes, &user).into_iter().filter(is_valid_match) {
        match matched.match_percentage {
            PERFECT_THRESHOLD => perfect_matches.push(matched),
            p if p >= ALMOST_THERE_THRESHOLD => almost_there.push(matched),
            p if p >= NEED_FEW_MORE_THRESHOLD => need_few_more.push(matched),
            _ => {}
        }
    }

    // 完全一致は食材数の少ない（簡単な）順
    perfect_matches.sort_by_key(MatchedRecipe::total_ingredients);
    sort_by_closeness(&mut almost_there);
    sort_by_closeness(&mut need_few_more);

    // ジャンル別グループは上限適用前の上位2段階から作る
    let mut cuisine_groups: BTreeMap<String, Vec<MatchedRecipe>> = BTreeMap::new();
    for recipe in perfect_matches.iter().chain(almost_there.iter()) {
        cuisine_groups
            .entry(recipe.recipe.cuisine.clone())
            .or_default()
            .push(recipe.clone());
    }
    let total_matches = perfect_matches.len() + almost_there.len();

    tracing::debug!(
        recipes = recipes.len(),
        user_ingredients = user.0.len(),
        perfect = perfect_matches.len(),
        almost_there = almost_there.len(),
        need_few_more = need_few_more.len(),
        cuisines = cuisine_groups.len(),
        "recipe search finished"
    );

    perfect_matches.truncate(options.perfect_limit);
    almost_there.truncate(options.almost_there_limit);
    need_few_more.truncate(options.need_few_more_limit);

    ResultSet {
        perfect_matches,
        almost_there,
        need_few_more,
        cuisine_groups,
        total_matches,
    }
}

/// 上位5ジャンルを集計する
pub fn top_cuisines(cuisine_groups: &BTreeMap<String, Vec<MatchedRecipe>>) -> Vec<CuisineSummary> {
    top_cuisines_with(cuisine_groups, MatchOptions::default().top_cuisines)
}

/// レシピ数の多い順にジャンルを集計する（同数はジャンル名順）
pub fn top_cuisines_with(
    cuisine_groups: &BTreeMap<String, Vec<MatchedRecipe>>,
    limit: usize,
) -> Vec<CuisineSummary> {
    let mut summaries: Vec<CuisineSummary> = cuisine_groups
        .iter()
        .filter(|(_, recipes)| !recipes.is_empty())
        .map(|(cuisine, recipes)| {
            let sum: usize = recipes.iter().map(|r| r.match_percentage as usize).sum();
            CuisineSummary {
                cuisine: cuisine.clone(),
                count: recipes.len(),
                avg_match: rounded_percentage(sum, recipes.len() * 100),
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.cuisine.cmp(&b.cuisine)));
    summaries.truncate(limit);
    summaries
}
