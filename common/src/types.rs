//! レシピ照合の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Recipe: データセットから読み込んだレシピ（不変）
//! - MatchedRecipe: 照合結果で装飾したレシピ
//! - ResultSet: 段階別に分類・整列した照合結果
//! - CuisineSummary: 料理ジャンル別の集計

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// データセットのレシピ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub cuisine: String,
    /// 必要な食材（データセットの記載順）
    pub ingredients: Vec<String>,
}

/// 照合済みレシピ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,

    /// ユーザー食材で満たされた食材数
    pub matched_count: usize,

    /// 一致率（0-100、四捨五入）
    pub match_percentage: u32,

    /// 不足食材（レシピの記載順）
    pub missing_ingredients: Vec<String>,

    pub missing_count: usize,
}

impl MatchedRecipe {
    pub fn total_ingredients(&self) -> usize {
        self.recipe.ingredients.len()
    }
}

/// 照合結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    /// 一致率100%（食材数の少ない順）
    pub perfect_matches: Vec<MatchedRecipe>,

    /// 一致率75%以上100%未満
    pub almost_there: Vec<MatchedRecipe>,

    /// 一致率50%以上75%未満
    pub need_few_more: Vec<MatchedRecipe>,

    /// ジャンル → 上位2段階（上限適用前）のレシピ
    pub cuisine_groups: BTreeMap<String, Vec<MatchedRecipe>>,

    /// 上位2段階の件数（上限適用前）
    pub total_matches: usize,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.perfect_matches.is_empty()
            && self.almost_there.is_empty()
            && self.need_few_more.is_empty()
    }
}

/// ジャンル別集計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineSummary {
    pub cuisine: String,
    pub count: usize,
    /// 一致率の平均（四捨五入）
    pub avg_match: u32,
}

/// 照合オプション（段階ごとの表示上限）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchOptions {
    pub perfect_limit: usize,
    pub almost_there_limit: usize,
    pub need_few_more_limit: usize,
    pub top_cuisines: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            perfect_limit: 10,
            almost_there_limit: 15,
            need_few_more_limit: 10,
            top_cuisines: 5,
        }
    }
}
