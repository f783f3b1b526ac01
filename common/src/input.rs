//! ユーザー食材の入力処理
//!
//! カンマ区切り入力の分解と、重複のない食材リストの管理。

/// よく使う食材（クイック追加用）
pub const COMMON_INGREDIENTS: &[&str] = &[
    "chicken", "rice", "pasta", "eggs", "cheese", "tomato", "onion", "garlic", "potato",
    "bread", "milk", "butter",
];

/// カンマ区切りの入力を食材リストに分解
///
/// 前後の空白を除去し、空要素と大文字小文字違いの重複を捨てる（先勝ち）。
pub fn parse_ingredient_list(input: &str) -> Vec<String> {
    let mut list = IngredientList::default();
    for item in input.split(',') {
        list.add(item);
    }
    list.into_vec()
}

/// 重複のない食材リスト（入力順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 食材を追加。空文字や既存の食材は無視して false を返す
    pub fn add(&mut self, ingredient: &str) -> bool {
        let trimmed = ingredient.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    /// よく使う食材から追加（一覧にない名前は false）
    pub fn add_common(&mut self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        if !COMMON_INGREDIENTS.contains(&name.as_str()) {
            tracing::warn!(ingredient = %name, "not a common ingredient");
            return false;
        }
        self.add(&name)
    }

    /// 指定位置の食材を削除
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        let needle = ingredient.trim().to_lowercase();
        self.items.iter().any(|i| i.to_lowercase() == needle)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: AsRef<str>> FromIterator<S> for IngredientList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::default();
        for item in iter {
            list.add(item.as_ref());
        }
        list
    }
}
