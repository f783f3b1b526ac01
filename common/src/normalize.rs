//! 食材名の正規化と単語単位の照合
//!
//! - 小文字化、数字・記号の除去、空白の統一
//! - 修飾語（fresh, dried 等）と2文字以下の単語を除いた「主要語」で照合

use regex::Regex;

/// 照合に使わない修飾語・調味料
///
/// 単独で他の食材と一致すると誤検出になる語。
pub const QUALIFIER_STOP_WORDS: &[&str] = &[
    "salt", "pepper", "fresh", "dried", "ground", "chopped", "minced", "sliced", "diced",
    "grated", "shredded", "large", "small", "medium", "whole", "boneless", "skinless",
    "frozen", "cooked", "unsalted", "and", "the", "for", "with",
];

/// 主要語とみなす最小文字数（この長さ以下は除外）
const MIN_WORD_LEN: usize = 2;

/// 食材名を比較用の形式に正規化する
///
/// 小文字化 → 英字・空白以外を除去 → 連続空白を1つに → 前後の空白を除去。
/// 空文字列も有効な結果として返す。
pub fn normalize_ingredient(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref NON_LETTER_RE: Regex = Regex::new(r"[^\p{L}\s]").unwrap();
        static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    }

    let lower = text.to_lowercase();
    let letters = NON_LETTER_RE.replace_all(&lower, "");
    WHITESPACE_RE.replace_all(&letters, " ").trim().to_string()
}

/// 正規化した食材名から主要語を取り出す
pub fn main_words(text: &str) -> Vec<String> {
    normalize_ingredient(text)
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_WORD_LEN)
        .filter(|word| !QUALIFIER_STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// ユーザー食材がレシピ食材に含まれるとみなせるか判定
///
/// 双方の主要語のうち、どちらかがもう一方を部分文字列として含む組が
/// 1つでもあれば一致。主要語がない側は何とも一致しない。
pub fn ingredients_match(user_ingredient: &str, recipe_ingredient: &str) -> bool {
    words_overlap(&main_words(user_ingredient), &main_words(recipe_ingredient))
}

/// 主要語同士の双方向部分一致
pub(crate) fn words_overlap(user_words: &[String], recipe_words: &[String]) -> bool {
    user_words.iter().any(|user| {
        recipe_words
            .iter()
            .any(|recipe| recipe.contains(user.as_str()) || user.contains(recipe.as_str()))
    })
}
