//! 検索結果の出力（テキスト/JSON）

use crate::error::Result;
use recipe_finder_common::{CuisineSummary, MatchedRecipe, ResultSet};
use serde::Serialize;
use std::fmt::Write;

/// 完全一致・ほぼ一致がないときに表示する「あと少し」の件数
const CLOSE_RECIPES_SHOWN: usize = 6;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    results: &'a ResultSet,
    top_cuisines: &'a [CuisineSummary],
}

pub fn render_json(results: &ResultSet, top_cuisines: &[CuisineSummary]) -> Result<String> {
    let report = JsonReport {
        results,
        top_cuisines,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_text(
    results: &ResultSet,
    top_cuisines: &[CuisineSummary],
    missing_preview: usize,
) -> String {
    let mut out = String::new();

    if results.total_matches == 0 {
        let _ = writeln!(out, "😕 No perfect matches found");
        let _ = writeln!(
            out,
            "Try adding more common ingredients like rice, pasta, chicken, or eggs!"
        );
        if !results.need_few_more.is_empty() {
            let _ = writeln!(out, "\nBut here are some recipes you're close to making:\n");
            for recipe in results.need_few_more.iter().take(CLOSE_RECIPES_SHOWN) {
                write_card(&mut out, recipe, missing_preview);
            }
        }
        return out;
    }

    let _ = writeln!(out, "🎉 Found {} recipes you can make!", results.total_matches);
    let _ = writeln!(out, "{}", cuisine_badges(top_cuisines));

    if !results.perfect_matches.is_empty() {
        let _ = writeln!(out, "\n✅ Perfect Matches - You have everything!\n");
        for recipe in &results.perfect_matches {
            write_card(&mut out, recipe, missing_preview);
        }
    }

    if !results.almost_there.is_empty() {
        let _ = writeln!(out, "\n🔥 Almost There - Just need 1-2 more things\n");
        for recipe in &results.almost_there {
            write_card(&mut out, recipe, missing_preview);
        }
    }

    out
}

/// ジャンル集計のみ表示
pub fn render_cuisines(top_cuisines: &[CuisineSummary]) -> String {
    if top_cuisines.is_empty() {
        return "No cuisines match these ingredients yet.\n".to_string();
    }

    let mut out = String::new();
    for (rank, summary) in top_cuisines.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} - {} recipes, avg {}% match",
            rank + 1,
            summary.cuisine,
            summary.count,
            summary.avg_match
        );
    }
    out
}

fn cuisine_badges(top_cuisines: &[CuisineSummary]) -> String {
    let badges: Vec<String> = top_cuisines
        .iter()
        .map(|c| format!("{} ({})", c.cuisine, c.count))
        .collect();
    format!("Top cuisines: {}", badges.join(", "))
}

fn write_card(out: &mut String, recipe: &MatchedRecipe, missing_preview: usize) {
    let _ = writeln!(
        out,
        "[{}] #{} - {}% match",
        recipe.recipe.cuisine, recipe.recipe.id, recipe.match_percentage
    );
    let _ = writeln!(
        out,
        "  {} ingredients total, you have {} of them",
        recipe.total_ingredients(),
        recipe.matched_count
    );

    if !recipe.missing_ingredients.is_empty() {
        let shown: Vec<&str> = recipe
            .missing_ingredients
            .iter()
            .take(missing_preview)
            .map(String::as_str)
            .collect();
        let _ = write!(out, "  Need to buy: {}", shown.join(", "));
        let hidden = recipe.missing_count.saturating_sub(shown.len());
        if hidden > 0 {
            let _ = write!(out, " + {} more", hidden);
        }
        let _ = writeln!(out);
    }
}
