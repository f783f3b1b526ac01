use clap::{Parser, Subcommand};
use recipe_finder_common::parse_ingredient_list;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-finder")]
#[command(about = "手持ちの食材で作れるレシピを探す", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 食材でレシピを検索
    Search {
        /// 手持ちの食材（カンマ区切りも可）
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// レシピデータセット（JSON）
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 作れるレシピの多いジャンルを表示
    Cuisines {
        /// 手持ちの食材（カンマ区切りも可）
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// レシピデータセット（JSON）
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },

    /// よく使う食材の一覧
    Staples,

    /// 設定を表示/編集
    Config {
        /// デフォルトのデータセットを設定
        #[arg(long)]
        set_dataset: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

/// 引数の食材をまとめて分解（各引数がカンマ区切りでもよい）
pub fn collect_ingredients(args: &[String]) -> Vec<String> {
    parse_ingredient_list(&args.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("txt".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_collect_ingredients() {
        let args = vec![
            "chicken,rice".to_string(),
            "soy sauce".to_string(),
            "Rice".to_string(),
        ];
        assert_eq!(collect_ingredients(&args), vec!["chicken", "rice", "soy sauce"]);
    }

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::try_parse_from([
            "recipe-finder", "search", "eggs,milk", "butter", "--format", "json", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Search { ingredients, format, dataset, .. } => {
                assert_eq!(ingredients, vec!["eggs,milk", "butter"]);
                assert_eq!(format, OutputFormat::Json);
                assert!(dataset.is_none());
            }
            _ => panic!("expected search"),
        }
    }
}
