use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use recipe_finder::{cli, config, error, report};
use recipe_finder_common::{
    find_matching_recipes_with, load_recipes_from_file, top_cuisines_with, ResultSet,
    COMMON_INGREDIENTS,
};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{RecipeFinderError, Result};
use std::path::Path;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { ingredients, dataset, format, output } => {
            let ingredients = cli::collect_ingredients(&ingredients);
            let show_spinner = format == OutputFormat::Text && output.is_none();
            let results = run_search(&config, &ingredients, dataset.as_deref(), show_spinner)?;
            let cuisines = top_cuisines_with(&results.cuisine_groups, config.options.top_cuisines);

            let rendered = match format {
                OutputFormat::Text => {
                    report::render_text(&results, &cuisines, config.missing_preview)
                }
                OutputFormat::Json => report::render_json(&results, &cuisines)?,
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("✔ Results saved: {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Cuisines { ingredients, dataset } => {
            let ingredients = cli::collect_ingredients(&ingredients);
            let results = run_search(&config, &ingredients, dataset.as_deref(), true)?;
            let cuisines = top_cuisines_with(&results.cuisine_groups, config.options.top_cuisines);
            print!("{}", report::render_cuisines(&cuisines));
        }

        Commands::Staples => {
            println!("Quick add common items:");
            for name in COMMON_INGREDIENTS {
                println!("  {}", name);
            }
        }

        Commands::Config { set_dataset, show } => {
            let mut config = config;

            if let Some(path) = set_dataset {
                config.set_dataset(path)?;
                println!("✔ Dataset path saved");
            }

            if show {
                println!("Settings:");
                match &config.dataset_path {
                    Some(path) => println!("  Dataset: {}", path.display()),
                    None => println!("  Dataset: (not set)"),
                }
                if let Some(path) = Config::dataset_override() {
                    println!("  Dataset override ({}): {}", config::DATASET_ENV, path.display());
                }
                println!(
                    "  Limits: perfect {}, almost there {}, need a few more {}",
                    config.options.perfect_limit,
                    config.options.almost_there_limit,
                    config.options.need_few_more_limit
                );
                println!("  Top cuisines: {}", config.options.top_cuisines);
                println!("  Missing ingredients shown: {}", config.missing_preview);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_search(
    config: &Config,
    ingredients: &[String],
    dataset: Option<&Path>,
    show_spinner: bool,
) -> Result<ResultSet> {
    if ingredients.is_empty() {
        return Err(RecipeFinderError::NoIngredients);
    }

    let dataset_path = config.resolve_dataset(dataset)?;

    let spinner = if show_spinner {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Finding recipes...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let recipes = load_recipes_from_file(&dataset_path);
    let results = recipes.map(|recipes| {
        find_matching_recipes_with(ingredients, &recipes, &config.options)
    });

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    Ok(results?)
}
