use clap::Parser;
use recetas_rust::{cli, config, error, load_catalog, render, session};

use cli::{Cli, Commands};
use config::Config;
use error::{RecetasError, Result};
use recetas_common::{filter_by_title, scale};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let catalog = load_catalog(&config)?;

    match cli.command {
        Commands::List => {
            println!("📖 recetas - カタログ ({}件)\n", catalog.len());
            for recipe in catalog.all() {
                println!("{}", render::catalog_row(recipe));
            }
        }

        Commands::Search { query } => {
            let matches = filter_by_title(catalog.all(), &query);
            println!("🔍 \"{}\" の検索結果: {}件\n", query, matches.len());
            for recipe in matches {
                println!("{}", render::catalog_row(recipe));
            }
        }

        Commands::Show { id, servings } => {
            let recipe = catalog.get(id).ok_or(RecetasError::RecipeNotFound(id))?;
            let servings = config.clamp_servings(servings.unwrap_or(recipe.base_servings));

            print!("{}", render::recipe_header(recipe, servings));

            println!("\n材料:");
            let scaled = scale(recipe, servings)?;
            print!("{}", render::ingredient_table(&scaled));

            println!("\n手順:");
            print!("{}", render::steps_list(&recipe.steps));
        }

        Commands::Cook { id } => {
            println!("🍳 recetas - 対話モード\n");
            session::run_cook_session(&catalog, &config, id)?;
        }
    }

    Ok(())
}
