use log::error;
use recipe_scraper::{fetch_recipe_with, ScrapeConfig};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a recipe URL as an argument")?;

    let config = ScrapeConfig::load()?;
    match fetch_recipe_with(url, &config) {
        Ok(recipe) => {
            if recipe.is_empty() {
                error!("Could not extract a recipe from this link");
            }
            println!("{}", serde_json::to_string_pretty(&recipe)?);
            Ok(())
        }
        Err(err) => {
            error!("{err}");
            Err(err.into())
        }
    }
}
