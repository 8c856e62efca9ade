use std::env;
use std::process;

use recipe_import::import_recipe_with_defaults;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(url) = args.get(1) else {
        eprintln!("Usage: importer <url>");
        process::exit(2);
    };

    match import_recipe_with_defaults(url).await {
        Ok(recipe) => {
            let json = serde_json::to_string_pretty(&recipe)
                .expect("Recipe serialization cannot fail");
            println!("{json}");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
