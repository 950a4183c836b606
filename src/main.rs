use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::error;

use pantry_finder::{
    load_config, parse_ingredients, render_meals, FinderError, MealFinder, EMPTY_INPUT_NOTICE,
    FAILURE_NOTICE,
};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let finder = match load_config()
        .map_err(FinderError::from)
        .and_then(MealFinder::new)
    {
        Ok(finder) => finder,
        Err(err) => {
            error!("could not set up the finder: {}", err);
            eprintln!("{}", FAILURE_NOTICE);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = env::args().collect();
    if let Some(line) = args.get(1) {
        // One-shot mode: the argument is the whole ingredient line
        return run_search(&finder, line).await;
    }

    // Interactive mode: each submitted line is one search; EOF ends the session
    let stdin = io::stdin();
    loop {
        eprint!("ingredients> ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                run_search(&finder, &line).await;
            }
            Err(err) => {
                error!("could not read input: {}", err);
                break;
            }
        }
    }

    ExitCode::SUCCESS
}

async fn run_search(finder: &MealFinder, line: &str) -> ExitCode {
    if parse_ingredients(line).is_empty() {
        println!("{}", EMPTY_INPUT_NOTICE);
        return ExitCode::SUCCESS;
    }

    // Stdout is reserved for results, so the transient notice goes to stderr
    eprintln!("Searching...");

    match finder.search(line).await {
        Ok(outcome) => {
            println!("{}", render_meals(&outcome.meals, finder.meal_page_base()));
            ExitCode::SUCCESS
        }
        Err(FinderError::EmptyInput) => {
            println!("{}", EMPTY_INPUT_NOTICE);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("search failed: {}", err);
            println!("{}", FAILURE_NOTICE);
            ExitCode::FAILURE
        }
    }
}
