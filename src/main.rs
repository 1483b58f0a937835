// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod parser;
mod utils;

use anyhow::Error;
use clap::{App, Arg, ArgMatches};
use config::Config;
use controller::{ItemId, SearchBy, ToTable};
use engine::{error::ErrorKind, Dataset};
use log::LevelFilter;
use parser::{Statement, Target};
use simplelog::{TermLogger, TerminalMode};
use std::sync::Arc;
use utils::{recommendations_table, MovieInfo};

macro_rules! prompt {
    ($ed:ident) => {{
        use rustyline::error::ReadlineError;

        match $ed.readline(PROMPT) {
            Ok(line) => {
                $ed.add_history_entry(line.as_str());
                Ok(line)
            }

            Err(ReadlineError::Interrupted) => {
                continue;
            }

            Err(ReadlineError::Eof) => {
                println!("Exiting...Good bye!");
                break;
            }

            Err(e) => Err(e),
        }
    }};
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = ">> ";

fn cli() -> App<'static, 'static> {
    App::new("movie-recommender")
        .version(VERSION)
        .about("Recommends movies similar to a selected one from MovieLens ratings")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ratings")
                .long("ratings")
                .value_name("FILE")
                .help("Tab separated ratings file (u.data)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("items")
                .long("items")
                .value_name("FILE")
                .help("Pipe separated movies file (u.item)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("min-ratings")
                .long("min-ratings")
                .value_name("N")
                .help("Recommend only movies with more than N ratings")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("top")
                .long("top")
                .value_name("N")
                .help("Rows shown per recommendation, the movie itself included")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log debug messages"),
        )
}

fn load_config(matches: &ArgMatches) -> Result<Config, Error> {
    let mut config = match matches.value_of("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(ratings) = matches.value_of("ratings") {
        config.dataset.ratings = ratings.into();
    }

    if let Some(items) = matches.value_of("items") {
        config.dataset.items = items.into();
    }

    if let Some(min_ratings) = matches.value_of("min-ratings") {
        config.recommend.min_ratings = min_ratings.parse()?;
    }

    if let Some(top) = matches.value_of("top") {
        config.recommend.top = top.parse()?;
    }

    if matches.is_present("verbose") {
        config.log.level = "debug".into();
    }

    Ok(config)
}

fn resolve(dataset: &Dataset, target: &Target) -> Result<ItemId, Error> {
    match target {
        Target::Id(id) => Ok(*id),
        Target::Title(title) => dataset.resolve(title),
    }
}

fn movie_info(dataset: &Dataset, target: &Target) -> Result<MovieInfo, Error> {
    let by = match target {
        Target::Id(id) => SearchBy::id(&id.to_string()),
        Target::Title(title) => SearchBy::name(title),
    };

    let id = dataset.lookup(&by)?;
    let listing = dataset.listing(id).ok_or(ErrorKind::UnknownMovieId(id))?;
    let summary = dataset.summary().get(&id);

    Ok(MovieInfo {
        id,
        title: listing.title.clone(),
        genres: listing.genres,
        count: summary.map_or(0, |summary| summary.count),
        mean: summary.map(|summary| summary.mean),
    })
}

fn print_help() {
    println!("Help:");
    println!("h | help                              Shows this help");
    println!("q | quit                              Quit");
    println!("v | version                           Shows the version");
    println!("movies ['part']                       Lists movie titles");
    println!("info 'Title' | info id(N)             Shows a movie");
    println!("recommend 'Title' [, min(N)] [, top(N)]");
    println!("recommend id(N) [, min(N)] [, top(N)] Recommends similar movies");
    println!("reload                                Reloads the dataset files");
}

fn execute(stmt: Statement, dataset: &mut Arc<Dataset>, config: &Config) -> Result<(), Error> {
    match stmt {
        Statement::Movies(filter) => {
            let by = filter.as_deref().map(SearchBy::partial);
            let titles: Vec<_> = dataset
                .catalog()
                .iter()
                .filter(|title| by.as_ref().map_or(true, |by| by.matches("", title)))
                .collect();

            for title in &titles {
                println!("{}", title);
            }

            println!("{} movies", titles.len());
        }

        Statement::Info(target) => {
            println!("{}", movie_info(dataset, &target)?.to_table());
        }

        Statement::Recommend {
            target,
            min_ratings,
            top,
        } => {
            let min_ratings = min_ratings.unwrap_or(config.recommend.min_ratings);
            let top = top.unwrap_or(config.recommend.top);

            let id = resolve(dataset, &target)?;
            let mut recommendations = dataset.recommend_by_id(id, min_ratings)?;

            if recommendations.is_empty() {
                println!(
                    "No movies with more than {} ratings correlate with this one",
                    min_ratings
                );
            } else {
                recommendations.truncate(top);
                println!("{}", recommendations_table(&recommendations));
            }
        }

        Statement::Reload => {
            *dataset = engine::reload(&config.dataset)?;
            println!("Reloaded {} movies", dataset.catalog().len());
        }
    }

    Ok(())
}

fn main() -> Result<(), Error> {
    let matches = cli().get_matches();
    let config = load_config(&matches)?;

    let level: LevelFilter = config.log.level.parse().unwrap_or(LevelFilter::Info);
    TermLogger::init(level, simplelog::Config::default(), TerminalMode::Mixed)?;

    println!("Welcome to movie-recommender {}", VERSION);
    let mut dataset = engine::load_and_build(&config.dataset)?;
    println!(
        "Loaded {} movies, type 'help' to list the commands",
        dataset.catalog().len()
    );

    let mut rl = rustyline::Editor::<()>::new();

    loop {
        let opt: String = prompt!(rl)?;

        match opt.trim() {
            "?" | "h" | "help" => print_help(),

            "q" | "quit" => {
                println!("Bye!");
                break;
            }

            "v" | "version" => {
                println!("version: {}", VERSION);
            }

            empty if empty.is_empty() => {}

            line => match parser::parse_line(line) {
                Some(stmt) => {
                    if let Err(e) = execute(stmt, &mut dataset, &config) {
                        log::error!("{}", e);
                    }
                }

                None => println!("Invalid syntax!"),
            },
        }
    }

    Ok(())
}
