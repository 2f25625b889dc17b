use anyhow::Result;
use clap::{Parser, Subcommand};
use slangdex_config::Config;
use slangdex_core::corpus::CorpusProcessor;
use slangdex_core::glossary::{Glossary, GlossaryEntry, MatchType, SearchOptions};
use slangdex_corpus_gaming::{QuizOptions, SlangProcessor};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser)]
#[command(name = "slangdex", version, about = "Gaming-slang dictionary and quiz toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a term by name or alias
    Lookup {
        query: String,
        /// Emit the card as JSON
        #[arg(long)]
        json: bool,
    },
    /// List terms, optionally filtered by game or category
    List {
        /// Game name as shown by `games`
        #[arg(long)]
        game: Option<String>,
        /// Category filter, "level1" or "level1/level2"
        #[arg(long)]
        category: Option<String>,
    },
    /// Search display names by substring (or prefix)
    Search {
        query: String,
        /// Match on prefix instead of substring
        #[arg(long)]
        prefix: bool,
        /// Maximum number of results
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Show the game index
    Games,
    /// Show the category tree
    Categories,
    /// Generate a quiz bank
    Quiz {
        /// Number of quiz items
        #[arg(long)]
        count: Option<usize>,
        /// Emit the bank as JSON
        #[arg(long)]
        json: bool,
    },
    /// Corpus statistics
    Stats,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::new();

    let processor = if config.corpus.enabled {
        SlangProcessor::with_additional_sources(&config.corpus.additional_paths)
    } else {
        tracing::warn!("Corpus disabled by configuration; starting empty");
        SlangProcessor::empty()
    };

    match cli.command {
        Command::Lookup { query, json } => match processor.resolve(&query) {
            Some(card) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&card)?);
                } else {
                    render::print_card(&card);
                }
            }
            // no match: echo the raw query
            None => println!("{query}"),
        },
        Command::List { game, category } => {
            let index = processor.index();
            if let Some(game) = game {
                if let Some(ids) = index.game_index().get(&game) {
                    for id in ids {
                        if let Some(term) = index.get(id) {
                            render::print_line(term);
                        }
                    }
                }
            } else if let Some(category) = category {
                let (level1, level2) = match category.split_once('/') {
                    Some((l1, l2)) => (l1, Some(l2)),
                    None => (category.as_str(), None),
                };
                if let Some(subtree) = index.category_index().get(level1) {
                    for (l2, ids) in subtree {
                        if level2.is_some_and(|want| want != l2.as_str()) {
                            continue;
                        }
                        for id in ids {
                            if let Some(term) = index.get(id) {
                                render::print_line(term);
                            }
                        }
                    }
                }
            } else {
                for term in index.list_all() {
                    render::print_line(term);
                }
            }
        }
        Command::Search {
            query,
            prefix,
            limit,
        } => {
            let options = SearchOptions {
                max_results: limit,
                match_type: if prefix {
                    MatchType::Prefix
                } else {
                    MatchType::Contains
                },
            };
            for entry in processor.index().search(&query, options) {
                let card = entry.to_card();
                println!("{}  {}", card.term, card.definition);
            }
        }
        Command::Games => render::print_game_index(processor.index()),
        Command::Categories => render::print_category_tree(processor.index()),
        Command::Quiz { count, json } => {
            let options = QuizOptions {
                count: count.unwrap_or(config.quiz.question_count),
                option_count: config.quiz.option_count,
                min_definition_chars: config.quiz.min_definition_chars,
                max_draw_attempts: config.quiz.max_draw_attempts,
            };
            let items = processor.quiz(&options);
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                render::print_quiz(&items);
            }
        }
        Command::Stats => render::print_stats(&processor.index().stats()),
    }

    Ok(())
}
