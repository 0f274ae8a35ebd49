mod logging;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::Rng;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use wordsearch_core::{
    rng, ChallengeConfig, FinderEvent, LevelData, LevelGenerator, Position, WordCatalog,
    WordFinder, WordPlacement, WordsFile,
};

/// Generate and check word search puzzles
#[derive(Parser, Debug)]
#[command(name = "wordsearch", version, about)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a category level and print it
    Generate {
        #[command(flatten)]
        level: LevelArgs,
        /// Print the level as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a challenge level mixing every loaded category
    Challenge {
        #[command(flatten)]
        words: WordSource,
        #[arg(long, default_value_t = 14)]
        rows: usize,
        #[arg(long, default_value_t = 22)]
        cols: usize,
        /// Number of words to hide
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Seed for a reproducible challenge (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Check a selection against a level
    Check {
        #[command(flatten)]
        level: LevelArgs,
        /// Selected cells, e.g. "0,0 0,1 0,2"
        #[arg(long)]
        cells: String,
    },
    /// Reveal a random word of a level
    Hint {
        #[command(flatten)]
        level: LevelArgs,
    },
}

#[derive(Args, Debug)]
struct WordSource {
    /// Words files (JSON with `categoryId` and `words`)
    #[arg(long = "words", required = true, num_args = 1..)]
    files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct LevelArgs {
    #[command(flatten)]
    words: WordSource,
    /// Category id to play
    #[arg(long)]
    category: String,
    /// Level number within the category
    #[arg(long, default_value_t = 1)]
    level: u32,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    matched: Option<&'a WordPlacement>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Command::Generate { level, json } => {
            let data = load_level(&level)?;
            print_level(&data, json)?;
        }
        Command::Challenge {
            words,
            rows,
            cols,
            count,
            seed,
            json,
        } => {
            let catalog = load_catalog(&words)?;
            let config = ChallengeConfig {
                rows,
                cols,
                word_count: count,
            };
            let seed = seed.unwrap_or_else(rng::entropy_seed);
            let data = LevelGenerator::new().generate_challenge(&catalog, &config, seed)?;
            print_level(&data, json)?;
        }
        Command::Check { level, cells } => {
            let data = load_level(&level)?;
            let selection = parse_cells(&cells)?;
            let mut finder = data.finder();
            let matched = finder.check_selection(&selection);
            println!(
                "{}",
                serde_json::to_string_pretty(&CheckOutput { matched })?
            );
        }
        Command::Hint { level } => {
            let data = load_level(&level)?;
            let mut finder = data.finder();
            for line in reveal_hint(&mut finder, &mut rand::thread_rng()) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn load_catalog(source: &WordSource) -> Result<WordCatalog> {
    let mut catalog = WordCatalog::new();
    for path in &source.files {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading words file {}", path.display()))?;
        let file = WordsFile::from_json(&json)
            .with_context(|| format!("parsing words file {}", path.display()))?;
        catalog.add_words_file(&file)?;
        log::debug!(
            "Loaded category '{}' ({} words)",
            file.category_id,
            file.words.len()
        );
    }
    Ok(catalog)
}

fn load_level(args: &LevelArgs) -> Result<LevelData> {
    let catalog = load_catalog(&args.words)?;
    let level = LevelGenerator::new()
        .generate_from_catalog(&catalog, &args.category, args.level)
        .with_context(|| format!("generating {} level {}", args.category, args.level))?;
    Ok(level)
}

fn print_level(level: &LevelData, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(level)?);
        return Ok(());
    }

    println!(
        "{} #{} ({}), seed {}",
        level.category_id(),
        level.level_number(),
        level.difficulty(),
        level.seed()
    );
    println!();
    println!("{}", level.grid());
    println!();
    for placement in level.placements() {
        println!("  {}", placement.display_word);
    }
    Ok(())
}

/// Reveal one random unfound word and report it with the events it raised
fn reveal_hint<R: Rng + ?Sized>(finder: &mut WordFinder, rng: &mut R) -> Vec<String> {
    let Some(placement) = finder.get_hint(rng).cloned() else {
        return vec!["No words left to reveal".to_string()];
    };
    finder.reveal_word(&placement);

    let mut lines = vec![placement.to_string()];
    for event in finder.take_events() {
        lines.push(match event {
            FinderEvent::WordFound { index, word } => format!("found #{}: {}", index, word),
            FinderEvent::AllWordsFound => "all words found".to_string(),
        });
    }
    lines
}

/// Parse "r,c r,c ..." into positions
fn parse_cells(input: &str) -> Result<Vec<Position>> {
    input
        .split_whitespace()
        .map(|pair| {
            let Some((row, col)) = pair.split_once(',') else {
                bail!("expected row,col but got '{}'", pair);
            };
            let row = row.trim().parse::<usize>().with_context(|| format!("bad row in '{}'", pair))?;
            let col = col.trim().parse::<usize>().with_context(|| format!("bad col in '{}'", pair))?;
            Ok(Position::new(row, col))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single_word_level() -> LevelData {
        let words = vec!["GATO".to_string()];
        LevelGenerator::new()
            .generate("animais", 1, &words, &words)
            .unwrap()
    }

    #[test]
    fn test_parse_cells() {
        let cells = parse_cells("0,0 0,1  2,3").unwrap();
        assert_eq!(
            cells,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(2, 3)]
        );
    }

    #[test]
    fn test_parse_cells_rejects_garbage() {
        assert!(parse_cells("0;0").is_err());
        assert!(parse_cells("a,1").is_err());
        assert!(parse_cells("1,-1").is_err());
    }

    #[test]
    fn test_reveal_hint_reports_events() {
        let level = single_word_level();
        let mut finder = level.finder();
        let mut rng = StdRng::seed_from_u64(7);

        let lines = reveal_hint(&mut finder, &mut rng);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], level.placements()[0].to_string());
        assert_eq!(lines[1], "found #0: GATO");
        assert_eq!(lines[2], "all words found");
        assert!(finder.take_events().is_empty());

        let lines = reveal_hint(&mut finder, &mut rng);
        assert_eq!(lines, ["No words left to reveal"]);
    }

    #[test]
    fn test_reveal_hint_skips_found_words() {
        let words = vec!["GATO".to_string(), "SAPO".to_string()];
        let level = LevelGenerator::new()
            .generate("animais", 2, &words, &words)
            .unwrap();
        assert_eq!(level.placements().len(), 2);
        let (first, second) = (&level.placements()[0], &level.placements()[1]);

        let mut finder = level.finder();
        assert!(finder.check_selection(&first.cell_positions()).is_some());
        finder.take_events();

        let lines = reveal_hint(&mut finder, &mut StdRng::seed_from_u64(1));
        assert_eq!(
            lines,
            [
                second.to_string(),
                format!("found #1: {}", second.normalized_word),
                "all words found".to_string(),
            ]
        );
    }

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from([
            "wordsearch",
            "generate",
            "--words",
            "animais.json",
            "--category",
            "animais",
            "--level",
            "7",
        ])
        .unwrap();
        match cli.command {
            Command::Generate { level, json } => {
                assert_eq!(level.category, "animais");
                assert_eq!(level.level, 7);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
