//! Basic example of using the word search engine

use rand::SeedableRng;
use wordsearch_core::words::CategoriesFile;
use wordsearch_core::{LevelGenerator, WordCatalog, WordsFile};

fn main() -> wordsearch_core::Result<()> {
    // Load the bundled categories
    let index = CategoriesFile::from_json(include_str!("data/categories.json"))?;
    let mut catalog = WordCatalog::new();
    catalog.add_words_file(&WordsFile::from_json(include_str!("data/animais.json"))?)?;
    catalog.add_words_file(&WordsFile::from_json(include_str!("data/frutas.json"))?)?;

    for category in &index.categories {
        println!(
            "{} ({} words)",
            category.name,
            catalog.category(&category.id)?.word_count()
        );
    }

    // Generate a level
    let level = LevelGenerator::new().generate_from_catalog(&catalog, "animais", 4)?;
    println!("\nLevel {} ({}):\n", level.level_number(), level.difficulty());
    println!("{}\n", level.grid());

    // Play it: find the first word by dragging end to start
    let mut finder = level.finder();
    let first = level.placements()[0].clone();
    let mut selection = first.cell_positions();
    selection.reverse();
    if let Some(found) = finder.check_selection(&selection) {
        println!("Found {}", found.display_word);
    }

    // Use hints for the rest
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    while let Some(hint) = finder.get_hint(&mut rng).cloned() {
        println!("Hint: {}", hint);
        finder.reveal_word(&hint);
    }

    for event in finder.take_events() {
        println!("{:?}", event);
    }
    println!(
        "\n{}/{} found, {} hints used",
        finder.found_count(),
        finder.total_words(),
        finder.hints_used()
    );

    Ok(())
}
