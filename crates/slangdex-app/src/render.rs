use slangdex_core::corpus::TermCard;
use slangdex_corpus_gaming::{IndexStats, QuizItem, Term, TermIndex};

pub fn print_card(card: &TermCard) {
    println!("{}", card.term);
    println!("  {}", card.definition);
    if !card.games.is_empty() {
        println!("  游戏: {}", card.games.join("、"));
    }
    println!("  分类: {}", card.category.join(" / "));
    if let Some(source) = card.metadata.get("source") {
        println!("  来源: {source}");
    }
    if let Some(tags) = card.metadata.get("tags") {
        println!("  标签: {tags}");
    }
}

pub fn print_line(term: &Term) {
    println!(
        "{}  [{}]  {}",
        term.display_name, term.category.level1, term.definition
    );
}

pub fn print_game_index(index: &TermIndex) {
    for (game, ids) in index.game_index() {
        println!("{game} ({})", ids.len());
        for id in ids {
            println!("  {id}");
        }
    }
}

pub fn print_category_tree(index: &TermIndex) {
    for (level1, subtree) in index.category_index() {
        println!("{level1}");
        for (level2, ids) in subtree {
            println!("  {level2} ({})", ids.len());
            for id in ids {
                println!("    {id}");
            }
        }
    }
}

pub fn print_quiz(items: &[QuizItem]) {
    for (i, item) in items.iter().enumerate() {
        println!("{}. {}", i + 1, item.question);
        for (j, option) in item.options.iter().enumerate() {
            let letter = (b'A' + j as u8) as char;
            println!("   {letter}. {option}");
        }
        println!("   答案: {}", item.answer);
        println!();
    }
}

pub fn print_stats(stats: &IndexStats) {
    println!("terms:     {}", stats.terms);
    println!("  curated:   {}", stats.curated);
    println!("  community: {}", stats.community);
    println!("  merged:    {}", stats.merged);
    println!("games:      {}", stats.games);
    println!("categories: {}", stats.categories);
}
