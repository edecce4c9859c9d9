//! Display functions for reports

use super::formatters::{frequency_bar, ranked_line};
use crate::commands::Report;
use crate::solver::ScoredWord;
use colored::Colorize;

/// Print the header line for a report
pub fn print_header(report: &Report) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}-letter {} words ",
        report.relevant_words.to_string().bright_yellow().bold(),
        report.selection.length,
        report.selection.language
    );
    println!("{}", "═".repeat(60).cyan());

    if !report.contradictions.is_empty() {
        let letters: String = report.contradictions.iter().collect();
        println!(
            "{}",
            format!("⚠ Letters marked both absent and present: {letters}").yellow()
        );
    }
}

/// Print letter frequencies by descending count
pub fn print_frequencies(report: &Report) {
    println!("\n📊 {}", "Letter frequencies:".bright_cyan().bold());

    let max_count = report.frequency_list.first().map_or(0, |&(_, n)| n);
    for &(letter, count) in &report.frequency_list {
        println!(
            "   {} {} {count}",
            letter.to_string().bright_white().bold(),
            frequency_bar(count, max_count, 30).green()
        );
    }
}

/// Print opening and second exploration words
pub fn print_start_words(report: &Report) {
    print_ranking("Start words:", &report.start_words);
    print_ranking("Second discovery words:", &report.second_discovery_words);
}

/// Print remaining answers and discovery ranking
pub fn print_suggestions(report: &Report) {
    println!(
        "\n🎯 {} {}",
        "Valid guesses:".bright_cyan().bold(),
        format!("({} remaining)", report.valid_guess_count).bright_black()
    );
    if report.valid_guesses.is_empty() {
        println!("   {}", "No word matches the constraints".red());
    }
    for (i, word) in report.valid_guesses.iter().enumerate() {
        println!("   {:>2}. {}", i + 1, word.text().bright_green());
    }

    print_ranking("Discovery words:", &report.discoveries);
}

/// Print every section
pub fn print_report(report: &Report) {
    print_header(report);
    print_frequencies(report);
    print_start_words(report);
    print_suggestions(report);
}

fn print_ranking(title: &str, ranked: &[ScoredWord]) {
    println!("\n📈 {}", title.bright_cyan().bold());
    for (i, scored) in ranked.iter().enumerate() {
        let line = ranked_line(i + 1, scored);
        if scored.is_valid_guess {
            println!("   {}", line.green());
        } else {
            println!("   {line}");
        }
    }
}
