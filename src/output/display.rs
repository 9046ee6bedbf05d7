//! Display functions for command results

use super::formatters::{create_progress_bar, format_time_left};
use crate::commands::{ScoreResult, SimulationResult, TodayReport};
use colored::Colorize;

/// Print the banner shown when the local client starts
pub fn print_play_banner(topic: &str, day_index: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} day {} on topic '{}'",
        "MQTT WORDLE".bright_cyan().bold(),
        day_index.to_string().bright_yellow(),
        topic
    );
    println!("{}", "═".repeat(60).cyan());
    println!("Type a 5-letter guess per line. 'quit' to exit.\n");
}

/// Print the current day report
pub fn print_today(report: &TodayReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Day {} (word {} of {})",
        report.day_number.to_string().bright_yellow().bold(),
        report.day_index,
        report.word_count
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Next word:  {} (in {})",
        report.next_word_at.format("%Y-%m-%d %H:%M:%S UTC"),
        format_time_left(report.time_left)
    );
    if let Some(answer) = &report.answer {
        println!(
            "Answer:     {}",
            answer.as_str().to_uppercase().bright_green().bold()
        );
    }
}

/// Print a scored guess/answer pair
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{} vs {}: {} {}",
        result.guess.as_str().to_uppercase(),
        result.answer.as_str().to_uppercase(),
        result.colored,
        result.feedback.to_emoji()
    );
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Traffic:".bright_cyan().bold());
    println!("   Clients:          {}", result.clients);
    println!("   Writes:           {}", result.writes);
    println!("   Replies:          {}", result.replies);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Writes/second:    {}",
        format!("{:.1}", result.writes_per_second)
            .bright_yellow()
            .bold()
    );

    println!("\n📈 {}", "Outcomes:".bright_cyan().bold());
    let total = result.clients.max(1) as f64;
    for (i, &count) in result.wins_by_attempt.iter().enumerate() {
        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {}/6: {} {count:6} ({pct:5.1}%)", i + 1, bar.green());
    }
    let pct = result.losses as f64 / total * 100.0;
    println!(
        "   x/6: {} {:6} ({pct:5.1}%)",
        create_progress_bar(pct, 100.0, 40).red(),
        result.losses
    );
    if result.unfinished > 0 {
        println!(
            "\n{}",
            format!("⚠ {} clients did not finish", result.unfinished)
                .yellow()
                .bold()
        );
    }
}
