//! Terminal output formatting.

use colored::Colorize;
use gex_graph::GraphSummary;

/// Print the post-export database summary.
pub fn print_summary(summary: &GraphSummary) {
    println!();
    println!("{}", "Movie Graph Summary".bold());
    println!("{}", "─".repeat(40));

    println!("  Movies:                 {}", summary.movies.to_string().cyan());
    println!("  Actors:                 {}", summary.actors.to_string().cyan());
    println!("  Directors:              {}", summary.directors.to_string().cyan());
    println!("  ACTED_IN relationships: {}", summary.acted_in.to_string().cyan());
    println!("  DIRECTED relationships: {}", summary.directed.to_string().cyan());

    println!("{}", "─".repeat(40));
}
