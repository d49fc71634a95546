use colored::Colorize;
use matchscope::trace::{NaiveWindowTrace, RabinKarpWindowTrace, VerificationStep};
use matchscope::HashParams;

use crate::response::MatchResponse;

/// Spaces are shown as a visible glyph so window boundaries stay readable
fn visible(c: char) -> char {
    if c == ' ' {
        '␣'
    } else {
        c
    }
}

fn format_step(step: &VerificationStep) -> String {
    format!(
        "{}({}) {}",
        visible(step.t_char),
        step.t_index,
        if step.equal { '✔' } else { '✖' }
    )
}

fn format_steps<'a>(steps: impl Iterator<Item = &'a VerificationStep>) -> String {
    steps.map(format_step).collect::<Vec<_>>().join(", ")
}

/// One-line description of a naive window, e.g. `G(0) ✔, E(1) ✖`
pub fn format_naive_window(trace: &NaiveWindowTrace) -> String {
    format_steps(trace.verifications.iter())
}

/// One-line description of a Rabin-Karp window
pub fn format_rabin_karp_window(trace: &RabinKarpWindowTrace) -> String {
    if trace.is_hash_mismatch() {
        return format!(
            "hash {} != {}, hash mismatch → skipped verification",
            trace.t_hash, trace.p_hash
        );
    }
    format!("hash {} == {}, {}", trace.t_hash, trace.p_hash, format_steps(trace.steps()))
}

fn format_offsets(offsets: &[usize]) -> String {
    let joined = offsets
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Prints counters and matches for both algorithms
pub fn print_summary(response: &MatchResponse, params: HashParams) {
    let naive = &response.naive;
    let rk = &response.rabin_karp;

    println!(
        "{} {} ({} chars)",
        "Text:".bold(),
        response.text,
        response.text.chars().count()
    );
    println!(
        "{} {} ({} chars)",
        "Pattern:".bold(),
        response.pattern,
        response.pattern.chars().count()
    );

    println!("\n{}", "Naive".blue());
    println!("  matches: {}", format_offsets(&naive.outcome.matches).green());
    println!("  comparisons: {}", naive.outcome.comparisons);
    println!("  time: {} ms", naive.time_ms);

    println!(
        "\n{} (base {}, modulus {})",
        "Rabin-Karp".blue(),
        params.base,
        params.modulus
    );
    println!("  matches: {}", format_offsets(&rk.outcome.matches).green());
    println!("  hash comparisons: {}", rk.outcome.hash_comparisons);
    println!("  char comparisons: {}", rk.outcome.char_comparisons);
    println!("  spurious hits: {}", rk.outcome.spurious_hits());
    println!("  time: {} ms", rk.time_ms);

    if response.agrees() {
        println!(
            "\nFound {} matches with both algorithms",
            naive.outcome.matches.len()
        );
    } else {
        println!("\n{}", "Algorithms disagree on the match set".red());
    }
}

/// Prints one line per window for each algorithm
pub fn print_explain(response: &MatchResponse) {
    println!("{}", "Naive".blue());
    if response.naive.outcome.steps.is_empty() {
        println!("  (no steps)");
    }
    for (i, trace) in response.naive.outcome.steps.iter().enumerate() {
        let line = format_naive_window(trace);
        let label = format!("[{}] Window {}:", i, trace.window);
        if trace.is_match(response.pattern.chars().count()) {
            println!("  {} {}", label.green(), line);
        } else {
            println!("  {} {}", label, line);
        }
    }

    println!("\n{}", "Rabin-Karp".blue());
    if response.rabin_karp.outcome.steps.is_empty() {
        println!("  (no steps)");
    }
    for (i, trace) in response.rabin_karp.outcome.steps.iter().enumerate() {
        let line = format_rabin_karp_window(trace);
        let label = format!("[{}] Window {}:", i, trace.window);
        match trace.verified {
            Some(true) => println!("  {} {}", label.green(), line),
            Some(false) => println!("  {} {}", label.yellow(), line),
            None => println!("  {} {}", label, line.dimmed()),
        }
    }
}
