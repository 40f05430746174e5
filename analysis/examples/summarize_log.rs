//! Battle Log Summary Example
//!
//! Reads a saved Showdown battle log and prints a per-turn recap, the key
//! moments and aggregate stats. Pass `--json` to dump the whole summary.
//!
//! ```text
//! RUST_LOG=vgcscope_analysis=debug cargo run --example summarize_log -- battle.log
//! ```

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;
use vgcscope_analysis::{ActionDetails, AnalyzerConfig, BattleSummary, LogAnalyzer};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => path = Some(arg),
        }
    }
    let Some(path) = path else {
        bail!("usage: summarize_log [--json] <battle.log>");
    };

    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let summary = LogAnalyzer::new(AnalyzerConfig::from_env()).parse(&raw)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &BattleSummary) {
    println!("{}", "=".repeat(60));
    println!(
        "{} vs {}  [{}]",
        display_name(&summary.player1.name),
        display_name(&summary.player2.name),
        summary.format
    );
    println!("{}", "=".repeat(60));

    for turn in &summary.turns {
        println!("Turn {}", turn.number);
        for action in &turn.actions {
            let what = match &action.details {
                ActionDetails::Move {
                    move_ref,
                    target,
                    outcome,
                } => {
                    let mut line = format!("used {}", move_ref.name);
                    if let Some(target) = target {
                        line.push_str(&format!(" on {target}"));
                    }
                    if outcome.damage > 0.0 {
                        line.push_str(&format!(" ({:.0}%)", outcome.damage));
                    }
                    line
                }
                ActionDetails::Switch { switch_to } => format!("sent out {switch_to}"),
                ActionDetails::Faint { pokemon } => format!("lost {pokemon}"),
                ActionDetails::Other => continue,
            };
            println!("  {:<8} {}", action.player, what);
        }
    }

    println!("{}", "-".repeat(60));
    for moment in &summary.key_moments {
        println!(
            "[turn {:>2}] {:<12} {}",
            moment.turn, moment.moment_type, moment.description
        );
    }

    println!("{}", "-".repeat(60));
    let stats = &summary.stats;
    println!("Turns: {}  Moves: {}  Switches: {}", stats.total_turns, stats.total_moves, stats.switches);
    if let Some((id, count)) = stats.most_used_move() {
        println!("Most used move: {id} x{count}");
    }
    println!(
        "Avg damage/turn: {:.1}%  Avg healing/turn: {:.1}%",
        stats.avg_damage_per_turn, stats.avg_heal_per_turn
    );

    match summary.winning_player() {
        Some(winner) => println!("Winner: {}", display_name(&winner.name)),
        None => println!("No winner recorded"),
    }
    println!("{}", "=".repeat(60));
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "(unknown)" } else { name }
}
