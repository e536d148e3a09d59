use clap::{Parser, Subcommand};
use serde::Serialize;
use woodnuts_core::{bolt_ids, bolt_position, Game, GameSnapshot};

#[derive(Parser)]
#[command(name = "woodnuts-cli", version, about = "Terminal driver for the wood-nuts bolt puzzle")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the board, plank support counts and removable bolts
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Apply a sequence of bolt removals against a fresh session
    Play {
        bolts: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Remove removable bolts greedily until solved or stuck
    Plan {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct StatusReport {
    removable: Vec<String>,
    planks_remaining: usize,
    snapshot: GameSnapshot,
}

#[derive(Serialize)]
struct PlayReport {
    accepted: Vec<String>,
    rejected: Vec<String>,
    snapshot: GameSnapshot,
}

#[derive(Serialize)]
struct PlanReport {
    order: Vec<String>,
    stuck: bool,
    snapshot: GameSnapshot,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status { json } => {
            let game = Game::new();
            let report = status_report(&game);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_status(&game, &report);
            }
        }
        Commands::Play { bolts, json } => {
            let unknown: Vec<&String> = bolts
                .iter()
                .filter(|bolt| bolt_position(bolt).is_none())
                .collect();
            if !unknown.is_empty() {
                for bolt in &unknown {
                    eprintln!("unknown bolt: {bolt}");
                }
                eprintln!("available bolts:");
                for bolt in bolt_ids() {
                    eprintln!("  {bolt}");
                }
                return Ok(());
            }
            let mut game = Game::new();
            let report = apply_sequence(&mut game, &bolts);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_play(&report);
            }
        }
        Commands::Plan { json } => {
            let mut game = Game::new();
            let report = greedy_plan(&mut game);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_plan(&report);
            }
        }
    }

    Ok(())
}

fn status_report(game: &Game) -> StatusReport {
    StatusReport {
        removable: game
            .removable_bolts(bolt_ids())
            .into_iter()
            .map(str::to_string)
            .collect(),
        planks_remaining: game
            .planks()
            .iter()
            .filter(|plank| !game.is_fallen(plank))
            .count(),
        snapshot: game.snapshot(),
    }
}

fn apply_sequence(game: &mut Game, bolts: &[String]) -> PlayReport {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for bolt in bolts {
        if game.remove_bolt(bolt) {
            accepted.push(bolt.clone());
        } else {
            rejected.push(bolt.clone());
        }
    }
    PlayReport {
        accepted,
        rejected,
        snapshot: game.snapshot(),
    }
}

fn greedy_plan(game: &mut Game) -> PlanReport {
    let mut order = Vec::new();
    while !game.is_solved() {
        // Only bolts that still hold a plank are worth pulling.
        let next = bolt_ids().find(|&bolt| {
            !game.is_removed(bolt)
                && game.planks().iter().any(|plank| plank.bolts.contains(&bolt))
                && game.can_remove(bolt)
        });
        let Some(bolt) = next else {
            break;
        };
        if !game.remove_bolt(bolt) {
            break;
        }
        order.push(bolt.to_string());
    }
    PlanReport {
        order,
        stuck: !game.is_solved(),
        snapshot: game.snapshot(),
    }
}

fn status_label(solved: bool) -> &'static str {
    if solved {
        "solved"
    } else {
        "in progress"
    }
}

fn print_status(game: &Game, report: &StatusReport) {
    println!("status: {}", status_label(report.snapshot.solved));
    println!("planks remaining: {}", report.planks_remaining);
    for plank in game.planks() {
        println!(
            "  {} holds {}/{} bolts",
            plank.id,
            game.remaining_bolts(plank),
            plank.bolts.len()
        );
    }
    if report.removable.is_empty() {
        println!("removable bolts: none");
    } else {
        println!("removable bolts: {}", report.removable.join(", "));
    }
}

fn print_play(report: &PlayReport) {
    for step in &report.snapshot.steps {
        println!("{step}");
    }
    for bolt in &report.rejected {
        println!("Ignored {bolt} (blocked or already removed)");
    }
    println!("status: {}", status_label(report.snapshot.solved));
}

fn print_plan(report: &PlanReport) {
    if report.order.is_empty() {
        println!("no removable bolt; the session is stuck from the start");
    } else {
        println!("removal order: {}", report.order.join(", "));
    }
    println!("status: {}", status_label(report.snapshot.solved));
    if report.stuck && !report.order.is_empty() {
        println!("stuck after {} removals", report.order.len());
    }
}
