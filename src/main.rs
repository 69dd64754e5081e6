#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use flotilla::{init_logging, standard_fleet, BoardSetup, Skirmish};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Place the standard fleet at random and print the resulting board.
    Place {
        #[arg(long, default_value_t = 10)]
        rows: usize,
        #[arg(long, default_value_t = 10)]
        cols: usize,
        #[arg(long, help = "Fix RNG seed for reproducible placement (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run a full skirmish: place ships, then attack until the fleet is sunk.
    Run {
        #[arg(long, default_value_t = 10)]
        rows: usize,
        #[arg(long, default_value_t = 10)]
        cols: usize,
        #[arg(long, help = "Fix RNG seed for a reproducible game (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Maximum shots before giving up; defaults to rows*cols")]
        budget: Option<usize>,
    },
}

#[cfg(feature = "std")]
fn rng_from(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (run will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Place { rows, cols, seed } => {
            let mut rng = rng_from(seed);
            let mut board = BoardSetup::new(rows, cols, standard_fleet());
            board
                .place_all_ships(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", board.board());
            let stats = board.stats();
            println!("empty: {}  occupied: {}", stats.empty, stats.occupied);
        }
        Commands::Run {
            rows,
            cols,
            seed,
            budget,
        } => {
            let mut rng = rng_from(seed);
            let mut skirmish = Skirmish::new(rows, cols, standard_fleet());
            skirmish.setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let budget = budget.unwrap_or(rows * cols);

            let mut shots = 0;
            while shots < budget && !skirmish.strategy().all_ships_sunk() {
                let report = skirmish.step(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
                shots += 1;
                println!(
                    "Attack on ({}, {}) - {}",
                    report.x,
                    report.y,
                    if report.hit { "HIT" } else { "MISS" }
                );
            }

            println!("{}", skirmish.strategy().enemy_board());
            if skirmish.strategy().all_ships_sunk() {
                println!("All enemy ships have been sunk in {} shots!", shots);
            } else {
                println!("Shot budget of {} exhausted.", budget);
            }
        }
    }
    Ok(())
}
