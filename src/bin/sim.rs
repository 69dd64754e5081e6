#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use flotilla::{standard_fleet, Skirmish};
    use rand::{rngs::SmallRng, SeedableRng};
    use serde_json::json;

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <start-seed> <games>", args[0]);
        std::process::exit(1);
    }
    let start: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let mut runs = Vec::new();
    let mut total_shots = 0usize;
    let mut sunk_all = 0usize;
    for seed in start..start + games {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut skirmish = Skirmish::new(10, 10, standard_fleet());
        skirmish.setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        let summary = skirmish.run(&mut rng, 100).map_err(|e| anyhow::anyhow!(e))?;
        total_shots += summary.shots;
        if summary.all_sunk {
            sunk_all += 1;
        }
        runs.push(json!({ "seed": seed, "summary": summary }));
    }

    let result = json!({
        "games": runs,
        "mean_shots": total_shots as f64 / games as f64,
        "all_sunk_rate": sunk_all as f64 / games as f64,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
