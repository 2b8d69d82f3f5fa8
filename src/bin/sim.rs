use battleship_ai::{init_logging, AiPlayer, Difficulty, Match, MatchConfig};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <seed> [first-difficulty] [second-difficulty]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let first: Difficulty = match args.get(2) {
        Some(s) => s.parse()?,
        None => Difficulty::Hard,
    };
    let second: Difficulty = match args.get(3) {
        Some(s) => s.parse()?,
        None => Difficulty::Medium,
    };

    let config = MatchConfig {
        seed: Some(seed),
        ..MatchConfig::default()
    };
    let mut rng = config.rng(0);
    let mut game = Match::new(
        Box::new(AiPlayer::new(first)),
        config.board()?,
        Box::new(AiPlayer::new(second)),
        config.board()?,
    );
    game.deploy(&mut rng)?;
    let report = game.run(&mut rng, config.max_shots(), |_, _| {})?;

    let winner = match report.winner {
        Some(0) => Some("first"),
        Some(_) => Some("second"),
        None => None,
    };

    let result = json!({
        "seed": seed,
        "first": report.seats[0],
        "second": report.seats[1],
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
