#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_ai::{
    init_logging, shots_to_sink_fleet, ui::print_player_view, AiPlayer, CliPlayer, Difficulty,
    Match, MatchConfig, MatchStatus, TargetingEngine, BOARD_HEIGHT, BOARD_WIDTH,
};
#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
#[cfg(feature = "std")]
struct BoardArgs {
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
impl From<BoardArgs> for MatchConfig {
    fn from(args: BoardArgs) -> Self {
        MatchConfig {
            width: args.width,
            height: args.height,
            seed: args.seed,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        first: Difficulty,
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        second: Difficulty,
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Play against a computer player on the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Measure how many shots each difficulty needs to sink a fleet.
    Compare {
        #[arg(long, default_value_t = 100)]
        games: u64,
        #[command(flatten)]
        board: BoardArgs,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Watch {
            first,
            second,
            board,
        } => watch(first, second, board.into()),
        Commands::Play { difficulty, board } => play(difficulty, board.into()),
        Commands::Compare { games, board } => compare(games, board.into()),
    }
}

#[cfg(feature = "std")]
fn watch(first: Difficulty, second: Difficulty, config: MatchConfig) -> anyhow::Result<()> {
    println!("Starting {} AI vs {} AI...", first, second);
    if let Some(s) = config.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = config.rng(0);
    let mut game = Match::new(
        Box::new(AiPlayer::new(first)),
        config.board()?,
        Box::new(AiPlayer::new(second)),
        config.board()?,
    );
    game.deploy(&mut rng)?;

    let report = game.run(&mut rng, config.max_shots(), |game, shot| {
        println!(
            "{:>10} fires at {:<4} {}",
            game.player_name(shot.seat),
            shot.at.to_string(),
            shot.outcome
        );
    })?;

    for seat in 0..2 {
        println!("\n{}'s fleet:", game.player_name(seat));
        print!("{}", battleship_ai::ui::render_own_board(game.board(seat)));
    }
    for seat in &report.seats {
        println!(
            "{}: {} shots, {} hits, {} ships afloat",
            seat.name, seat.shots, seat.hits, seat.ships_remaining
        );
    }
    if let Some(winner) = report.winner {
        println!("\n{} wins!", report.seats[winner].name);
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(difficulty: Difficulty, config: MatchConfig) -> anyhow::Result<()> {
    println!("Starting game against the {} AI...", difficulty);
    if let Some(s) = config.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = config.rng(0);
    let mut game = Match::new(
        Box::new(CliPlayer::new()),
        config.board()?,
        Box::new(AiPlayer::new(difficulty)),
        config.board()?,
    );
    game.deploy(&mut rng)?;

    let mut last_turn = None;
    while game.status() == MatchStatus::InProgress {
        if game.current() == 0 && last_turn != Some(0) {
            println!("\n=== YOUR TURN ===");
            print_player_view(game.board(0), game.board(1));
        }
        last_turn = Some(game.current());
        if let Err(e) = game.play_shot(&mut rng) {
            eprintln!("Game ended with an error: {}", e);
            return Ok(());
        }
    }

    println!("\n=== GAME OVER ===");
    print_player_view(game.board(0), game.board(1));
    match game.status() {
        MatchStatus::Won(0) => {
            println!("\nVICTORY!");
            println!("You have sunk all enemy ships!");
        }
        _ => {
            println!("\nDEFEAT");
            println!("All your ships have been destroyed.");
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn compare(games: u64, config: MatchConfig) -> anyhow::Result<()> {
    println!("{:<8} {:>8} {:>6} {:>6}", "level", "average", "best", "worst");
    for difficulty in Difficulty::ALL {
        let mut total = 0usize;
        let mut best = usize::MAX;
        let mut worst = 0usize;
        for game in 0..games {
            // Same seed per game index, so every level faces the same fleets.
            let mut rng = config.rng(game);
            let mut board = config.board()?;
            board.deploy_randomly(&mut rng)?;
            let mut engine = TargetingEngine::new(difficulty);
            let shots = shots_to_sink_fleet(&mut engine, &mut board, &mut rng)?;
            total += shots;
            best = best.min(shots);
            worst = worst.max(shots);
        }
        let average = total as f64 / games.max(1) as f64;
        println!("{:<8} {:>8.1} {:>6} {:>6}", difficulty, average, best, worst);
    }
    Ok(())
}
