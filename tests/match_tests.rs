use std::io::Cursor;

use battleship_ai::{
    shots_to_sink_fleet, AiPlayer, AttackOutcome, CliPlayer, Difficulty, Match, MatchConfig,
    MatchError, MatchStatus, TargetingEngine, TargetingError, TurnControl,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn config(seed: u64) -> MatchConfig {
    MatchConfig {
        seed: Some(seed),
        ..MatchConfig::default()
    }
}

fn ai_match(config: &MatchConfig, first: Difficulty, second: Difficulty) -> Match {
    Match::new(
        Box::new(AiPlayer::new(first)),
        config.board().unwrap(),
        Box::new(AiPlayer::new(second)),
        config.board().unwrap(),
    )
}

#[test]
fn test_every_pairing_finishes() {
    for (i, first) in Difficulty::ALL.into_iter().enumerate() {
        for (j, second) in Difficulty::ALL.into_iter().enumerate() {
            let config = config((i * 4 + j) as u64);
            let mut rng = config.rng(0);
            let mut game = ai_match(&config, first, second);
            game.deploy(&mut rng).unwrap();

            let report = game.run(&mut rng, config.max_shots(), |_, _| {}).unwrap();
            let winner = report.winner.expect("match should have a winner");
            assert_eq!(game.status(), MatchStatus::Won(winner));
            assert!(game.board(1 - winner).all_sunk());
            assert!(!game.board(winner).all_sunk());
            assert_eq!(report.seats[1 - winner].ships_remaining, 0);
            assert_eq!(report.seats[winner].hits, battleship_ai::TOTAL_SHIP_CELLS);
        }
    }
}

#[test]
fn test_turns_follow_turn_control() {
    let config = config(77);
    let mut rng = config.rng(0);
    let mut game = ai_match(&config, Difficulty::Insane, Difficulty::Medium);
    game.deploy(&mut rng).unwrap();

    let mut shots = Vec::new();
    game.run(&mut rng, config.max_shots(), |_, shot| shots.push(*shot))
        .unwrap();
    assert_eq!(shots[0].seat, 0);
    for pair in shots.windows(2) {
        let expected = match pair[0].control {
            TurnControl::ShootAgain => pair[0].seat,
            TurnControl::PassTurn => 1 - pair[0].seat,
        };
        assert_eq!(pair[1].seat, expected);
    }
    let last = shots.last().unwrap();
    assert!(matches!(last.outcome, AttackOutcome::GameOver(_)));
}

#[test]
fn test_shot_counts_match_boards() {
    let config = config(5);
    let mut rng = config.rng(0);
    let mut game = ai_match(&config, Difficulty::Hard, Difficulty::Easy);
    game.deploy(&mut rng).unwrap();
    let report = game.run(&mut rng, config.max_shots(), |_, _| {}).unwrap();
    assert_eq!(report.seats[0].shots, game.board(1).shots_fired());
    assert_eq!(report.seats[1].shots, game.board(0).shots_fired());
    assert_eq!(report.seats[0].name, "hard AI");
}

#[test]
fn test_finished_match_rejects_more_shots() {
    let config = config(3);
    let mut rng = config.rng(0);
    let mut game = ai_match(&config, Difficulty::Medium, Difficulty::Medium);
    game.deploy(&mut rng).unwrap();
    game.run(&mut rng, config.max_shots(), |_, _| {}).unwrap();
    assert!(matches!(game.play_shot(&mut rng), Err(MatchError::Finished)));
}

#[test]
fn test_shot_limit_is_enforced() {
    let config = config(8);
    let mut rng = config.rng(0);
    let mut game = ai_match(&config, Difficulty::Easy, Difficulty::Easy);
    game.deploy(&mut rng).unwrap();
    assert!(matches!(
        game.run(&mut rng, 3, |_, _| {}),
        Err(MatchError::ShotLimit(3))
    ));
}

#[test]
fn test_human_at_end_of_input_forfeits() {
    let config = config(12);
    let mut rng = config.rng(0);
    let mut game = Match::new(
        Box::new(CliPlayer::with_input(Cursor::new(""))),
        config.board().unwrap(),
        Box::new(AiPlayer::new(Difficulty::Medium)),
        config.board().unwrap(),
    );
    game.deploy(&mut rng).unwrap();
    assert!(game.board(0).is_deployed());
    assert!(matches!(
        game.play_shot(&mut rng),
        Err(MatchError::Targeting {
            seat: 0,
            source: TargetingError::Forfeit
        })
    ));
}

#[test]
fn test_hunting_beats_random_search() {
    let config = config(2024);
    let games = 40;
    let mut totals = [0usize; 4];
    for game in 0..games {
        for (slot, difficulty) in Difficulty::ALL.into_iter().enumerate() {
            let mut rng = config.rng(game);
            let mut board = config.board().unwrap();
            board.deploy_randomly(&mut rng).unwrap();
            let mut engine = TargetingEngine::new(difficulty);
            totals[slot] += shots_to_sink_fleet(&mut engine, &mut board, &mut rng).unwrap();
        }
    }
    let [easy, medium, hard, insane] = totals;
    assert!(medium < easy, "medium {} vs easy {}", medium, easy);
    assert!(hard < easy, "hard {} vs easy {}", hard, easy);
    assert!(insane < easy, "insane {} vs easy {}", insane, easy);
}

#[test]
fn test_shots_to_sink_fleet_is_reproducible() {
    let run = || {
        let mut rng = SmallRng::seed_from_u64(31);
        let mut board = MatchConfig::default().board().unwrap();
        board.deploy_randomly(&mut rng).unwrap();
        let mut engine = TargetingEngine::new(Difficulty::Hard);
        shots_to_sink_fleet(&mut engine, &mut board, &mut rng).unwrap()
    };
    let shots = run();
    assert_eq!(shots, run());
    assert!(shots >= battleship_ai::TOTAL_SHIP_CELLS);
    assert!(shots <= 100);
}
