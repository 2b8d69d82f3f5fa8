use battleship_ai::{
    AttackOutcome, Board, BoardError, GridView, Location, Orientation, ShipType, TileView,
    BOARD_HEIGHT, BOARD_WIDTH, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_manual_place_and_attack_sink() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
    board.place(0, Location::new(0, 0), Orientation::Horizontal).unwrap();
    board.place(1, Location::new(5, 5), Orientation::Vertical).unwrap();

    assert_eq!(board.attack(Location::new(0, 0)).unwrap(), AttackOutcome::Hit);
    assert_eq!(
        board.attack(Location::new(0, 1)).unwrap(),
        AttackOutcome::Destroyed("Tug")
    );
    assert_eq!(board.ships_remaining(), 1);
    assert!(board.ships()[0].unwrap().is_sunk());

    // repeated shot changes nothing
    assert_eq!(
        board.attack(Location::new(0, 1)).unwrap(),
        AttackOutcome::AlreadyShot
    );
    assert_eq!(board.shots_fired(), 2);
}

#[test]
fn test_last_ship_ends_the_game() {
    let fleet = [ShipType::new("Tug", 2), ShipType::new("Submarine", 3)];
    let mut board = Board::with_fleet(6, 6, &fleet).unwrap();
    board.place(0, Location::new(0, 0), Orientation::Vertical).unwrap();
    board.place(1, Location::new(3, 2), Orientation::Horizontal).unwrap();

    for column in 2..5 {
        board.attack(Location::new(3, column)).unwrap();
    }
    assert_eq!(board.attack(Location::new(0, 0)).unwrap(), AttackOutcome::Hit);
    assert_eq!(
        board.attack(Location::new(1, 0)).unwrap(),
        AttackOutcome::GameOver("Tug")
    );
    assert!(board.all_sunk());
}

#[test]
fn test_miss_marks_the_cell() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
    let at = Location::new(9, 9);
    assert!(board.is_unattacked(at));
    assert_eq!(board.attack(at).unwrap(), AttackOutcome::Miss);
    assert_eq!(board.tile(at), Some(TileView::Miss));
    assert!(!board.is_unattacked(at));
}

#[test]
fn test_attack_off_the_board_is_an_error() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
    let at = Location::new(BOARD_HEIGHT, 0);
    assert_eq!(board.attack(at), Err(BoardError::OutOfBounds(at)));
    assert_eq!(board.tile(at), None);
}

#[test]
fn test_attacker_view_hides_ships() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
    board.place(4, Location::new(2, 2), Orientation::Horizontal).unwrap();
    let at = Location::new(2, 3);
    assert_eq!(board.tile(at), Some(TileView::Sea));
    assert_eq!(board.reveal(at), Some(TileView::Ship));
    board.attack(at).unwrap();
    assert_eq!(board.tile(at), Some(TileView::Hit));
    assert_eq!(board.reveal(at), Some(TileView::Hit));
}

#[test]
fn test_placement_errors() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
    assert_eq!(
        board.place(NUM_SHIPS, Location::new(0, 0), Orientation::Horizontal),
        Err(BoardError::InvalidIndex)
    );
    assert_eq!(
        board.place(4, Location::new(0, 6), Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    board.place(4, Location::new(0, 0), Orientation::Vertical).unwrap();
    assert_eq!(
        board.place(4, Location::new(0, 5), Orientation::Vertical),
        Err(BoardError::ShipAlreadyPlaced)
    );
    assert_eq!(
        board.place(3, Location::new(2, 0), Orientation::Horizontal),
        Err(BoardError::ShipOverlaps)
    );
}

#[test]
fn test_oversized_board_is_rejected() {
    assert!(matches!(Board::new(12, 12), Err(BoardError::Grid(_))));
    assert!(Board::new(16, 8).is_ok());
}

#[test]
fn test_deploy_randomly_places_whole_fleet() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    board.deploy_randomly(&mut rng).unwrap();
    assert!(board.is_deployed());
    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    assert_eq!(board.ships_remaining(), FLEET.len());
}

#[test]
fn test_fleet_that_cannot_fit_fails() {
    let fleet = [ShipType::new("Aircraft Carrier", 5)];
    let mut board = Board::with_fleet(3, 3, &fleet).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        board.deploy_randomly(&mut rng),
        Err(BoardError::UnableToPlaceShip)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn attack_is_idempotent(seed in any::<u64>(), row in 0..BOARD_HEIGHT, column in 0..BOARD_WIDTH) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
        board.deploy_randomly(&mut rng).unwrap();
        let at = Location::new(row, column);

        let first = board.attack(at).unwrap();
        prop_assert_ne!(first, AttackOutcome::AlreadyShot);
        let hits = board.hits();
        let misses = board.misses();
        prop_assert_eq!(board.attack(at).unwrap(), AttackOutcome::AlreadyShot);
        prop_assert_eq!(board.hits(), hits);
        prop_assert_eq!(board.misses(), misses);
    }

    #[test]
    fn hits_match_ship_cells(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
        board.deploy_randomly(&mut rng).unwrap();
        for _ in 0..rng.random_range(0..BOARD_WIDTH * BOARD_HEIGHT) {
            let at = Location::new(
                rng.random_range(0..BOARD_HEIGHT),
                rng.random_range(0..BOARD_WIDTH),
            );
            let outcome = board.attack(at).unwrap();
            if outcome != AttackOutcome::AlreadyShot {
                prop_assert_eq!(outcome.is_hit(), board.ship_map().get(at).unwrap());
            }
        }
        prop_assert!((board.hits() & board.misses()).is_empty());
        prop_assert!((board.hits() & !board.ship_map()).is_empty());
        let struck: usize = board.ships().iter().flatten().map(|s| s.hits()).sum();
        prop_assert_eq!(struck, board.hits().count_ones());
    }
}
