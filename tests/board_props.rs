use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, Cell, GameError, Orientation, Owner, Position, Ship, BOARD_SIZE, FLEET,
};

fn random_fleet_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(Owner::Computer);
    for class in FLEET {
        board.random_place(Ship::new(class), &mut rng).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random placement always yields five disjoint, contiguous, in-bounds
    /// ships of the configured lengths.
    #[test]
    fn random_fleet_is_valid(seed in any::<u64>()) {
        let board = random_fleet_board(seed);
        prop_assert_eq!(board.active_ship_count(), 5);

        let mut seen = std::collections::BTreeSet::new();
        for ship in board.active_ships() {
            let cells = ship.cells();
            prop_assert_eq!(cells.len(), ship.class().length());
            let axis = ship.orientation().axis();
            for pair in cells.windows(2) {
                prop_assert_eq!(pair[0].offset_by(1, axis), Some(pair[1]));
            }
            for &p in cells {
                prop_assert!(seen.insert(p), "ships overlap at {}", p);
                prop_assert_eq!(board.cell_at(p), Cell::Ship(ship.class()));
            }
        }
    }

    /// A second shot at the same cell always reports `AlreadyFired` and
    /// leaves every cell untouched.
    #[test]
    fn fire_is_idempotent(seed in any::<u64>(),
                          row in 0..BOARD_SIZE,
                          col in 0..BOARD_SIZE) {
        let mut board = random_fleet_board(seed);
        let target = Position::new(row, col).unwrap();
        board.fire_at(target).unwrap();
        let snapshot: Vec<Cell> = Position::all().map(|p| board.cell_at(p)).collect();

        prop_assert_eq!(board.fire_at(target).unwrap_err(), GameError::AlreadyFired);
        let after: Vec<Cell> = Position::all().map(|p| board.cell_at(p)).collect();
        prop_assert_eq!(snapshot, after);
    }

    /// `can_place` accepts a well-formed span exactly when every cell of the
    /// span is still empty.
    #[test]
    fn can_place_iff_span_is_free(seed in any::<u64>(),
                                  row in 0..BOARD_SIZE,
                                  col in 0..BOARD_SIZE,
                                  len in 2usize..=5,
                                  vertical in any::<bool>()) {
        let board = random_fleet_board(seed);
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let axis = orientation.axis();
        let origin = Position::new(row, col).unwrap();

        let mut span = Vec::with_capacity(len);
        for i in 0..len {
            match origin.offset_by(i as i8, axis) {
                Some(p) => span.push(p),
                // spans running off the edge are never placeable
                None => {
                    prop_assert!(!board.can_place(len, &span, orientation));
                    return Ok(());
                }
            }
        }
        let all_free = span.iter().all(|p| board.cell_at(*p) == Cell::Empty);
        prop_assert_eq!(board.can_place(len, &span, orientation), all_free);
    }

    /// Sinking happens exactly at the ship's length-th hit.
    #[test]
    fn sink_exactly_at_length(seed in any::<u64>()) {
        let mut board = random_fleet_board(seed);
        let ship = board.active_ships()[0].clone();
        let cells: Vec<Position> = ship.cells().to_vec();
        for (i, &p) in cells.iter().enumerate() {
            let result = board.fire_at(p).unwrap();
            if i + 1 < cells.len() {
                prop_assert_eq!(result, seabattle::ShotResult::Hit);
            } else {
                prop_assert!(matches!(
                    result,
                    seabattle::ShotResult::Sunk(c) | seabattle::ShotResult::BoardCleared(c)
                        if c == ship.class()
                ));
            }
        }
    }
}
