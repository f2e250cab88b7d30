use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, Cell, GameError, Owner, PlacementSession, Position, ShipClass, NUM_SHIPS,
};

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

#[test]
fn test_new_session_holds_full_fleet() {
    let session = PlacementSession::new();
    assert_eq!(session.remaining().len(), NUM_SHIPS);
    assert!(!session.is_complete());
}

#[test]
fn test_manual_placement_anchor_zero() {
    let mut board = Board::new(Owner::Player);
    let mut session = PlacementSession::new();

    session
        .place_manually(&mut board, ShipClass::Destroyer, 0, pos("a-1"))
        .unwrap();
    assert_eq!(board.cell_at(pos("a-1")), Cell::Ship(ShipClass::Destroyer));
    assert_eq!(board.cell_at(pos("a-2")), Cell::Ship(ShipClass::Destroyer));
    assert_eq!(session.remaining().len(), NUM_SHIPS - 1);
    assert!(session
        .remaining()
        .iter()
        .all(|s| s.class() != ShipClass::Destroyer));
}

#[test]
fn test_manual_placement_anchor_offsets_span() {
    let mut board = Board::new(Owner::Player);
    let mut session = PlacementSession::new();

    // anchoring the middle cell of the cruiser on e-5 spans e-4..e-6
    session
        .place_manually(&mut board, ShipClass::Cruiser, 1, pos("e-5"))
        .unwrap();
    for cell in ["e-4", "e-5", "e-6"] {
        assert_eq!(board.cell_at(pos(cell)), Cell::Ship(ShipClass::Cruiser));
    }
}

#[test]
fn test_manual_placement_rejects_out_of_bounds() {
    let mut board = Board::new(Owner::Player);
    let mut session = PlacementSession::new();

    // anchor part 1 on column 1 would push the origin off the left edge
    assert_eq!(
        session
            .place_manually(&mut board, ShipClass::Destroyer, 1, pos("a-1"))
            .unwrap_err(),
        GameError::OutOfBounds
    );
    // span would overrun the right edge
    assert_eq!(
        session
            .place_manually(&mut board, ShipClass::Carrier, 0, pos("a-8"))
            .unwrap_err(),
        GameError::OutOfBounds
    );
    // anchor part beyond the hull
    assert_eq!(
        session
            .place_manually(&mut board, ShipClass::Destroyer, 2, pos("a-5"))
            .unwrap_err(),
        GameError::OutOfBounds
    );
    assert_eq!(session.remaining().len(), NUM_SHIPS);
    assert_eq!(board.active_ship_count(), 0);
}

#[test]
fn test_manual_placement_rejects_overlap_without_change() {
    let mut board = Board::new(Owner::Player);
    let mut session = PlacementSession::new();

    session
        .place_manually(&mut board, ShipClass::Destroyer, 0, pos("a-1"))
        .unwrap();
    assert_eq!(
        session
            .place_manually(&mut board, ShipClass::Submarine, 0, pos("a-2"))
            .unwrap_err(),
        GameError::PositionsTaken
    );
    assert_eq!(board.active_ship_count(), 1);
    assert_eq!(session.remaining().len(), NUM_SHIPS - 1);
    assert_eq!(board.cell_at(pos("a-3")), Cell::Empty);
}

#[test]
fn test_placing_same_class_twice_fails() {
    let mut board = Board::new(Owner::Player);
    let mut session = PlacementSession::new();

    session
        .place_manually(&mut board, ShipClass::Destroyer, 0, pos("a-1"))
        .unwrap();
    assert_eq!(
        session
            .place_manually(&mut board, ShipClass::Destroyer, 0, pos("c-1"))
            .unwrap_err(),
        GameError::ShipNotInPool
    );
}

#[test]
fn test_rotate_all_then_place_vertical() {
    let mut board = Board::new(Owner::Player);
    let mut session = PlacementSession::new();

    session.rotate_all().unwrap();
    session
        .place_manually(&mut board, ShipClass::Cruiser, 0, pos("a-1"))
        .unwrap();
    for cell in ["a-1", "b-1", "c-1"] {
        assert_eq!(board.cell_at(pos(cell)), Cell::Ship(ShipClass::Cruiser));
    }
}

#[test]
fn test_place_all_randomly_drains_pool() {
    let mut board = Board::new(Owner::Player);
    let mut session = PlacementSession::new();
    let mut rng = SmallRng::seed_from_u64(99);

    session.place_all_randomly(&mut board, &mut rng).unwrap();
    assert!(session.is_complete());
    assert_eq!(board.active_ship_count(), NUM_SHIPS);
}

#[test]
fn test_place_all_randomly_after_manual_start() {
    let mut board = Board::new(Owner::Player);
    let mut session = PlacementSession::new();
    let mut rng = SmallRng::seed_from_u64(3);

    session
        .place_manually(&mut board, ShipClass::Carrier, 0, pos("j-1"))
        .unwrap();
    session.place_all_randomly(&mut board, &mut rng).unwrap();
    assert!(session.is_complete());
    assert_eq!(board.active_ship_count(), NUM_SHIPS);
}
