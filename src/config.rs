use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
pub const NUM_SHIPS: usize = 5;

/// The classic five-ship fleet, in the order ships are offered for placement.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::Destroyer,
    ShipClass::Submarine,
    ShipClass::Cruiser,
    ShipClass::Battleship,
    ShipClass::Carrier,
];

/// Random placement resamples this many times before switching to an
/// exhaustive scan of every start and orientation.
pub const MAX_RANDOM_ATTEMPTS: usize = 100;
