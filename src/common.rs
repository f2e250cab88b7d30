//! Common types for the rules engine: errors and shot outcomes.

use crate::ship::ShipClass;

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a ship segment without sinking it.
    Hit,
    /// Shot sank a ship, carrying its class.
    Sunk(ShipClass),
    /// Shot sank the board's last surviving ship.
    BoardCleared(ShipClass),
}

/// Errors returned by engine operations. All are recoverable outcomes the
/// presentation layer turns into user-facing messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate string is not of the form `"<a..j>-<1..10>"`.
    InvalidPositionFormat,
    /// Computed position falls outside the 10x10 grid.
    OutOfBounds,
    /// Placement overlaps a ship already on the board.
    PositionsTaken,
    /// The targeted cell was already resolved to hit or miss.
    AlreadyFired,
    /// Hit registered against a ship that is already sunk.
    AlreadySunk,
    /// Operation requires an unplaced ship but the ship is on a board.
    ShipPlaced,
    /// Named ship class is not awaiting placement.
    ShipNotInPool,
    /// No collision-free placement exists for the ship.
    NoValidPlacement,
    /// The match cannot start or fire until the whole fleet is placed.
    FleetNotPlaced,
    /// Fire attempted by the side whose turn it is not.
    OutOfTurn,
    /// Action attempted after a winner was decided.
    GameAlreadyOver,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidPositionFormat => write!(f, "Malformed position string"),
            GameError::OutOfBounds => write!(f, "Position is outside the grid"),
            GameError::PositionsTaken => write!(f, "Placement overlaps another ship"),
            GameError::AlreadyFired => write!(f, "Square was already fired upon"),
            GameError::AlreadySunk => write!(f, "Ship is already sunk"),
            GameError::ShipPlaced => write!(f, "Ship is already placed on a board"),
            GameError::ShipNotInPool => write!(f, "Ship is not awaiting placement"),
            GameError::NoValidPlacement => write!(f, "No free placement for the ship"),
            GameError::FleetNotPlaced => write!(f, "All ships must be placed first"),
            GameError::OutOfTurn => write!(f, "It is not this side's turn"),
            GameError::GameAlreadyOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
