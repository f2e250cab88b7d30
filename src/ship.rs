//! Ship classes, orientation, and per-ship damage state.

use alloc::vec::Vec;

use crate::common::GameError;
use crate::config::{FLEET, NUM_SHIPS};
use crate::position::{Axis, Position};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Axis along which the ship's cells vary.
    pub fn axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Col,
            Orientation::Vertical => Axis::Row,
        }
    }
}

/// Closed enumeration of vessel classes, each with a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipClass {
    pub const fn length(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "carrier",
            ShipClass::Battleship => "battleship",
            ShipClass::Cruiser => "cruiser",
            ShipClass::Submarine => "submarine",
            ShipClass::Destroyer => "destroyer",
        }
    }

    /// The classic five-ship fleet in placement order.
    pub const fn fleet() -> [ShipClass; NUM_SHIPS] {
        FLEET
    }
}

/// A single vessel. Created unplaced; acquires its occupied cells when
/// assigned to exactly one board, after which class, orientation, and cells
/// are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    hits: usize,
    cells: Vec<Position>,
}

impl Ship {
    pub fn new(class: ShipClass) -> Self {
        Ship {
            class,
            orientation: Orientation::Horizontal,
            hits: 0,
            cells: Vec::new(),
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn length(&self) -> usize {
        self.class.length()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied positions; empty until placed.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    /// Every occupied cell has been hit.
    pub fn is_sunken(&self) -> bool {
        self.hits >= self.class.length()
    }

    /// Toggle orientation. Only meaningful while awaiting placement; a
    /// placed ship's footprint is fixed.
    pub fn rotate(&mut self) -> Result<(), GameError> {
        if self.is_placed() {
            return Err(GameError::ShipPlaced);
        }
        self.orientation = self.orientation.toggled();
        Ok(())
    }

    pub(crate) fn set_orientation(&mut self, orientation: Orientation) -> Result<(), GameError> {
        if self.is_placed() {
            return Err(GameError::ShipPlaced);
        }
        self.orientation = orientation;
        Ok(())
    }

    pub(crate) fn assign_cells(&mut self, cells: Vec<Position>) -> Result<(), GameError> {
        if self.is_placed() {
            return Err(GameError::ShipPlaced);
        }
        self.cells = cells;
        Ok(())
    }

    /// Record one incoming hit. Rejects hits on a ship that is already sunk;
    /// the board's terminal-cell rule makes that unreachable in normal play.
    pub fn register_hit(&mut self) -> Result<(), GameError> {
        if self.is_sunken() {
            return Err(GameError::AlreadySunk);
        }
        self.hits += 1;
        Ok(())
    }
}
