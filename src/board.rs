//! Board state: cell grid, active ships, placement validation, and shot
//! resolution.
//!
//! Per-cell state machine: `Empty -> Ship(class)` on placement, then
//! `Ship(class) -> Hit` or `Empty -> Miss` on fire. `Hit` and `Miss` are
//! terminal; a second shot at a resolved cell reports `AlreadyFired` and
//! mutates nothing.

use alloc::vec::Vec;

use rand::Rng;

use crate::common::{GameError, ShotResult};
use crate::config::{BOARD_SIZE, CELL_COUNT, MAX_RANDOM_ATTEMPTS};
use crate::position::{Axis, Position};
use crate::ship::{Orientation, Ship, ShipClass};

/// Which side a board belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Owner {
    Player,
    Computer,
}

impl Owner {
    pub fn name(self) -> &'static str {
        match self {
            Owner::Player => "player",
            Owner::Computer => "computer",
        }
    }

    pub fn opponent(self) -> Owner {
        match self {
            Owner::Player => Owner::Computer,
            Owner::Computer => Owner::Player,
        }
    }
}

/// State of one grid cell. The ship class doubles as the "ship present,
/// unhit" marker and is overwritten by `Hit` once struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Miss,
    Hit,
    Ship(ShipClass),
}

/// One side's 10x10 grid plus its surviving ships.
#[derive(Debug, Clone)]
pub struct Board {
    owner: Owner,
    cells: [Cell; CELL_COUNT],
    ships: Vec<Ship>,
}

/// Cells of a straight run of `length` starting at `origin`, or `None` when
/// the run leaves the grid.
pub(crate) fn span_from(
    origin: Position,
    orientation: Orientation,
    length: usize,
) -> Option<Vec<Position>> {
    let axis = orientation.axis();
    let mut cells = Vec::with_capacity(length);
    for i in 0..length {
        cells.push(origin.offset_by(i as i8, axis)?);
    }
    Some(cells)
}

fn span_is_contiguous(positions: &[Position], orientation: Orientation) -> bool {
    let axis = orientation.axis();
    positions
        .windows(2)
        .all(|pair| pair[0].offset_by(1, axis) == Some(pair[1]))
}

impl Board {
    /// Empty board: every cell `Empty`, no ships.
    pub fn new(owner: Owner) -> Self {
        Board {
            owner,
            cells: [Cell::Empty; CELL_COUNT],
            ships: Vec::new(),
        }
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub fn cell_at(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Ships still afloat. Sunk ships drop out as they go down.
    pub fn active_ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn active_ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Positions never yet fired upon, in row-major order.
    pub fn unfired_positions(&self) -> Vec<Position> {
        Position::all()
            .filter(|p| !matches!(self.cell_at(*p), Cell::Hit | Cell::Miss))
            .collect()
    }

    /// True iff `positions` is a straight, contiguous run of exactly
    /// `length` cells along `orientation` and every cell is currently empty.
    pub fn can_place(
        &self,
        length: usize,
        positions: &[Position],
        orientation: Orientation,
    ) -> bool {
        positions.len() == length
            && span_is_contiguous(positions, orientation)
            && positions.iter().all(|p| self.cell_at(*p) == Cell::Empty)
    }

    /// Place `ship` onto the given cells. Rejects without state change when
    /// the span is malformed (`OutOfBounds`) or collides with an existing
    /// ship (`PositionsTaken`).
    pub fn place_ship(&mut self, mut ship: Ship, positions: Vec<Position>) -> Result<(), GameError> {
        if ship.is_placed() {
            return Err(GameError::ShipPlaced);
        }
        if positions.len() != ship.length() || !span_is_contiguous(&positions, ship.orientation()) {
            return Err(GameError::OutOfBounds);
        }
        if positions.iter().any(|p| self.cell_at(*p) != Cell::Empty) {
            return Err(GameError::PositionsTaken);
        }
        let class = ship.class();
        for p in &positions {
            self.cells[p.index()] = Cell::Ship(class);
        }
        ship.assign_cells(positions)?;
        log::debug!("placed {} on the {} board", class.name(), self.owner.name());
        self.ships.push(ship);
        Ok(())
    }

    /// Place `ship` at a random collision-free spot.
    ///
    /// Samples a start cell and orientation; a span that would overrun the
    /// edge is shifted back by the overflow so it still fits, which keeps
    /// boundary starts usable instead of wasting the sample. Overlaps are
    /// resampled up to `MAX_RANDOM_ATTEMPTS`, after which every origin and
    /// orientation is scanned so the call terminates with either a placement
    /// or `NoValidPlacement`.
    pub fn random_place<R: Rng>(&mut self, mut ship: Ship, rng: &mut R) -> Result<(), GameError> {
        if ship.is_placed() {
            return Err(GameError::ShipPlaced);
        }
        let length = ship.length();
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let start = Position::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            )?;
            let axis = orientation.axis();
            let anchor = match axis {
                Axis::Row => start.row(),
                Axis::Col => start.col(),
            };
            let overflow = (anchor as usize + length).saturating_sub(BOARD_SIZE as usize);
            let origin = match start.offset_by(-(overflow as i8), axis) {
                Some(p) => p,
                None => continue,
            };
            let span = match span_from(origin, orientation, length) {
                Some(s) => s,
                None => continue,
            };
            if self.can_place(length, &span, orientation) {
                ship.set_orientation(orientation)?;
                return self.place_ship(ship, span);
            }
        }
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for origin in Position::all() {
                let span = match span_from(origin, orientation, length) {
                    Some(s) => s,
                    None => continue,
                };
                if self.can_place(length, &span, orientation) {
                    ship.set_orientation(orientation)?;
                    return self.place_ship(ship, span);
                }
            }
        }
        Err(GameError::NoValidPlacement)
    }

    /// Resolve a shot at `position`.
    pub fn fire_at(&mut self, position: Position) -> Result<ShotResult, GameError> {
        match self.cell_at(position) {
            Cell::Hit | Cell::Miss => Err(GameError::AlreadyFired),
            Cell::Empty => {
                self.cells[position.index()] = Cell::Miss;
                Ok(ShotResult::Miss)
            }
            Cell::Ship(class) => {
                let idx = self
                    .ships
                    .iter()
                    .position(|s| s.class() == class)
                    .ok_or(GameError::AlreadySunk)?;
                self.ships[idx].register_hit()?;
                self.cells[position.index()] = Cell::Hit;
                if self.ships[idx].is_sunken() {
                    let ship = self.ships.remove(idx);
                    log::info!(
                        "{} sunk on the {} board",
                        ship.class().name(),
                        self.owner.name()
                    );
                    if self.ships.is_empty() {
                        Ok(ShotResult::BoardCleared(class))
                    } else {
                        Ok(ShotResult::Sunk(class))
                    }
                } else {
                    Ok(ShotResult::Hit)
                }
            }
        }
    }
}
