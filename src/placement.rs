//! The "awaiting placement" pool and its two placement paths: anchored
//! manual placement and fleet-wide randomization.

use alloc::vec::Vec;

use rand::Rng;

use crate::board::{span_from, Board};
use crate::common::GameError;
use crate::config::FLEET;
use crate::position::Position;
use crate::ship::{Ship, ShipClass};

/// Pool of ships still to be placed on one side's board. Ships leave the
/// pool as they land on the board; the match can only start once the pool
/// is empty.
#[derive(Debug, Clone)]
pub struct PlacementSession {
    pool: Vec<Ship>,
}

impl PlacementSession {
    /// Fresh pool holding the full five-ship fleet, all horizontal.
    pub fn new() -> Self {
        PlacementSession {
            pool: FLEET.iter().map(|&class| Ship::new(class)).collect(),
        }
    }

    /// Ships still awaiting placement.
    pub fn remaining(&self) -> &[Ship] {
        &self.pool
    }

    pub fn is_complete(&self) -> bool {
        self.pool.is_empty()
    }

    /// Toggle the orientation of every pooled ship. Pooled ships are never
    /// placed, so rotation cannot fail.
    pub fn rotate_all(&mut self) -> Result<(), GameError> {
        for ship in &mut self.pool {
            ship.rotate()?;
        }
        Ok(())
    }

    /// Place the pooled ship of `class` so that its `anchor_part`-th cell
    /// (0-indexed from the ship's origin) lands on `target`, projecting the
    /// rest of the hull along the ship's current orientation. Rejection
    /// leaves both the board and the pool untouched.
    pub fn place_manually(
        &mut self,
        board: &mut Board,
        class: ShipClass,
        anchor_part: usize,
        target: Position,
    ) -> Result<(), GameError> {
        let idx = self
            .pool
            .iter()
            .position(|s| s.class() == class)
            .ok_or(GameError::ShipNotInPool)?;
        let ship = &self.pool[idx];
        if anchor_part >= ship.length() {
            return Err(GameError::OutOfBounds);
        }
        let axis = ship.orientation().axis();
        let origin = target
            .offset_by(-(anchor_part as i8), axis)
            .ok_or(GameError::OutOfBounds)?;
        let span = span_from(origin, ship.orientation(), ship.length())
            .ok_or(GameError::OutOfBounds)?;
        if !board.can_place(ship.length(), &span, ship.orientation()) {
            return Err(GameError::PositionsTaken);
        }
        board.place_ship(ship.clone(), span)?;
        self.pool.remove(idx);
        Ok(())
    }

    /// Drain the pool through random placement. Per-ship placements are
    /// independent, so order only affects the resulting layout, never its
    /// validity. On failure the unplaced remainder stays in the pool.
    pub fn place_all_randomly<R: Rng>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<(), GameError> {
        while let Some(ship) = self.pool.last() {
            board.random_place(ship.clone(), rng)?;
            self.pool.pop();
        }
        Ok(())
    }
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new()
    }
}
