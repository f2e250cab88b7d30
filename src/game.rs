//! Match controller: two boards, strict turn alternation, win detection.

use alloc::vec::Vec;

use rand::Rng;

use crate::board::{Board, Owner};
use crate::common::{GameError, ShotResult};
use crate::placement::PlacementSession;
use crate::position::Position;
use crate::ship::{Ship, ShipClass};

/// Whose fire action is expected next. Transitioned only by successful
/// fire calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Computer,
}

/// A human-vs-computer match. The computer's fleet is auto-placed at
/// construction; the player's fleet goes through the placement session
/// before `start` unlocks firing.
pub struct Match {
    player: Board,
    computer: Board,
    placement: PlacementSession,
    turn: Turn,
    started: bool,
    winner: Option<Owner>,
}

impl Match {
    /// New match with an empty player board, a full placement pool, and a
    /// randomly populated computer board.
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, GameError> {
        let mut computer = Board::new(Owner::Computer);
        let mut computer_pool = PlacementSession::new();
        computer_pool.place_all_randomly(&mut computer, rng)?;
        Ok(Match {
            player: Board::new(Owner::Player),
            computer,
            placement: PlacementSession::new(),
            turn: Turn::Player,
            started: false,
            winner: None,
        })
    }

    pub fn player_board(&self) -> &Board {
        &self.player
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Player's ships still awaiting placement.
    pub fn unplaced_ships(&self) -> &[Ship] {
        self.placement.remaining()
    }

    /// Toggle the orientation of every unplaced player ship.
    pub fn rotate_unplaced(&mut self) -> Result<(), GameError> {
        self.placement.rotate_all()
    }

    /// Anchored manual placement onto the player board.
    pub fn place_player_ship(
        &mut self,
        class: ShipClass,
        anchor_part: usize,
        target: Position,
    ) -> Result<(), GameError> {
        self.placement
            .place_manually(&mut self.player, class, anchor_part, target)
    }

    /// Randomly place every remaining player ship.
    pub fn randomize_player_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.placement.place_all_randomly(&mut self.player, rng)
    }

    pub fn placement_complete(&self) -> bool {
        self.placement.is_complete()
    }

    /// Open fire. Rejected until the whole player fleet is placed.
    pub fn start(&mut self) -> Result<(), GameError> {
        if !self.placement.is_complete() {
            return Err(GameError::FleetNotPlaced);
        }
        self.started = true;
        log::info!("game started");
        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Winner, once either board has no surviving ships.
    pub fn winner(&self) -> Option<Owner> {
        self.winner
    }

    fn ensure_live(&self) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.started {
            return Err(GameError::FleetNotPlaced);
        }
        Ok(())
    }

    /// Player shot at the computer board. A rejected shot (already-fired
    /// cell) does not consume the turn.
    pub fn player_fire(&mut self, position: Position) -> Result<ShotResult, GameError> {
        self.ensure_live()?;
        if self.turn != Turn::Player {
            return Err(GameError::OutOfTurn);
        }
        let result = self.computer.fire_at(position)?;
        if let ShotResult::BoardCleared(_) = result {
            self.winner = Some(Owner::Player);
            log::info!("player won the game");
        }
        self.turn = Turn::Computer;
        Ok(result)
    }

    /// Computer return shot: uniform-random over the player board's
    /// never-fired cells. Reports the chosen target along with the result.
    pub fn computer_fire<R: Rng>(&mut self, rng: &mut R) -> Result<(Position, ShotResult), GameError> {
        self.ensure_live()?;
        if self.turn != Turn::Computer {
            return Err(GameError::OutOfTurn);
        }
        let open: Vec<Position> = self.player.unfired_positions();
        if open.is_empty() {
            return Err(GameError::GameAlreadyOver);
        }
        let target = open[rng.random_range(0..open.len())];
        let result = self.player.fire_at(target)?;
        if let ShotResult::BoardCleared(_) = result {
            self.winner = Some(Owner::Computer);
            log::info!("computer won the game");
        }
        self.turn = Turn::Player;
        Ok((target, result))
    }
}
