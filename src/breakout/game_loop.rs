use std::time::Instant;

use crate::breakout::clock::TickClock;
use crate::breakout::mechanics::{BreakoutMechanics, GameCommand, TIME_GRANULARITY};

/// Drives the game mechanics from a [TickClock].
///
/// The clock runs while the game runs: it stops when the game ends and starts over when a
/// restart brings the game back. Everything happens on the caller's thread; commands are
/// applied in the order they are handed in, before the time steps of the same poll.
pub struct GameLoop {
    mechanics: BreakoutMechanics,
    clock: TickClock,
}

impl GameLoop {
    pub fn new(now: Instant) -> Self {
        let mut clock = TickClock::new(TIME_GRANULARITY);
        clock.start(now);
        Self {
            mechanics: BreakoutMechanics::new(),
            clock,
        }
    }

    pub fn mechanics(&self) -> &BreakoutMechanics {
        &self.mechanics
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn handle(&mut self, command: GameCommand, now: Instant) {
        let was_running = self.mechanics.status.is_running();
        self.mechanics.apply(command);
        if !was_running && self.mechanics.status.is_running() {
            self.clock.start(now);
        }
    }

    /// Executes the time steps due until `now` and returns how many were executed.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let due = self.clock.due_ticks(now);
        let mut executed = 0;
        for _ in 0..due {
            if !self.mechanics.status.is_running() {
                break;
            }
            self.mechanics.tick();
            executed += 1;
        }
        if !self.mechanics.status.is_running() && self.clock.is_running() {
            log::debug!("game ended with {:?} - stopping the clock", self.mechanics.status.game_result());
            self.clock.stop();
        }
        executed
    }
}

#[cfg(test)]
mod test {
    use std::time::Instant;

    use crate::breakout::algebra_2d::IPos2;
    use crate::breakout::mechanics::{Direction, GameCommand, GameResult, GameStatus, TIME_GRANULARITY};

    use super::GameLoop;

    #[test]
    fn test_advance_runs_due_ticks() {
        let start = Instant::now();
        let mut game_loop = GameLoop::new(start);
        assert_eq!(game_loop.advance(start), 0);
        assert_eq!(game_loop.advance(start + TIME_GRANULARITY * 2), 2);
        assert_eq!(game_loop.mechanics().ball.pos, IPos2::new(406, 306));
    }

    #[test]
    fn test_clock_stops_at_game_end() {
        let start = Instant::now();
        let mut game_loop = GameLoop::new(start);
        game_loop.mechanics.ball.pos = IPos2::new(20, 575);

        // second step reaches y=581
        assert_eq!(game_loop.advance(start + TIME_GRANULARITY * 5), 2);
        assert_eq!(game_loop.mechanics().status, GameStatus::Ended(GameResult::Lost));
        assert!(!game_loop.clock().is_running());
        assert_eq!(game_loop.advance(start + TIME_GRANULARITY * 50), 0);
    }

    #[test]
    fn test_restart_starts_clock() {
        let start = Instant::now();
        let mut game_loop = GameLoop::new(start);
        game_loop.mechanics.ball.pos = IPos2::new(20, 578);
        game_loop.advance(start + TIME_GRANULARITY);
        assert!(!game_loop.clock().is_running());

        let restart = start + TIME_GRANULARITY * 10;
        game_loop.handle(GameCommand::Restart, restart);
        assert!(game_loop.mechanics().status.is_running());
        assert!(game_loop.clock().is_running());
        assert_eq!(game_loop.advance(restart + TIME_GRANULARITY), 1);
        assert_eq!(game_loop.mechanics().ball.pos, IPos2::new(403, 303));
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let start = Instant::now();
        let mut game_loop = GameLoop::new(start);
        game_loop.advance(start + TIME_GRANULARITY);
        game_loop.handle(GameCommand::Restart, start + TIME_GRANULARITY);
        assert_eq!(game_loop.mechanics().ball.pos, IPos2::new(403, 303));
    }

    #[test]
    fn test_panel_commands() {
        let start = Instant::now();
        let mut game_loop = GameLoop::new(start);
        game_loop.handle(GameCommand::MovePanel(Direction::Left), start);
        game_loop.handle(GameCommand::MovePanel(Direction::Left), start);
        game_loop.handle(GameCommand::MovePanel(Direction::Right), start);
        assert_eq!(game_loop.mechanics().panel.x, 330);
    }
}
