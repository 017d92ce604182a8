use std::time::Duration;

use crate::breakout::algebra_2d::{AaBB, IPos2, IVec2};
use crate::breakout::brick_field::BrickField;
use crate::breakout::mechanics::GameResult::{Lost, Won};

/// TOP / LEFT corner is 0/0
pub const MODEL_GRID_LEN_X: i32 = 800;
pub const MODEL_GRID_LEN_Y: i32 = 600;

pub const TIME_GRANULARITY: Duration = Duration::from_millis(8);

pub const PANEL_LEN_X: i32 = 100;
pub const PANEL_LEN_Y: i32 = 10;
pub const PANEL_POS_Y: i32 = MODEL_GRID_LEN_Y - 50;
const PANEL_START_POS_X: i32 = MODEL_GRID_LEN_X / 2 - PANEL_LEN_X / 2;
/// distance covered by a single key press
const PANEL_STEP_X: i32 = 20;

pub const BALL_DIAMETER: i32 = 20;
const BALL_START_POS: IPos2 = IPos2::new(MODEL_GRID_LEN_X / 2, MODEL_GRID_LEN_Y / 2);
const BALL_START_VELOCITY: IVec2 = IVec2::new(3, 3);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakoutMechanics {
    pub bricks: BrickField,
    pub ball: Ball,
    pub panel: Panel,
    pub status: GameStatus,
}

impl BreakoutMechanics {
    pub fn new() -> Self {
        Self {
            bricks: BrickField::default(),
            ball: Ball::initial(),
            panel: Panel::initial(),
            status: GameStatus::Running,
        }
    }

    /// One time step: move the ball, resolve wall, panel and brick contacts, then evaluate the end of game.
    /// Does nothing once the game has ended.
    pub fn tick(&mut self) {
        if !self.status.is_running() {
            return;
        }

        self.ball.proceed();
        log::trace!("ball at {:?}, velocity {:?}", self.ball.pos, self.ball.velocity);

        self.reflect_at_walls();
        self.reflect_at_panel();
        self.break_hit_bricks();
        self.check_game_end_situation();
    }

    fn reflect_at_walls(&mut self) {
        let ball = &mut self.ball;
        if ball.pos.x <= 0 || ball.pos.x >= MODEL_GRID_LEN_X - BALL_DIAMETER {
            log::debug!("side wall contact at x={}", ball.pos.x);
            ball.velocity.x = -ball.velocity.x;
        }
        if ball.pos.y <= 0 {
            log::debug!("ceiling contact at x={}", ball.pos.x);
            ball.velocity.y = -ball.velocity.y;
        }
    }

    /// lower ball edge at or below the panel top and horizontal spans overlapping (edges inclusive)
    fn reflect_at_panel(&mut self) {
        let ball = &mut self.ball;
        let panel_x = self.panel.x;
        if ball.pos.y + BALL_DIAMETER >= PANEL_POS_Y
            && ball.pos.x + BALL_DIAMETER >= panel_x
            && ball.pos.x <= panel_x + PANEL_LEN_X
        {
            log::debug!("panel contact at x={}", ball.pos.x);
            ball.velocity.y = -ball.velocity.y;
        }
    }

    /// Every live brick intersecting the ball breaks and flips the vertical direction once.
    /// Hitting two bricks within the same step therefore leaves the direction unchanged.
    fn break_hit_bricks(&mut self) {
        let ball_shape = self.ball.shape();
        while let Some((row, column)) = self.bricks.hit_test(&ball_shape) {
            log::debug!("brick ({row},{column}) broken");
            self.bricks.break_brick(row, column);
            self.ball.velocity.y = -self.ball.velocity.y;
        }
    }

    /// Won when no brick is left, otherwise lost when the ball reached the bottom.
    pub fn check_game_end_situation(&mut self) {
        if !self.status.is_running() {
            return;
        }
        if self.bricks.all_broken() {
            log::info!("game won");
            self.status = GameStatus::Ended(Won);
        } else if self.ball.pos.y >= MODEL_GRID_LEN_Y - BALL_DIAMETER {
            log::info!("game lost");
            self.status = GameStatus::Ended(Lost);
        }
    }

    /// Accepted in every state, including after the end of a game.
    pub fn move_panel(&mut self, direction: Direction) {
        self.panel.process_input(direction);
    }

    pub fn reset(&mut self) {
        self.panel = Panel::initial();
        self.ball = Ball::initial();
        self.bricks.reset();
        self.status = GameStatus::Running;
        log::info!("game restarted");
    }

    /// A restart request is ignored while the game is still running.
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::MovePanel(direction) => self.move_panel(direction),
            GameCommand::Restart if !self.status.is_running() => self.reset(),
            GameCommand::Restart => log::debug!("restart ignored - game is running"),
        }
    }
}

impl Default for BreakoutMechanics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Ended(GameResult),
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn game_result(&self) -> Option<GameResult> {
        match self {
            GameStatus::Running => None,
            GameStatus::Ended(result) => Some(*result),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Lost,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    MovePanel(Direction),
    Restart,
}

/// A square ball; `pos` is the upper left corner of its bounding box
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ball {
    pub pos: IPos2,
    /// per time step; only the signs ever change
    pub velocity: IVec2,
}

impl Ball {
    pub fn initial() -> Self {
        Self {
            pos: BALL_START_POS,
            velocity: BALL_START_VELOCITY,
        }
    }

    pub fn shape(&self) -> AaBB {
        AaBB::from_pos_size(self.pos.x, self.pos.y, BALL_DIAMETER, BALL_DIAMETER)
    }

    /// no clamping - the ball may leave the field by up to one step before it gets reflected
    fn proceed(&mut self) {
        self.pos = self.pos + self.velocity;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    /// left edge; the vertical position is fixed at [PANEL_POS_Y]
    pub x: i32,
}

impl Panel {
    pub fn initial() -> Self {
        Self { x: PANEL_START_POS_X }
    }

    pub fn shape(&self) -> AaBB {
        AaBB::from_pos_size(self.x, PANEL_POS_Y, PANEL_LEN_X, PANEL_LEN_Y)
    }

    fn process_input(&mut self, direction: Direction) {
        self.x = match direction {
            Direction::Left => (self.x - PANEL_STEP_X).max(0),
            Direction::Right => (self.x + PANEL_STEP_X).min(MODEL_GRID_LEN_X - PANEL_LEN_X),
        }
    }
}

pub trait Assert {
    fn assert(&self);
}

impl Assert for Panel {
    fn assert(&self) {
        assert!(self.x >= 0);
        assert!(self.x <= MODEL_GRID_LEN_X - PANEL_LEN_X);
    }
}
