use breakout_game::breakout::algebra_2d::{IPos2, IVec2};
use breakout_game::breakout::mechanics::{Ball, BreakoutMechanics};

#[ctor::ctor]
fn init() {
    breakout_game::util::init_test_logging();
}

pub fn game_with_ball(x: i32, y: i32, vx: i32, vy: i32) -> BreakoutMechanics {
    let mut game = BreakoutMechanics::new();
    game.ball = Ball {
        pos: IPos2::new(x, y),
        velocity: IVec2::new(vx, vy),
    };
    game
}
