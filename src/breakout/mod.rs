pub mod algebra_2d;
pub mod app_game_drawer;
pub mod brick_field;
pub mod clock;
pub mod game_loop;
pub mod input;
pub mod mechanics;
