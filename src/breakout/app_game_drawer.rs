use egui::epaint::{CircleShape, RectShape};
use egui::{Color32, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use super::algebra_2d::IPos2;
use super::brick_field::BrickField;
use super::mechanics::{Assert, Ball, BreakoutMechanics, GameResult, Panel, BALL_DIAMETER, MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y};

pub const END_TEXT_FONT_SIZE: f32 = 30.0;
pub const END_TEXT_COLOR: Color32 = Color32::RED;

/// A line of text; `pos` is the left end of its baseline
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub pos: Pos2,
    pub text: &'static str,
    pub font_size: f32,
}

pub struct AppGameDrawer<'a> {
    canvas_size: Vec2,
    game_state: &'a BreakoutMechanics,
}

impl<'a> AppGameDrawer<'a> {
    pub fn new(
        canvas_size: Vec2,
        game_state: &'a BreakoutMechanics,
    ) -> Self {
        Self { canvas_size, game_state }
    }

    /// pos / MODEL_LEN = result / canvas_size
    /// => result = pos * canvas_size / MODEL_LEN
    fn scale(
        &self,
        pos: Pos2,
    ) -> Pos2 {
        Pos2::new(
            pos.x * self.canvas_size.x / MODEL_GRID_LEN_X as f32,
            pos.y * self.canvas_size.y / MODEL_GRID_LEN_Y as f32,
        )
    }

    fn scale_x(
        &self,
        len_x: f32,
    ) -> f32 {
        len_x * self.canvas_size.x / MODEL_GRID_LEN_X as f32
    }

    fn scale_rect(
        &self,
        rect: Rect,
    ) -> Rect {
        Rect::from_min_max(self.scale(rect.min), self.scale(rect.max))
    }

    pub fn shapes(&self) -> Vec<Shape> {
        let mut result = Vec::with_capacity(2 * self.game_state.bricks.live_count() + 3);
        result.push(self.background());
        result.extend(self.bricks());
        result.push(self.panel());
        result.push(self.ball());
        result
    }

    /// end of game message; empty while the game is running
    pub fn texts(&self) -> Vec<TextLine> {
        let center_x = (MODEL_GRID_LEN_X / 2) as f32;
        let center_y = (MODEL_GRID_LEN_Y / 2) as f32;
        let font_size = self.scale_x(END_TEXT_FONT_SIZE);
        let line = |x_offset: f32, y_offset: f32, text| TextLine {
            pos: self.scale(Pos2::new(center_x + x_offset, center_y + y_offset)),
            text,
            font_size,
        };

        match self.game_state.status.game_result() {
            None => vec![],
            Some(GameResult::Won) => vec![line(-60.0, 0.0, "You Won!")],
            Some(GameResult::Lost) => vec![
                line(-80.0, 0.0, "Game Over!"),
                line(-120.0, 50.0, "Press Enter to Restart"),
            ],
        }
    }

    fn background(&self) -> Shape {
        RectShape::filled(
            Rect::from_min_size(Pos2::ZERO, self.canvas_size),
            Rounding::none(),
            Color32::BLACK,
        )
        .into()
    }

    fn bricks(&self) -> Vec<Shape> {
        self.game_state
            .bricks
            .live_bricks()
            .flat_map(|(row, column)| self.draw_brick(row, column))
            .collect()
    }

    fn draw_brick(
        &self,
        row: usize,
        column: usize,
    ) -> [Shape; 2] {
        let rect = self.scale_rect(BrickField::brick_shape(row, column).into());
        [
            RectShape::filled(rect, Rounding::none(), Color32::WHITE).into(),
            RectShape::stroke(rect, Rounding::none(), Stroke::new(1.0, Color32::BLACK)).into(),
        ]
    }

    fn panel(&self) -> Shape { self.draw_panel(&self.game_state.panel) }

    fn draw_panel(
        &self,
        panel: &Panel,
    ) -> Shape {
        panel.assert();
        RectShape::filled(self.scale_rect(panel.shape().into()), Rounding::none(), Color32::GREEN).into()
    }

    fn ball(&self) -> Shape { self.draw_ball(&self.game_state.ball) }

    fn draw_ball(
        &self,
        ball: &Ball,
    ) -> Shape {
        let radius = BALL_DIAMETER / 2;
        let center: Pos2 = IPos2::new(ball.pos.x + radius, ball.pos.y + radius).into();
        CircleShape::filled(self.scale(center), self.scale_x(radius as f32), Color32::YELLOW).into()
    }
}
