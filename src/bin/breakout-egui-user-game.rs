use std::time::Instant;

use anyhow::anyhow;
use eframe::glow;
use egui::{Align2, Context, FontId, Id, LayerId, Order, Painter, Vec2};

use breakout_game::breakout::app_game_drawer::{AppGameDrawer, END_TEXT_COLOR};
use breakout_game::breakout::game_loop::GameLoop;
use breakout_game::breakout::input::{pressed_keys, read_user_input, UserInput};
use breakout_game::breakout::mechanics::{MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y};
use breakout_game::util::init_logging;

const WINDOW_TITLE: &str = "Breakout Game";

pub struct BreakoutApp {
    game_loop: GameLoop,
}

impl BreakoutApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            game_loop: GameLoop::new(Instant::now()),
        }
    }

    fn read_ui_control(
        &self,
        ctx: &Context,
    ) -> UserInput {
        ctx.input(|i| read_user_input(pressed_keys(&i.events)))
    }

    fn draw_game_content(&self, painter: &Painter) {
        let paint_offset = painter.clip_rect().min;
        let canvas_size = painter.clip_rect().size();

        let drawer = AppGameDrawer::new(canvas_size, self.game_loop.mechanics());
        for mut shape in drawer.shapes() {
            shape.translate(paint_offset.to_vec2());
            painter.add(shape);
        }
        for line in drawer.texts() {
            painter.text(
                line.pos + paint_offset.to_vec2(),
                Align2::LEFT_BOTTOM,
                line.text,
                FontId::proportional(line.font_size),
                END_TEXT_COLOR,
            );
        }
    }
}

impl eframe::App for BreakoutApp {
    fn update(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
    ) {
        let player_input = self.read_ui_control(ctx);
        if player_input.exit {
            frame.close();
            return;
        }

        let now = Instant::now();
        for command in player_input.commands {
            self.game_loop.handle(command, now);
        }
        let ticks = self.game_loop.advance(now);
        if ticks > 1 {
            log::trace!("caught up {ticks} time steps");
        }

        let game_painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        self.draw_game_content(&game_painter);

        // a stopped clock means the game has ended; from then on only input triggers a repaint
        if let Some(wait) = self.game_loop.clock().time_until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    fn on_exit(
        &mut self,
        _: Option<&glow::Context>,
    ) {
        log::info!("exit");
    }
}

fn breakout_user_game() -> anyhow::Result<()> {
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(Vec2::new(MODEL_GRID_LEN_X as f32, MODEL_GRID_LEN_Y as f32)),
        resizable: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(WINDOW_TITLE, native_options, Box::new(|cc| Box::new(BreakoutApp::new(cc))))
        .map_err(|e| anyhow!("game window failed: {e}"))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    log::info!("starting {WINDOW_TITLE}");
    breakout_user_game()
}
