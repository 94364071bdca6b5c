use std::time::Duration;

use egui::{Color32, Key, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2, pos2, vec2};
use tokio::sync::mpsc;

use common::games::lightcycle::{
    Direction, DuelGameState, LightCycle, Outcome, Phase, PlayerSlot, Point,
};

use crate::state::{ClientCommand, SharedState};

const BACKGROUND_COLOR: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
const GRID_LINE_COLOR: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
const PLAYER_ONE_COLOR: Color32 = Color32::from_rgb(0x00, 0xFF, 0xFF);
const PLAYER_ONE_TRAIL_COLOR: Color32 = Color32::from_rgb(0x00, 0xAA, 0xAA);
const PLAYER_TWO_COLOR: Color32 = Color32::from_rgb(0xFF, 0xFF, 0x00);
const PLAYER_TWO_TRAIL_COLOR: Color32 = Color32::from_rgb(0xAA, 0xAA, 0x00);

const MIN_CELL_SIZE: f32 = 4.0;

pub struct DuelApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    show_grid_lines: bool,
}

impl DuelApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        show_grid_lines: bool,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            show_grid_lines,
        }
    }

    fn send(&self, command: ClientCommand) {
        let _ = self.command_tx.send(command);
    }

    /// Arrows steer player one, WASD steers player two. Enter starts a
    /// waiting duel and R restarts from any phase.
    fn handle_input(&self, ctx: &egui::Context, phase: Phase) {
        ctx.input(|input| {
            if input.key_pressed(Key::Enter) && phase == Phase::Waiting {
                self.send(ClientCommand::Start);
            }
            if input.key_pressed(Key::R) {
                self.send(ClientCommand::Restart);
            }

            if phase != Phase::Running {
                return;
            }
            for (key, slot, direction) in [
                (Key::ArrowUp, PlayerSlot::One, Direction::Up),
                (Key::ArrowDown, PlayerSlot::One, Direction::Down),
                (Key::ArrowLeft, PlayerSlot::One, Direction::Left),
                (Key::ArrowRight, PlayerSlot::One, Direction::Right),
                (Key::W, PlayerSlot::Two, Direction::Up),
                (Key::S, PlayerSlot::Two, Direction::Down),
                (Key::A, PlayerSlot::Two, Direction::Left),
                (Key::D, PlayerSlot::Two, Direction::Right),
            ] {
                if input.key_pressed(key) {
                    self.send(ClientCommand::Turn { slot, direction });
                }
            }
        });
    }

    fn status_line(state: &DuelGameState) -> &'static str {
        match state.phase {
            Phase::Waiting => "Press Enter to Start",
            Phase::Running => "Game Running!",
            Phase::GameOver => match state.outcome {
                Some(Outcome::PlayerOneWins) => "Player 1 Wins! Press R to Restart",
                Some(Outcome::PlayerTwoWins) => "Player 2 Wins! Press R to Restart",
                _ => "Draw! Press R to Restart",
            },
        }
    }

    fn render_field(&self, ui: &mut egui::Ui, state: &DuelGameState) {
        let columns = state.field_size.width as f32;
        let rows = state.field_size.height as f32;
        let available = ui.available_size();
        let cell_size = (available.x / columns)
            .min(available.y / rows)
            .floor()
            .max(MIN_CELL_SIZE);

        let canvas_size = vec2(columns * cell_size, rows * cell_size);
        let (response, painter) = ui.allocate_painter(canvas_size, Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, BACKGROUND_COLOR);

        if self.show_grid_lines && cell_size > 2.0 {
            let stroke = Stroke::new(1.0, GRID_LINE_COLOR);
            for column in 0..=state.field_size.width {
                let x = origin.x + column as f32 * cell_size;
                painter.line_segment(
                    [pos2(x, origin.y), pos2(x, origin.y + canvas_size.y)],
                    stroke,
                );
            }
            for row in 0..=state.field_size.height {
                let y = origin.y + row as f32 * cell_size;
                painter.line_segment(
                    [pos2(origin.x, y), pos2(origin.x + canvas_size.x, y)],
                    stroke,
                );
            }
        }

        self.render_cycle(
            &painter,
            state.cycle(PlayerSlot::One),
            PLAYER_ONE_TRAIL_COLOR,
            PLAYER_ONE_COLOR,
            origin,
            cell_size,
        );
        self.render_cycle(
            &painter,
            state.cycle(PlayerSlot::Two),
            PLAYER_TWO_TRAIL_COLOR,
            PLAYER_TWO_COLOR,
            origin,
            cell_size,
        );
    }

    fn render_cycle(
        &self,
        painter: &egui::Painter,
        cycle: &LightCycle,
        trail_color: Color32,
        head_color: Color32,
        origin: Pos2,
        cell_size: f32,
    ) {
        let cell_rect = |point: &Point| {
            Rect::from_min_size(
                pos2(
                    origin.x + point.x as f32 * cell_size,
                    origin.y + point.y as f32 * cell_size,
                ),
                Vec2::splat(cell_size),
            )
        };

        let (head, body) = cycle
            .trail
            .split_last()
            .expect("Cycle trail should never be empty");
        for segment in body {
            painter.rect_filled(cell_rect(segment), 0.0, trail_color);
        }

        painter.rect_filled(cell_rect(head), 0.0, head_color);
        if cycle.is_alive() && cell_size > 5.0 {
            painter.rect_stroke(
                cell_rect(head).shrink(1.0),
                0.0,
                Stroke::new(1.0, Color32::WHITE),
                StrokeKind::Inside,
            );
        }
    }
}

impl eframe::App for DuelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let game_state = self.shared_state.get_game_state();

        if let Some(state) = &game_state {
            self.handle_input(ctx, state.phase);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(state) = &game_state else {
                ui.label("Starting duel...");
                return;
            };
            ui.label(Self::status_line(state));
            ui.separator();
            self.render_field(ui, state);
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
