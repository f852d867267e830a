//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardScene, BoardView};
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;
use crate::board::{Move, Side};
use crate::protocol::format_score;

/// Depth range offered by the depth selector
const MAX_UI_DEPTH: i32 = 8;

/// Main Othello application
pub struct OthelloApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

fn side_label(side: Side) -> (&'static str, &'static str) {
    match side {
        Side::Black => ("●", "BLACK"),
        Side::White => ("○", "WHITE"),
    }
}

fn move_label(mv: Move) -> String {
    match mv {
        Move::Place(pos) => format!("{}{}", (b'A' + pos.col) as char, pos.row + 1),
        Move::Pass => "pass".to_string(),
    }
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start over in a new mode, keeping the chosen depth
    fn new_game(&mut self, mode: GameMode) {
        let depth = self.state.ai_depth();
        self.state = GameState::new(mode);
        self.state.set_ai_depth(depth);
        self.state.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.new_game(GameMode::PvE { human_side: Side::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.new_game(GameMode::PvE { human_side: Side::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP { show_suggestions: true });
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_side } => format!("PvE - You: {}", human_side.name()),
                        GameMode::PvP { .. } => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let size = self.state.board.size();
            ui.label(RichText::new(format!("{size}x{size} board")).size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = self.state.current_turn;
            let (symbol, name) = side_label(side);
            let (accent, symbol_color) = match side {
                Side::Black => (egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                Side::White => (egui::Color32::from_rgb(220, 220, 225), BLACK_DISC),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    symbol,
                    egui::FontId::proportional(28.0),
                    symbol_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        let secs = self.state.ai_thinking_elapsed().map_or(0.0, |d| d.as_secs_f32());
                        let color = if secs < 1.0 {
                            TIMER_NORMAL
                        } else if secs < 5.0 {
                            TIMER_WARNING
                        } else {
                            TIMER_CRITICAL
                        };
                        (format!("AI thinking... {secs:.1}s"), color)
                    } else if self.state.game_over.is_some() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        let elapsed = self.state.move_timer.elapsed().as_secs_f32();
                        (format!("Your turn ({elapsed:.0}s)"), TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Disc counts and the evaluation bar
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DISCS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let discs = self.state.disc_count();
            for (side, count) in [(Side::Black, discs.black), (Side::White, discs.white)] {
                let (symbol, name) = side_label(side);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(symbol).size(18.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(name).size(12.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(16.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }

            ui.add_space(6.0);
            let share = self.state.evaluation();
            ui.add(egui::ProgressBar::new(share).text(format!("Black share {}", format_score(share))));
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let undo = egui::Label::new(RichText::new("↩ Undo").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(undo.sense(egui::Sense::click())).clicked() {
                        self.state.undo();
                    }
                });

                ui.add_space(4.0);

                if let GameMode::PvP { show_suggestions: true } = self.state.mode {
                    btn_frame.show(ui, |ui| {
                        let hint = egui::Label::new(RichText::new("Hint").size(12.0).color(TEXT_PRIMARY));
                        if ui.add(hint.sense(egui::Sense::click())).clicked() {
                            self.state.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            let mut depth = self.state.ai_depth();
            if ui
                .add(egui::Slider::new(&mut depth, 1..=MAX_UI_DEPTH).text("AI depth"))
                .changed()
            {
                self.state.set_ai_depth(depth);
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("→ {}", move_label(result.best_move)))
                                    .size(12.0)
                                    .strong()
                                    .color(WIN_HIGHLIGHT),
                            );
                            ui.label(
                                RichText::new(format!("Score: {}", format_score(result.score)))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                                ui.label(
                                    RichText::new(format!("{} cut-offs", result.stats.pruned))
                                        .size(10.0)
                                        .color(TEXT_MUTED),
                                );
                            });
                        });
                    });
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let headline = match result.winner {
            Some(side) => {
                let (symbol, name) = side_label(side);
                format!("{symbol} {name} WINS!")
            }
            None => "DRAW".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} - {}", result.discs.black, result.discs.white))
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let button = egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                            );
                            if ui.add(button.sense(egui::Sense::click())).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let legal = self.state.legal_positions();
            let scene = BoardScene {
                board: &self.state.board,
                current_turn: self.state.current_turn,
                legal: &legal,
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move.and_then(Move::pos),
                interactive: self.state.game_over.is_none()
                    && self.state.is_human_turn()
                    && !self.state.is_ai_thinking(),
            };

            if let Some(pos) = self.board_view.show(ui, &scene) {
                if let Err(msg) = self.state.try_place_disc(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint (PvP mode)
            if i.key_pressed(egui::Key::H) {
                if let GameMode::PvP { show_suggestions: true } = self.state.mode {
                    self.state.request_suggestion();
                }
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the timers ticking
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_move_label() {
        assert_eq!(move_label(Move::Place(Pos::new(2, 3))), "D3");
        assert_eq!(move_label(Move::Pass), "pass");
    }
}
