//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Cell;
use crate::engine::Difficulty;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(Difficulty::default()),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl TicTacToeApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for level in Difficulty::ALL {
                        if ui
                            .radio(self.state.difficulty == level, level.label())
                            .clicked()
                        {
                            self.state.difficulty = level;
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: X / Computer: O ({})", self.state.difficulty.label()));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_difficulty_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result.outcome.message());
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_MARK));
            ui.label(RichText::new("O").size(20.0).strong().color(O_MARK));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_human = self.state.current_turn == Cell::Human;
            let (symbol, name, accent) = if is_human {
                ("X", "YOU", X_MARK)
            } else {
                ("O", "COMPUTER", O_MARK)
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(symbol).size(32.0).strong().color(accent));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(16.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.game_over.is_some() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_thinking() {
                        ("Thinking...", STATUS_BUSY)
                    } else if is_human {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("Waiting", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render difficulty selector card
    fn render_difficulty_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DIFFICULTY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            for level in Difficulty::ALL {
                if ui
                    .radio(self.state.difficulty == level, level.label())
                    .clicked()
                {
                    self.state.difficulty = level;
                }
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "search depth: {} plies",
                    self.state.difficulty.depth()
                ))
                .size(10.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("New Game (N)").clicked() {
                    self.state.reset();
                }
                if ui.button("Undo (U)").clicked() {
                    self.state.undo();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card with last search diagnostics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("ENGINE DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.label(
                        RichText::new(format!("Score: {}", result.score))
                            .size(11.0)
                            .strong()
                            .color(STATUS_OK),
                    );
                    ui.label(
                        RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );

                    if let Some(pos) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("-> row {}, col {}", pos.row, pos.col))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(
                        RichText::new("No search yet")
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, message: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(message)
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(12.0);

                    if ui.button("Play again").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(30, 32, 36);

            let winning_line = self.state.game_over.as_ref().and_then(|r| r.winning_line);

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.last_move,
                winning_line,
                self.state.game_over.is_some(),
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_mark(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        // Start AI thinking if needed
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none()
        {
            self.state.start_ai_thinking();
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Request repaint while the engine is thinking
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
