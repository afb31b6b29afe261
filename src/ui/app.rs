//! Main application for the Rabbit and Wolves GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use log::info;

use crate::{Difficulty, Side, Turn};
use super::board_view::{BoardOverlay, BoardView};
use super::game_state::GameState;
use super::theme::*;

/// Which screen is showing
enum Screen {
    Menu,
    Playing(GameState),
}

/// Main Rabbit and Wolves application
pub struct RabbitWolvesApp {
    screen: Screen,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for RabbitWolvesApp {
    fn default() -> Self {
        Self {
            screen: Screen::Menu,
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl RabbitWolvesApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn start_game(&mut self, difficulty: Difficulty) {
        info!("difficulty selected: {}", difficulty);
        self.screen = Screen::Playing(GameState::new(difficulty));
    }

    /// Render the difficulty menu
    fn render_menu(&mut self, ctx: &Context) {
        let mut chosen = None;

        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.2);
                    ui.label(RichText::new("Rabbit and Wolves").size(48.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("You play the wolves. Trap the rabbit before it reaches the top row.")
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(32.0);

                    for (i, difficulty) in Difficulty::ALL.into_iter().enumerate() {
                        let label = RichText::new(format!("{}. {}", i + 1, difficulty)).size(22.0);
                        if ui.button(label).clicked() {
                            chosen = Some(difficulty);
                        }
                        ui.add_space(10.0);
                    }
                });
            });

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Num1) {
                chosen = Some(Difficulty::Easy);
            } else if i.key_pressed(egui::Key::Num2) {
                chosen = Some(Difficulty::Medium);
            } else if i.key_pressed(egui::Key::Num3) {
                chosen = Some(Difficulty::Hard);
            }
        });

        if let Some(difficulty) = chosen {
            self.start_game(difficulty);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context, difficulty: Difficulty) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for d in Difficulty::ALL {
                        if ui.button(format!("New Game ({})", d)).clicked() {
                            self.start_game(d);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Main Menu (N)").clicked() {
                        self.screen = Screen::Menu;
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Difficulty: {} (depth {})", difficulty, difficulty.depth()));
                });
            });
        });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with turn info, debug and game over cards.
    /// Returns true if the player asked to go back to the menu.
    fn render_side_panel(ctx: &Context, state: &GameState, show_debug: bool) -> bool {
        let mut back_to_menu = false;

        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("RABBIT & WOLVES").size(20.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                Self::render_turn_card(ui, state);

                if show_debug {
                    ui.add_space(10.0);
                    Self::render_debug_card(ui, state);
                }

                if let Some(winner) = state.game.outcome() {
                    ui.add_space(10.0);
                    back_to_menu = Self::render_game_over_card(ui, winner);
                }

                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });

        back_to_menu
    }

    /// Render turn indicator card
    fn render_turn_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (name, accent, status) = match state.game.turn() {
                Turn::RabbitTurn => ("RABBIT", RABBIT, ("Thinking...", STATUS_THINKING)),
                Turn::WolfTurn if state.selected_wolf.is_some() => {
                    ("WOLVES", WOLF, ("Pick a destination", STATUS_READY))
                }
                Turn::WolfTurn => ("WOLVES", WOLF, ("Pick a wolf", STATUS_READY)),
                Turn::RabbitWon | Turn::WolvesWon => ("-", TEXT_MUTED, ("Game Over", WIN_HIGHLIGHT)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::Vec2::splat(36.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 16.0, accent);
                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", state.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card with the rabbit's last search
    fn render_debug_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match state.game.last_search() {
                Some(result) => {
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(11.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(format!("{} nodes", result.nodes)).size(11.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!(
                            "Cutoffs: {} rabbit / {} wolf",
                            result.stats.rabbit_cutoffs, result.stats.wolf_cutoffs
                        ))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                    );
                    ui.label(RichText::new(format!("{}ms", result.time_ms)).size(11.0).color(TEXT_MUTED));
                    if let Some(pos) = result.best_move {
                        ui.label(RichText::new(format!("-> {}", pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                }
                None => {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    /// Render game over card. Returns true when "New Game" is clicked.
    fn render_game_over_card(ui: &mut egui::Ui, winner: Side) -> bool {
        let mut clicked = false;
        let (text, accent) = match winner {
            Side::Rabbit => ("Rabbit wins!", RABBIT),
            Side::Wolves => ("Wolves win!", WOLF),
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(text).size(24.0).strong().color(accent));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        clicked = true;
                    }
                });
            });

        clicked
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board and forward clicks to the game state
    fn render_board(ctx: &Context, board_view: &mut BoardView, state: &mut GameState) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let targets = state.highlighted_moves();
                let overlay = BoardOverlay {
                    selected_wolf: state.selected_wolf,
                    targets: &targets,
                    last_rabbit_move: state.game.last_rabbit_move(),
                    interactive: state.is_wolf_turn(),
                    rabbit_won: state.game.turn() == Turn::RabbitWon,
                };

                if let Some(pos) = board_view.show(ui, state.game.board(), &overlay) {
                    state.handle_click(pos);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, to_menu) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if to_menu {
            self.screen = Screen::Menu;
        }
    }
}

impl eframe::App for RabbitWolvesApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if matches!(self.screen, Screen::Menu) {
            self.render_menu(ctx);
            return;
        }

        let difficulty = match &mut self.screen {
            Screen::Playing(state) => {
                // The rabbit's search is quick at these depths; play it inline.
                state.step_rabbit();
                state.game.difficulty()
            }
            Screen::Menu => return,
        };

        self.handle_input(ctx);
        self.render_menu_bar(ctx, difficulty);

        let show_debug = self.show_debug;
        let mut back_to_menu = false;
        if let Screen::Playing(state) = &mut self.screen {
            back_to_menu = Self::render_side_panel(ctx, state, show_debug);
            Self::render_board(ctx, &mut self.board_view, state);
        }

        if back_to_menu {
            self.screen = Screen::Menu;
        }
    }
}
