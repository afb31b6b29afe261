//! Board rendering for the Rabbit and Wolves GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, COLS, ROWS};

use super::theme::*;

/// What the board view needs to know beyond piece positions
pub struct BoardOverlay<'a> {
    pub selected_wolf: Option<usize>,
    pub targets: &'a [Pos],
    pub last_rabbit_move: Option<Pos>,
    pub interactive: bool,
    pub rabbit_won: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / COLS.max(ROWS) as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());

        painter.rect_filled(response.rect, CornerRadius::same(6), BOARD_FRAME);
        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::new(COLS as f32 * self.cell_size, ROWS as f32 * self.cell_size),
        );

        self.draw_squares(&painter);

        for &target in overlay.targets {
            self.draw_target(&painter, target);
        }

        if let Some(pos) = overlay.last_rabbit_move {
            self.draw_last_move_marker(&painter, pos);
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if overlay.interactive {
            if let Some(pos) = hovered.filter(|&p| board.wolf_at(p).is_some()) {
                painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, hover_wolf());
            }
        }

        self.draw_pieces(&painter, board, overlay);

        if overlay.interactive && response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the checkered 8x8 squares
    fn draw_squares(&self, painter: &Painter) {
        for row in 0..ROWS {
            for col in 0..COLS {
                let color = if (row + col) % 2 == 0 { LIGHT_SQUARE } else { DARK_SQUARE };
                let rect = self.cell_rect(Pos::new(row as u8, col as u8));
                painter.rect_filled(rect, CornerRadius::ZERO, color);
            }
        }
    }

    /// Draw wolves and the rabbit
    fn draw_pieces(&self, painter: &Painter, board: &Board, overlay: &BoardOverlay<'_>) {
        for (index, &wolf) in board.wolves().iter().enumerate() {
            self.draw_piece(painter, wolf, WOLF, WOLF_HIGHLIGHT);
            if overlay.selected_wolf == Some(index) {
                let radius = self.cell_size * PIECE_RADIUS_RATIO + SELECTED_RING_WIDTH;
                painter.circle_stroke(
                    self.board_to_screen(wolf),
                    radius,
                    Stroke::new(SELECTED_RING_WIDTH, SELECTED_RING),
                );
            }
        }

        let rabbit = board.rabbit();
        self.draw_piece(painter, rabbit, RABBIT, RABBIT_HIGHLIGHT);
        if overlay.rabbit_won {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + SELECTED_RING_WIDTH;
            painter.circle_stroke(
                self.board_to_screen(rabbit),
                radius,
                Stroke::new(SELECTED_RING_WIDTH, WIN_HIGHLIGHT),
            );
        }
    }

    /// Draw a single piece with a little shading
    fn draw_piece(&self, painter: &Painter, pos: Pos, fill: Color32, highlight: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius, Stroke::new(1.5, PIECE_OUTLINE));

        // Highlight
        let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
        painter.circle_filled(center + highlight_offset, radius * 0.2, highlight);
    }

    /// Draw a legal destination dot
    fn draw_target(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * TARGET_RADIUS_RATIO, legal_target());
    }

    /// Draw a marker on the rabbit's last destination
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        painter.circle_filled(
            rect.left_top() + Vec2::splat(LAST_MOVE_MARKER_RADIUS * 2.0),
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    /// Screen rectangle of one cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
