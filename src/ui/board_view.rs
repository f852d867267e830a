//! Board rendering for the Othello GUI

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::board::{Board, Disc, Pos, Side};
use crate::rules::flipped_positions;

use super::theme::*;

/// What the board view needs to know about the current position
pub struct BoardScene<'a> {
    pub board: &'a Board,
    pub current_turn: Side,
    pub legal: &'a [Pos],
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    /// Clicks and hover previews are enabled
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Side length of the board last drawn
    size: usize,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            size: crate::STANDARD_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        self.size = scene.board.size();

        // Square area that fits the panel
        let side_px = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (side_px - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(side_px, side_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BORDER);
        painter.rect_filled(self.grid_rect(), CornerRadius::same(0), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_discs(&painter, scene.board);

        if let Some(pos) = scene.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if scene.interactive {
            for &pos in scene.legal {
                painter.circle_filled(self.board_to_screen(pos), self.cell_size * LEGAL_DOT_RATIO, legal_dot());
            }
        }

        if let Some(pos) = scene.suggested_move {
            self.draw_suggestion(&painter, pos, scene.current_turn);
        }

        let mut clicked_pos = None;

        if scene.interactive {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                if scene.legal.contains(&board_pos) {
                    self.draw_flip_preview(&painter, scene.board, board_pos, scene.current_turn);
                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                } else if scene.board.is_empty(board_pos) {
                    painter.circle_filled(
                        self.board_to_screen(board_pos),
                        self.cell_size * LEGAL_DOT_RATIO,
                        hover_invalid(),
                    );
                }
            }
        }

        clicked_pos
    }

    fn grid_rect(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * self.size as f32),
        )
    }

    /// Draw cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let grid = self.grid_rect();

        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [grid.min + Vec2::new(offset, 0.0), Pos2::new(grid.min.x + offset, grid.max.y)],
                stroke,
            );
            painter.line_segment(
                [grid.min + Vec2::new(0.0, offset), Pos2::new(grid.max.x, grid.min.y + offset)],
                stroke,
            );
        }
    }

    /// Column letters across the top, row numbers down the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(12.0);
        let grid = self.grid_rect();

        for i in 0..self.size {
            let centre = (i as f32 + 0.5) * self.cell_size;
            let letter = (b'A' + i as u8) as char;
            painter.text(
                Pos2::new(grid.min.x + centre, grid.min.y - BOARD_MARGIN * 0.5),
                Align2::CENTER_CENTER,
                letter,
                font.clone(),
                COORD_LABEL,
            );
            painter.text(
                Pos2::new(grid.min.x - BOARD_MARGIN * 0.5, grid.min.y + centre),
                Align2::CENTER_CENTER,
                format!("{}", i + 1),
                font.clone(),
                COORD_LABEL,
            );
        }
    }

    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            let disc = board.get(pos);
            if disc != Disc::Empty {
                self.draw_disc(painter, pos, disc);
            }
        }
    }

    /// Draw a single disc with shading
    fn draw_disc(&self, painter: &Painter, pos: Pos, disc: Disc) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match disc {
            Disc::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_DISC);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Disc::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_DISC);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_DISC_SHADOW));
            }
            Disc::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Ghost disc on the hovered cell and rings on the discs it would flip
    fn draw_flip_preview(&self, painter: &Painter, board: &Board, pos: Pos, side: Side) {
        let radius = self.cell_size * DISC_RADIUS_RATIO;
        painter.circle_filled(self.board_to_screen(pos), radius, ghost_color(side, 110));

        for flipped in flipped_positions(board, pos, side) {
            painter.circle_stroke(self.board_to_screen(flipped), radius + 2.0, Stroke::new(2.5, FLIP_MARKER));
        }
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        painter.circle_filled(center, radius, ghost_color(side, 100));
        painter.rect_stroke(
            Rect::from_center_size(center, Vec2::splat(self.cell_size - 4.0)),
            CornerRadius::same(3),
            Stroke::new(2.0, WIN_HIGHLIGHT),
            StrokeKind::Inside,
        );
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "?",
            FontId::proportional(16.0),
            match side {
                Side::Black => WHITE_DISC,
                Side::White => BLACK_DISC,
            },
        );
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        let size = self.size as i32;

        if col >= 0 && col < size && row >= 0 && row < size {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the centre of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let grid = self.grid_rect();
        Pos2::new(
            grid.min.x + (pos.col as f32 + 0.5) * self.cell_size,
            grid.min.y + (pos.row as f32 + 0.5) * self.cell_size,
        )
    }
}

fn ghost_color(side: Side, alpha: u8) -> Color32 {
    match side {
        Side::Black => Color32::from_rgba_unmultiplied(20, 20, 20, alpha),
        Side::White => Color32::from_rgba_unmultiplied(240, 240, 240, alpha),
    }
}
