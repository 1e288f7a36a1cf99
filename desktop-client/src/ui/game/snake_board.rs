use common::games::snake::{BoardSnapshot, CellRole, FieldSize, Point};
use eframe::egui;

const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0xFF, 0x00);
const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0x80, 0x00);
const APPLE_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x00, 0x00);
const STEM_COLOR: egui::Color32 = egui::Color32::from_rgb(0xA5, 0x2A, 0x2A);

/// Proportions of the apple sprite, measured on a 20-point tile.
const APPLE_BASE_TILE: f32 = 20.0;

pub struct SnakeBoardUi {
    tile_size: f32,
}

impl SnakeBoardUi {
    pub fn new(tile_size: f32) -> Self {
        Self { tile_size }
    }

    fn frame_width(&self) -> f32 {
        self.tile_size / 2.0
    }

    /// Size of the whole board widget, white frame included.
    pub fn board_size(&self, field_size: &FieldSize) -> egui::Vec2 {
        let frame = 2.0 * self.frame_width();
        egui::vec2(
            field_size.width as f32 * self.tile_size + frame,
            field_size.height as f32 * self.tile_size + frame,
        )
    }

    pub fn cell_rect(&self, field_origin: egui::Pos2, point: Point) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                field_origin.x + point.x as f32 * self.tile_size,
                field_origin.y + point.y as f32 * self.tile_size,
            ),
            egui::vec2(self.tile_size, self.tile_size),
        )
    }

    /// Clears and redraws the full board, returning the playing field rect.
    pub fn render(&self, ui: &mut egui::Ui, snapshot: &BoardSnapshot) -> egui::Rect {
        let (response, painter) =
            ui.allocate_painter(self.board_size(&snapshot.field_size), egui::Sense::hover());

        let rect = response.rect;
        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
        let field_rect = rect.shrink(self.frame_width());
        painter.rect_filled(field_rect, 0.0, egui::Color32::BLACK);

        for (point, role) in snapshot.cells() {
            let cell = self.cell_rect(field_rect.min, point);
            match role {
                CellRole::Food => self.draw_apple(&painter, cell),
                CellRole::Head => {
                    painter.rect_filled(cell, 0.0, HEAD_COLOR);
                }
                CellRole::Body | CellRole::Tail => {
                    painter.rect_filled(cell, 0.0, BODY_COLOR);
                }
            }
        }

        if snapshot.game_over.is_some() {
            self.draw_game_over(&painter, field_rect, snapshot.score);
        }

        field_rect
    }

    fn draw_apple(&self, painter: &egui::Painter, cell: egui::Rect) {
        let scale = self.tile_size / APPLE_BASE_TILE;

        let fruit = egui::Rect::from_min_size(
            cell.min + egui::vec2(2.0, 4.0) * scale,
            egui::vec2(APPLE_BASE_TILE - 4.0, APPLE_BASE_TILE - 6.0) * scale,
        );
        painter.rect_filled(fruit, 0.0, APPLE_COLOR);

        let stem = egui::Rect::from_min_size(
            cell.min + egui::vec2(9.0, 0.0) * scale,
            egui::vec2(2.0, 6.0) * scale,
        );
        painter.rect_filled(stem, 0.0, STEM_COLOR);
    }

    fn draw_game_over(&self, painter: &egui::Painter, field_rect: egui::Rect, score: u32) {
        let font_size = (self.tile_size * 1.2).max(16.0);
        let center = field_rect.center();

        painter.text(
            center - egui::vec2(0.0, font_size),
            egui::Align2::CENTER_CENTER,
            "GAME OVER",
            egui::FontId::proportional(font_size),
            egui::Color32::WHITE,
        );
        painter.text(
            center + egui::vec2(0.0, font_size),
            egui::Align2::CENTER_CENTER,
            format!("Score : {}", score),
            egui::FontId::proportional(font_size),
            egui::Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_includes_frame() {
        let board = SnakeBoardUi::new(20.0);
        assert_eq!(board.board_size(&FieldSize::new(19, 19)), egui::vec2(400.0, 400.0));
    }

    #[test]
    fn test_cell_rect_is_offset_by_grid_position() {
        let board = SnakeBoardUi::new(20.0);
        let rect = board.cell_rect(egui::pos2(10.0, 10.0), Point::new(9, 7));
        assert_eq!(rect.min, egui::pos2(190.0, 150.0));
        assert_eq!(rect.size(), egui::vec2(20.0, 20.0));
    }
}
