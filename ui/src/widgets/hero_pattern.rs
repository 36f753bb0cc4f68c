//! Decorative QR-like pattern shown in the hero section.
//!
//! It is not a scannable code: three finder blocks, a random data area and
//! dotted timing lines on a 30x30 module grid. Generated once per session.

use egui::{Color32, Rect, Response, Sense, Ui, vec2};
use rand::Rng;

/// Modules per side.
pub const PATTERN_MODULES: usize = 30;

/// Side of one module in points.
pub const MODULE_SIZE: f32 = 10.0;

const FINDER: usize = 7;
// Data and timing cells occupy [DATA_START, DATA_END).
const DATA_START: usize = 8;
const DATA_END: usize = 22;
const TIMING_LINE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Light,
    Finder,
    Timing,
    Data,
}

impl Cell {
    pub fn is_dark(self) -> bool {
        self != Self::Light
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPattern {
    cells: Vec<Cell>,
}

impl HeroPattern {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut cells = vec![Cell::Light; PATTERN_MODULES * PATTERN_MODULES];
        let mut set = |x: usize, y: usize, cell: Cell| cells[y * PATTERN_MODULES + x] = cell;

        let far = PATTERN_MODULES - FINDER;
        for (ox, oy) in [(0, 0), (far, 0), (0, far)] {
            for dy in 0..FINDER {
                for dx in 0..FINDER {
                    let ring = dx == 0 || dy == 0 || dx == FINDER - 1 || dy == FINDER - 1;
                    let core = (2..=4).contains(&dx) && (2..=4).contains(&dy);
                    if ring || core {
                        set(ox + dx, oy + dy, Cell::Finder);
                    }
                }
            }
        }

        for y in DATA_START..DATA_END {
            for x in DATA_START..DATA_END {
                if rng.gen_bool(0.5) {
                    set(x, y, Cell::Data);
                }
            }
        }

        for i in (DATA_START..DATA_END).step_by(2) {
            set(i, TIMING_LINE, Cell::Timing);
            set(TIMING_LINE, i, Cell::Timing);
        }

        Self { cells }
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * PATTERN_MODULES + x]
    }

    pub fn paint(&self, painter: &egui::Painter, rect: Rect, dark: Color32, light: Color32) {
        painter.rect_filled(rect, 0.0, light);

        let module = rect.width() / PATTERN_MODULES as f32;
        for y in 0..PATTERN_MODULES {
            for x in 0..PATTERN_MODULES {
                let cell = self.cell(x, y);
                if !cell.is_dark() {
                    continue;
                }
                let min = rect.min + vec2(x as f32 * module, y as f32 * module);
                // Finder blocks are solid, the rest leave a one-pixel gap.
                let side = match cell {
                    Cell::Finder => module,
                    _ => (module - module / MODULE_SIZE).max(1.0),
                };
                painter.rect_filled(Rect::from_min_size(min, vec2(side, side)), 0.0, dark);
            }
        }
    }
}

/// Paints `pattern` at its natural size, shrunk to fit narrow layouts.
pub fn hero_pattern(ui: &mut Ui, pattern: &HeroPattern) -> Response {
    let natural = PATTERN_MODULES as f32 * MODULE_SIZE;
    let side = natural.min(ui.available_width());
    let (rect, response) = ui.allocate_exact_size(vec2(side, side), Sense::hover());
    if ui.is_rect_visible(rect) {
        pattern.paint(ui.painter(), rect, Color32::BLACK, Color32::WHITE);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pattern(seed: u64) -> HeroPattern {
        HeroPattern::generate(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_finders_have_ring_gap_and_core() {
        let p = pattern(7);
        for (ox, oy) in [(0, 0), (23, 0), (0, 23)] {
            assert_eq!(p.cell(ox, oy), Cell::Finder);
            assert_eq!(p.cell(ox + 6, oy + 6), Cell::Finder);
            assert_eq!(p.cell(ox + 1, oy + 1), Cell::Light);
            assert_eq!(p.cell(ox + 5, oy + 3), Cell::Light);
            assert_eq!(p.cell(ox + 3, oy + 3), Cell::Finder);
        }
        // Bottom-right corner has no finder.
        assert_eq!(p.cell(26, 26), Cell::Light);
    }

    #[test]
    fn test_timing_lines_alternate() {
        let p = pattern(1);
        for i in 8..22 {
            let expected = if i % 2 == 0 { Cell::Timing } else { Cell::Light };
            assert_eq!(p.cell(i, 6), expected, "row at {i}");
            assert_eq!(p.cell(6, i), expected, "column at {i}");
        }
    }

    #[test]
    fn test_data_cells_stay_inside_data_area() {
        let p = pattern(42);
        let mut data = 0;
        for y in 0..PATTERN_MODULES {
            for x in 0..PATTERN_MODULES {
                if p.cell(x, y) == Cell::Data {
                    assert!((8..22).contains(&x) && (8..22).contains(&y));
                    data += 1;
                }
            }
        }
        // 196 coin flips; anything outside this range means the rng is not used.
        assert!((40..160).contains(&data), "{data} data cells");
    }

    #[test]
    fn test_same_seed_same_pattern() {
        assert_eq!(pattern(3), pattern(3));
        assert_ne!(pattern(3), pattern(4));
    }
}
