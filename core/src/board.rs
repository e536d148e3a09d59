pub const BOLT_GRID: [&[&str]; 7] = [
    &["1A", "1B", "1C"],
    &["2AB", "2BC"],
    &["3A", "3B", "3C"],
    &["4AB", "4BC"],
    &["5A", "5B", "5C"],
    &["6AB", "6BC"],
    &["7A", "7B", "7C"],
];

pub const STARTER_HOLES: [&str; 3] = ["H1", "H2", "H3"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPos {
    pub col: usize,
    pub row: usize,
}

pub fn bolt_position(bolt_id: &str) -> Option<GridPos> {
    for (row, bolts) in BOLT_GRID.iter().enumerate() {
        if let Some(col) = bolts.iter().position(|id| *id == bolt_id) {
            return Some(GridPos { col, row });
        }
    }
    None
}

pub fn bolt_ids() -> impl Iterator<Item = &'static str> {
    BOLT_GRID.iter().flat_map(|row| row.iter().copied())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plank {
    pub id: &'static str,
    pub color: &'static str,
    pub level: u32,
    pub bolts: &'static [&'static str],
}

pub const PLANKS: [Plank; 13] = [
    Plank { id: "r1", color: "red", level: 1, bolts: &["1A", "3A"] },
    Plank { id: "r2", color: "red", level: 1, bolts: &["5A", "7A"] },
    Plank { id: "r3", color: "red", level: 4, bolts: &["1A", "1B", "1C"] },
    Plank { id: "r4", color: "red", level: 1, bolts: &["1C", "3C"] },
    Plank { id: "r5", color: "red", level: 1, bolts: &["5C", "7C"] },
    Plank { id: "r6", color: "red", level: 1, bolts: &["2AB", "4AB"] },
    Plank { id: "r7", color: "red", level: 1, bolts: &["2BC", "4BC"] },
    Plank { id: "r8", color: "red", level: 4, bolts: &["4AB", "4BC"] },
    Plank { id: "r9", color: "red", level: 4, bolts: &["6AB", "6BC"] },
    Plank { id: "r10", color: "red", level: 4, bolts: &["3A", "3B", "3C"] },
    Plank { id: "r11", color: "red", level: 4, bolts: &["5A", "5B", "5C"] },
    Plank { id: "r12", color: "red", level: 1, bolts: &["1B", "3B"] },
    Plank { id: "r13", color: "red", level: 1, bolts: &["5B", "7B"] },
];

pub fn planks() -> &'static [Plank] {
    &PLANKS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlankRect {
    pub min_col: usize,
    pub min_row: usize,
    pub max_col: usize,
    pub max_row: usize,
}

impl PlankRect {
    pub fn cols(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn rows(&self) -> usize {
        self.max_row - self.min_row + 1
    }
}

// Bolts missing from the layout are skipped; a plank whose bolts are all
// unknown has no rect and is left out of position-dependent rendering.
pub fn plank_rect(plank: &Plank) -> Option<PlankRect> {
    let mut rect: Option<PlankRect> = None;
    for bolt in plank.bolts {
        let Some(pos) = bolt_position(bolt) else {
            continue;
        };
        rect = Some(match rect {
            None => PlankRect {
                min_col: pos.col,
                min_row: pos.row,
                max_col: pos.col,
                max_row: pos.row,
            },
            Some(rect) => PlankRect {
                min_col: rect.min_col.min(pos.col),
                min_row: rect.min_row.min(pos.row),
                max_col: rect.max_col.max(pos.col),
                max_row: rect.max_row.max(pos.row),
            },
        });
    }
    rect
}

// Stable by level, so planks sharing a level keep their definition order.
pub fn draw_order(planks: &[Plank]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..planks.len()).collect();
    order.sort_by_key(|&idx| planks[idx].level);
    order
}
