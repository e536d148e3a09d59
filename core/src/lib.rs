pub mod board;
pub mod game;

pub use board::{
    bolt_ids, bolt_position, draw_order, plank_rect, planks, GridPos, Plank, PlankRect,
    BOLT_GRID, PLANKS, STARTER_HOLES,
};
pub use game::{Game, GameSnapshot};
