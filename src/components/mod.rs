pub mod grid;
pub mod status_bar;
pub mod tile;
