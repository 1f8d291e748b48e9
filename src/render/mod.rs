pub mod grid;
pub mod trace;
