pub mod graph_state;
pub mod selection;
pub mod series;
pub mod viewport;
