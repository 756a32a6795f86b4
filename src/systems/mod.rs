pub mod batch;
pub mod game;
