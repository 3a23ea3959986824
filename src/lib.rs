pub mod color;
pub mod config;
pub mod logic;
pub mod mutator;
pub mod rendering;
pub mod state;
pub mod utils;

pub use color::Rgba;
pub use mutator::ColorMutator;
pub use rendering::{render, Drawable};
pub use state::GameState;
