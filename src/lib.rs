pub mod engine;
pub mod runners;
pub mod cli;
pub mod utils;

pub use engine::*;
pub use runners::*;
pub use cli::*;
pub use utils::*;
