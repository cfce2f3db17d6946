// Tool runner implementations
pub mod runner_trait;
pub mod process_runner;
pub mod mock_runner;

pub use runner_trait::*;
pub use process_runner::*;
pub use mock_runner::*;
