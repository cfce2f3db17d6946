// Command construction and dispatch
pub mod command_builder;
pub mod dispatcher;

pub use command_builder::*;
pub use dispatcher::*;
