mod command;
mod env;
mod error;
mod tool_name;
mod tools;

pub use command::*;
pub use env::*;
pub use error::*;
pub use tool_name::*;
pub use tools::*;
