mod infra;
mod operation;
mod services;
mod tool_executor;
mod tool_registry;

pub use infra::*;
pub use operation::*;
pub use services::*;
pub use tool_executor::*;
pub use tool_registry::*;
pub mod domain {
    pub use trail_domain::*;
}
