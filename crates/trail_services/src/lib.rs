mod tool_services;
mod trail_services;
mod utils;

pub use trail_services::*;
pub use utils::normalize_path;
