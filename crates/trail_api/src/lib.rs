mod api;
mod trail_api;

pub use api::*;
pub use trail_api::*;
pub use trail_domain::*;
