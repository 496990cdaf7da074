mod diagnostics;
mod env;
mod executor;
mod fs_meta;
mod git;
mod trail_infra;

pub use trail_infra::*;
