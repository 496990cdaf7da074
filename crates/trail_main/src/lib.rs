mod cli;
mod logging;
mod run;

pub use cli::*;
pub use logging::init_tracing;
pub use run::run;
