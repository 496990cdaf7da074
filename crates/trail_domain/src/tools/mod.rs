mod call;
mod catalog;
mod chmod;
mod output;

pub use call::*;
pub use catalog::*;
pub use chmod::*;
pub use output::*;
