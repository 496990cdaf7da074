mod chmod;

pub use chmod::*;
