#[macro_use]
mod misc;

pub use misc::*;
