pub mod data;
pub mod fractals;
pub mod palette;
pub mod schedule;
pub mod util;
