pub mod platform;
pub mod process;
pub mod sampler;
pub mod series;
