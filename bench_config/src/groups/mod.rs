pub mod benchmark;
pub mod classifier;
pub mod log;
pub mod result_log;
