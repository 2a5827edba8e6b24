pub mod file_ops;
pub mod move_log;
pub mod parallel;
pub mod reporting;
