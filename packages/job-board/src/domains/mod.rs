pub mod board;
pub mod jobs;
