pub mod config;
pub mod course;
pub mod player;
pub mod report;
