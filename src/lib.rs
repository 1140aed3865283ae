//! Scoring engine for golf rounds: handicap strokes, the net double bogey
//! cap, Stableford points, individual and best-ball match play, and the
//! three-player six points game.

pub mod config;
pub mod courses;
pub mod engine;
pub mod error;
pub mod report;
pub mod types;
