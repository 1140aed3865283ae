pub mod handicap;
pub mod match_play;
pub mod normalize;
pub mod round;
pub mod six_points;
pub mod stableford;
pub mod team_match;
