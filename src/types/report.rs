use crate::engine::match_play::MatchStatus;
use crate::engine::six_points::SixPointsStatus;
use crate::types::player::Team;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    pub handicap_index: f64,
    pub course_handicap: i32,
    pub team: Option<Team>,
    pub gross: i32,
    pub holes_scored: usize,
    pub front_nine_points: i32,
    pub back_nine_points: i32,
    pub total_points: i32,
    pub scores: Vec<i32>,
    pub points: Vec<i32>,
    pub total_six_points: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub course: String,
    pub tee: String,
    pub date: NaiveDate,
    pub start_hole: usize,
    pub holes_confirmed: usize,
    pub complete: bool,
    /// `None` while the lead is shared.
    pub stableford_leader: Option<String>,
    /// Ordered by Stableford total, best first.
    pub players: Vec<PlayerSummary>,
    pub match_play: Option<MatchStatus>,
    pub team_match: Option<MatchStatus>,
    pub six_points: Option<SixPointsStatus>,
}
