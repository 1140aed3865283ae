use crate::courses;
use crate::error::{Result, ScorecardError};
use crate::types::course::HOLES_PER_ROUND;
use crate::types::player::Team;
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::collections::HashSet;

pub const MAX_PLAYERS: usize = 4;
pub const MAX_RAW_SCORE: i32 = 15;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Deserialize)]
pub struct RoundFile {
    pub round: RoundSection,
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoundSection {
    pub course: String,
    pub tee: String,
    pub date: Option<String>,
    #[serde(default = "default_start_hole")]
    pub start_hole: u32,
}

fn default_start_hole() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    pub id: String,
    pub name: Option<String>,
    pub handicap_index: f64,
    pub team: Option<Team>,
    /// Raw strokes by hole number order; 0 marks an unplayed hole.
    #[serde(default)]
    pub scores: Vec<i32>,
}

impl PlayerEntry {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn raw_score(&self, hole_index: usize) -> i32 {
        self.scores.get(hole_index).copied().unwrap_or(0)
    }
}

impl RoundFile {
    pub fn date(&self) -> Result<NaiveDate> {
        match &self.round.date {
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
                ScorecardError::InvalidRound(format!("date {raw:?} is not YYYY-MM-DD: {e}"))
            }),
            None => Ok(Local::now().date_naive()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let course = courses::find(&self.round.course)?;
        course.tee(&self.round.tee)?;
        self.date()?;

        if !(1..=HOLES_PER_ROUND as u32).contains(&self.round.start_hole) {
            return Err(ScorecardError::InvalidRound(format!(
                "start_hole must be between 1 and {HOLES_PER_ROUND}, got {}",
                self.round.start_hole
            )));
        }

        if self.players.is_empty() || self.players.len() > MAX_PLAYERS {
            return Err(ScorecardError::InvalidRound(format!(
                "a round needs 1 to {MAX_PLAYERS} players, got {}",
                self.players.len()
            )));
        }

        let mut ids = HashSet::new();
        for player in &self.players {
            if player.id.trim().is_empty() {
                return Err(ScorecardError::InvalidRound(
                    "player id must not be empty".to_string(),
                ));
            }
            if !ids.insert(player.id.as_str()) {
                return Err(ScorecardError::InvalidRound(format!(
                    "duplicate player id: {}",
                    player.id
                )));
            }
            if player.scores.len() > HOLES_PER_ROUND {
                return Err(ScorecardError::InvalidRound(format!(
                    "player {} has {} scores, at most {HOLES_PER_ROUND} allowed",
                    player.id,
                    player.scores.len()
                )));
            }
            if let Some((hole, score)) = player
                .scores
                .iter()
                .enumerate()
                .find(|(_, score)| !(0..=MAX_RAW_SCORE).contains(*score))
            {
                return Err(ScorecardError::InvalidRound(format!(
                    "player {} hole {}: score {} outside 0..={MAX_RAW_SCORE}",
                    player.id,
                    hole + 1,
                    score
                )));
            }
        }
        Ok(())
    }
}
