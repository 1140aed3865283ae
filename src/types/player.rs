use crate::engine::stableford;
use crate::types::course::HOLES_PER_ROUND;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

/// Scoring state for one player. Updates go through the `with_*` methods,
/// which return a new record with every dependent total recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub handicap_index: f64,
    pub course_handicap: i32,
    pub team: Option<Team>,
    /// Capped strokes per hole; 0 means not yet played.
    pub scores: [i32; HOLES_PER_ROUND],
    pub points: [i32; HOLES_PER_ROUND],
    pub total_points: i32,
    pub six_points: [i32; HOLES_PER_ROUND],
    pub total_six_points: i32,
}

impl Player {
    pub fn new(id: impl Into<String>, handicap_index: f64, course_handicap: i32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            handicap_index,
            course_handicap,
            team: None,
            scores: [0; HOLES_PER_ROUND],
            points: [0; HOLES_PER_ROUND],
            total_points: 0,
            six_points: [0; HOLES_PER_ROUND],
            total_six_points: 0,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn on_team(mut self, team: Option<Team>) -> Self {
        self.team = team;
        self
    }

    /// Patch one hole's capped score and points, recomputing the total.
    pub fn with_hole_score(&self, hole_index: usize, capped: i32, points: i32) -> Self {
        let mut scores = self.scores;
        let mut hole_points = self.points;
        scores[hole_index] = capped;
        hole_points[hole_index] = points;
        Self {
            scores,
            points: hole_points,
            total_points: stableford::round_total(&hole_points),
            ..self.clone()
        }
    }

    pub fn with_six_points(&self, hole_index: usize, points: i32, total: i32) -> Self {
        let mut six_points = self.six_points;
        six_points[hole_index] = points;
        Self {
            six_points,
            total_six_points: total,
            ..self.clone()
        }
    }

    pub fn without_six_points(&self) -> Self {
        Self {
            six_points: [0; HOLES_PER_ROUND],
            total_six_points: 0,
            ..self.clone()
        }
    }

    pub fn score(&self, hole_index: usize) -> Option<i32> {
        self.scores
            .get(hole_index)
            .copied()
            .filter(|score| *score > 0)
    }

    pub fn gross_total(&self) -> i32 {
        self.scores.iter().sum()
    }

    pub fn holes_scored(&self) -> usize {
        self.scores.iter().filter(|score| **score > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_hole_score_recomputes_total_without_touching_original() {
        let player = Player::new("ann", 10.2, 11);
        let updated = player.with_hole_score(0, 5, 2).with_hole_score(4, 4, 3);

        assert_eq!(player.total_points, 0);
        assert_eq!(updated.total_points, 5);
        assert_eq!(updated.scores[4], 4);
        assert_eq!(updated.total_points, updated.points.iter().sum::<i32>());
    }

    #[test]
    fn rescoring_a_hole_replaces_its_points() {
        let player = Player::new("ann", 10.2, 11)
            .with_hole_score(2, 4, 3)
            .with_hole_score(2, 7, 0);
        assert_eq!(player.total_points, 0);
        assert_eq!(player.score(2), Some(7));
    }

    #[test]
    fn score_treats_zero_as_unplayed() {
        let player = Player::new("ann", 10.2, 11);
        assert_eq!(player.score(0), None);
        assert_eq!(player.score(40), None);
        assert_eq!(player.holes_scored(), 0);
    }
}
