use super::handicap::{course_handicap, strokes_for_hole};
use super::match_play::{self, hole_at, MatchStatus};
use super::normalize::cap_score;
use super::six_points::{self, SixPointsStatus};
use super::stableford::stableford_points;
use super::team_match;
use crate::courses;
use crate::error::{Result, ScorecardError};
use crate::types::config::{RoundFile, MAX_PLAYERS};
use crate::types::course::{Course, Hole, TeeBox, HOLES_PER_ROUND};
use crate::types::player::{Player, Team};
use crate::types::report::{PlayerSummary, RoundReport};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, info};

const FRONT_NINE: usize = 9;

#[derive(Debug, Clone)]
pub struct Entrant {
    pub id: String,
    pub name: String,
    pub handicap_index: f64,
    pub team: Option<Team>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleEntry {
    pub player_id: String,
    pub raw_score: i32,
}

impl HoleEntry {
    pub fn new(player_id: impl Into<String>, raw_score: i32) -> Self {
        Self {
            player_id: player_id.into(),
            raw_score,
        }
    }
}

/// One round in progress. Every update returns a new `Round` with all
/// dependent totals recomputed.
#[derive(Debug, Clone)]
pub struct Round {
    course: Course,
    tee: TeeBox,
    date: NaiveDate,
    start_index: usize,
    holes_confirmed: usize,
    players: Vec<Player>,
}

impl Round {
    pub fn start(
        course: Course,
        tee: TeeBox,
        date: NaiveDate,
        start_hole: u32,
        entrants: Vec<Entrant>,
    ) -> Result<Self> {
        course.validate()?;
        let start_index = (start_hole as usize)
            .checked_sub(1)
            .filter(|index| *index < HOLES_PER_ROUND)
            .ok_or_else(|| {
                ScorecardError::InvalidRound(format!("start hole {start_hole} is not 1..=18"))
            })?;
        if entrants.is_empty() || entrants.len() > MAX_PLAYERS {
            return Err(ScorecardError::InvalidShape(format!(
                "a round needs 1 to {MAX_PLAYERS} players, got {}",
                entrants.len()
            )));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = entrants.iter().find(|e| !seen.insert(e.id.as_str())) {
            return Err(ScorecardError::InvalidRound(format!(
                "duplicate player id: {}",
                duplicate.id
            )));
        }

        let players = entrants
            .into_iter()
            .map(|entrant| {
                let handicap = course_handicap(entrant.handicap_index, tee.slope_rating);
                Player::new(entrant.id, entrant.handicap_index, handicap)
                    .named(entrant.name)
                    .on_team(entrant.team)
            })
            .collect();

        info!(
            course = course.name,
            tee = tee.name,
            start_hole,
            "round started"
        );
        Ok(Self {
            course,
            tee,
            date,
            start_index,
            holes_confirmed: 0,
            players,
        })
    }

    /// Builds a round from a round file, confirming holes in play order.
    /// `through` limits how many holes are confirmed; by default every hole
    /// up to the last one anybody scored.
    pub fn from_file(file: &RoundFile, through: Option<usize>) -> Result<Self> {
        file.validate()?;
        let course = courses::find(&file.round.course)?;
        let tee = course.tee(&file.round.tee)?;
        let entrants = file
            .players
            .iter()
            .map(|entry| Entrant {
                id: entry.id.clone(),
                name: entry.display_name().to_string(),
                handicap_index: entry.handicap_index,
                team: entry.team,
            })
            .collect();
        let mut round = Self::start(course, tee, file.date()?, file.round.start_hole, entrants)?;

        let order = round.play_order();
        let last_scored = order
            .iter()
            .rposition(|&hole| file.players.iter().any(|p| p.raw_score(hole) > 0))
            .map_or(0, |position| position + 1);
        let holes = through.unwrap_or(last_scored).min(HOLES_PER_ROUND);

        for &hole_index in order.iter().take(holes) {
            let entries: Vec<HoleEntry> = file
                .players
                .iter()
                .map(|p| HoleEntry::new(p.id.clone(), p.raw_score(hole_index)))
                .collect();
            round = round.confirm_hole(&entries)?;
        }
        Ok(round)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn holes(&self) -> &'static [Hole] {
        self.course.holes
    }

    pub fn holes_confirmed(&self) -> usize {
        self.holes_confirmed
    }

    pub fn is_complete(&self) -> bool {
        self.holes_confirmed == HOLES_PER_ROUND
    }

    /// Hole indexes in the order they are played, wrapping after hole 18.
    pub fn play_order(&self) -> Vec<usize> {
        (0..HOLES_PER_ROUND)
            .map(|offset| (self.start_index + offset) % HOLES_PER_ROUND)
            .collect()
    }

    pub fn played(&self) -> Vec<usize> {
        let mut order = self.play_order();
        order.truncate(self.holes_confirmed);
        order
    }

    pub fn current_hole(&self) -> Option<usize> {
        self.play_order().get(self.holes_confirmed).copied()
    }

    pub fn confirm_hole(&self, entries: &[HoleEntry]) -> Result<Self> {
        let hole_index = self.current_hole().ok_or(ScorecardError::RoundComplete)?;
        let mut players = self.score_hole(hole_index, entries)?;
        if players.len() == six_points::PLAYERS {
            players =
                six_points::apply_hole_and_reset_six_points(&players, hole_index, self.holes())?;
        }
        debug!(
            hole = hole_index + 1,
            confirmed = self.holes_confirmed + 1,
            "hole confirmed"
        );
        Ok(Self {
            players,
            holes_confirmed: self.holes_confirmed + 1,
            ..self.clone()
        })
    }

    /// Re-enters a hole that was already confirmed. Six points are replayed
    /// from the first hole since their running totals depend on order.
    pub fn edit_hole(&self, hole_index: usize, entries: &[HoleEntry]) -> Result<Self> {
        let played = self.played();
        if !played.contains(&hole_index) {
            return Err(ScorecardError::HoleNotPlayed(hole_index + 1));
        }
        let mut players = self.score_hole(hole_index, entries)?;
        if players.len() == six_points::PLAYERS {
            players = six_points::replay_six_points(&players, self.holes(), &played)?;
        }
        debug!(hole = hole_index + 1, "hole edited");
        Ok(Self {
            players,
            ..self.clone()
        })
    }

    fn score_hole(&self, hole_index: usize, entries: &[HoleEntry]) -> Result<Vec<Player>> {
        let hole = hole_at(self.holes(), hole_index)?;
        if let Some(unknown) = entries
            .iter()
            .find(|entry| !self.players.iter().any(|p| p.id == entry.player_id))
        {
            return Err(ScorecardError::UnknownPlayer(unknown.player_id.clone()));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = entries
            .iter()
            .find(|entry| !seen.insert(entry.player_id.as_str()))
        {
            return Err(ScorecardError::InvalidShape(format!(
                "more than one score for player {} on hole {}",
                duplicate.player_id,
                hole_index + 1
            )));
        }

        Ok(self
            .players
            .iter()
            .map(|player| {
                let raw = entries
                    .iter()
                    .find(|entry| entry.player_id == player.id)
                    .map_or(0, |entry| entry.raw_score);
                if raw <= 0 {
                    return player.clone();
                }
                let strokes = strokes_for_hole(player.course_handicap, hole.stroke_index);
                let capped = cap_score(raw, hole.par, strokes);
                if capped < raw {
                    debug!(
                        player = %player.id,
                        hole = hole_index + 1,
                        raw,
                        capped,
                        "net double bogey applied"
                    );
                }
                player.with_hole_score(
                    hole_index,
                    capped,
                    stableford_points(capped, hole.par, strokes),
                )
            })
            .collect())
    }

    pub fn match_status(&self) -> MatchStatus {
        match_play::match_status_over(&self.players, self.holes(), &self.played())
    }

    pub fn team_match_status(&self) -> MatchStatus {
        team_match::team_match_status_over(&self.players, self.holes(), &self.played())
    }

    pub fn six_points_status(&self) -> SixPointsStatus {
        six_points::six_points_status(&self.players, self.holes_confirmed)
    }

    pub fn report(&self) -> RoundReport {
        let mut players: Vec<PlayerSummary> = self
            .players
            .iter()
            .map(|player| {
                let front: i32 = player.points[..FRONT_NINE].iter().sum();
                PlayerSummary {
                    id: player.id.clone(),
                    name: player.name.clone(),
                    handicap_index: player.handicap_index,
                    course_handicap: player.course_handicap,
                    team: player.team,
                    gross: player.gross_total(),
                    holes_scored: player.holes_scored(),
                    front_nine_points: front,
                    back_nine_points: player.total_points - front,
                    total_points: player.total_points,
                    scores: player.scores.to_vec(),
                    points: player.points.to_vec(),
                    total_six_points: player.total_six_points,
                }
            })
            .collect();
        players.sort_by(|a, b| b.total_points.cmp(&a.total_points));

        let stableford_leader = match players.as_slice() {
            [first, second, ..] if first.total_points == second.total_points => None,
            [first, ..] => Some(first.name.clone()),
            [] => None,
        };

        RoundReport {
            course: self.course.name.to_string(),
            tee: self.tee.name.to_string(),
            date: self.date,
            start_hole: self.start_index + 1,
            holes_confirmed: self.holes_confirmed,
            complete: self.is_complete(),
            stableford_leader,
            players,
            match_play: (self.players.len() == 2).then(|| self.match_status()),
            team_match: (self.players.len() == 4).then(|| self.team_match_status()),
            six_points: (self.players.len() == six_points::PLAYERS)
                .then(|| self.six_points_status()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::LIPHOOK;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
    }

    fn entrant(id: &str, handicap_index: f64, team: Option<Team>) -> Entrant {
        Entrant {
            id: id.to_string(),
            name: id.to_uppercase(),
            handicap_index,
            team,
        }
    }

    fn start(entrants: Vec<Entrant>, start_hole: u32) -> Round {
        let tee = LIPHOOK.tee("White").expect("white tee");
        Round::start(LIPHOOK, tee, date(), start_hole, entrants).expect("round should start")
    }

    fn entries(scores: &[(&str, i32)]) -> Vec<HoleEntry> {
        scores
            .iter()
            .map(|(id, score)| HoleEntry::new(*id, *score))
            .collect()
    }

    #[test]
    fn start_derives_course_handicaps_from_slope() {
        let round = start(vec![entrant("ann", 12.4, None)], 1);
        // 12.4 * 129 / 113 = 14.16
        assert_eq!(round.players()[0].course_handicap, 14);
        assert_eq!(round.current_hole(), Some(0));
    }

    #[test]
    fn start_rejects_bad_shapes() {
        let tee = LIPHOOK.tee("White").expect("white tee");
        assert!(Round::start(LIPHOOK, tee, date(), 1, Vec::new()).is_err());
        let five = (0..5).map(|n| entrant(&format!("p{n}"), 1.0, None)).collect();
        assert!(Round::start(LIPHOOK, tee, date(), 1, five).is_err());
        let twins = vec![entrant("ann", 1.0, None), entrant("ann", 2.0, None)];
        assert!(Round::start(LIPHOOK, tee, date(), 1, twins).is_err());
        assert!(Round::start(LIPHOOK, tee, date(), 0, vec![entrant("ann", 1.0, None)]).is_err());
    }

    #[test]
    fn confirm_hole_caps_and_scores_each_player() {
        let round = start(vec![entrant("ann", 12.4, None), entrant("ben", 0.0, None)], 1);
        // hole 1 is par 3, stroke index 7: ann (14) gets a stroke, ben none
        let round = round
            .confirm_hole(&entries(&[("ann", 9), ("ben", 3)]))
            .expect("hole 1 should confirm");

        let ann = &round.players()[0];
        assert_eq!(ann.scores[0], 6);
        assert_eq!(ann.points[0], 0);
        let ben = &round.players()[1];
        assert_eq!(ben.scores[0], 3);
        assert_eq!(ben.total_points, 2);
        assert_eq!(round.holes_confirmed(), 1);
    }

    #[test]
    fn missing_entries_leave_the_hole_unplayed() {
        let round = start(vec![entrant("ann", 10.0, None), entrant("ben", 5.0, None)], 1)
            .confirm_hole(&entries(&[("ann", 4)]))
            .expect("partial hole should confirm");
        assert_eq!(round.players()[1].score(0), None);
        assert!(round.match_status().is_all_square);
    }

    #[test]
    fn confirm_hole_rejects_unknown_players_and_overflow() {
        let round = start(vec![entrant("ann", 10.0, None)], 1);
        let result = round.confirm_hole(&entries(&[("zed", 4)]));
        assert!(matches!(result, Err(ScorecardError::UnknownPlayer(_))));

        let mut round = round;
        for _ in 0..HOLES_PER_ROUND {
            round = round
                .confirm_hole(&entries(&[("ann", 4)]))
                .expect("hole should confirm");
        }
        assert!(round.is_complete());
        assert!(matches!(
            round.confirm_hole(&entries(&[("ann", 4)])),
            Err(ScorecardError::RoundComplete)
        ));
    }

    #[test]
    fn confirm_and_edit_reject_two_scores_for_one_player() {
        let round = start(vec![entrant("ann", 10.0, None), entrant("ben", 5.0, None)], 1);
        let twice = entries(&[("ann", 9), ("ann", 3), ("ben", 4)]);
        assert!(matches!(
            round.confirm_hole(&twice),
            Err(ScorecardError::InvalidShape(_))
        ));

        let round = round
            .confirm_hole(&entries(&[("ann", 4), ("ben", 4)]))
            .expect("hole 1");
        assert!(matches!(
            round.edit_hole(0, &twice),
            Err(ScorecardError::InvalidShape(_))
        ));
        assert_eq!(round.players()[0].scores[0], 4);
    }

    #[test]
    fn shotgun_start_wraps_play_order() {
        let round = start(vec![entrant("ann", 10.0, None)], 10);
        let order = round.play_order();
        assert_eq!(order[0], 9);
        assert_eq!(order[8], 17);
        assert_eq!(order[9], 0);

        let round = round
            .confirm_hole(&entries(&[("ann", 4)]))
            .expect("hole 10 should confirm");
        assert_eq!(round.players()[0].scores[9], 4);
        assert_eq!(round.played(), vec![9]);
        assert_eq!(round.current_hole(), Some(10));
    }

    #[test]
    fn three_player_rounds_track_six_points() {
        let round = start(
            vec![
                entrant("ann", 0.0, None),
                entrant("ben", 0.0, None),
                entrant("cat", 0.0, None),
            ],
            1,
        );
        let round = round
            .confirm_hole(&entries(&[("ann", 3), ("ben", 4), ("cat", 5)]))
            .expect("hole 1")
            .confirm_hole(&entries(&[("ann", 5), ("ben", 4), ("cat", 4)]))
            .expect("hole 2");

        let totals: Vec<i32> = round.players().iter().map(|p| p.total_six_points).collect();
        assert_eq!(totals, vec![1, 2, 0]);
        let status = round.six_points_status();
        assert_eq!(status.leader, Some("ben".to_string()));
        assert_eq!(status.holes_played, 2);
    }

    #[test]
    fn edit_hole_replays_six_points_in_order() {
        let round = start(
            vec![
                entrant("ann", 0.0, None),
                entrant("ben", 0.0, None),
                entrant("cat", 0.0, None),
            ],
            1,
        )
        .confirm_hole(&entries(&[("ann", 3), ("ben", 4), ("cat", 5)]))
        .expect("hole 1")
        .confirm_hole(&entries(&[("ann", 5), ("ben", 4), ("cat", 4)]))
        .expect("hole 2");

        let edited = round
            .edit_hole(0, &entries(&[("cat", 2)]))
            .expect("hole 1 is editable");
        // hole 1 becomes cat 4 / ann 2 / ben 0, hole 2 stays 0/3/3
        let totals: Vec<i32> = edited.players().iter().map(|p| p.total_six_points).collect();
        assert_eq!(totals, vec![0, 1, 5]);
        assert_eq!(edited.players()[2].six_points[0], 4);
        assert_eq!(edited.players()[2].points[0], 3);

        assert!(matches!(
            round.edit_hole(5, &entries(&[("ann", 4)])),
            Err(ScorecardError::HoleNotPlayed(6))
        ));
    }

    #[test]
    fn report_orders_players_by_points_and_adds_formats() {
        let round = start(vec![entrant("ann", 0.0, None), entrant("ben", 0.0, None)], 1)
            .confirm_hole(&entries(&[("ann", 4), ("ben", 3)]))
            .expect("hole 1");
        let report = round.report();
        assert_eq!(report.players[0].id, "ben");
        assert_eq!(report.stableford_leader, Some("BEN".to_string()));
        let match_play = report.match_play.expect("two players play a match");
        assert_eq!(match_play.status, "1 Up");
        assert!(report.team_match.is_none());
        assert!(report.six_points.is_none());
        assert!(!report.complete);
    }

    #[test]
    fn report_includes_team_match_for_fourballs() {
        let round = start(
            vec![
                entrant("ann", 0.0, Some(Team::A)),
                entrant("ben", 0.0, Some(Team::A)),
                entrant("cat", 0.0, Some(Team::B)),
                entrant("dan", 0.0, Some(Team::B)),
            ],
            1,
        )
        .confirm_hole(&entries(&[("ann", 5), ("ben", 3), ("cat", 4), ("dan", 4)]))
        .expect("hole 1");
        let team = round.report().team_match.expect("four players play teams");
        assert_eq!(team.leader, Some(match_play::Leader::Team(Team::A)));
    }
}
