use super::handicap::strokes_for_hole;
use super::normalize::cap_score;
use crate::error::{Result, ScorecardError};
use crate::types::course::{Hole, HOLES_PER_ROUND};
use crate::types::player::{Player, Team};
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoleResult {
    pub winner_ids: Vec<String>,
    pub is_halved: bool,
    /// Net strokes the hole was won by; 0 when halved.
    pub margin: i32,
    pub team_winner: Option<Team>,
}

impl HoleResult {
    pub fn halved() -> Self {
        Self {
            winner_ids: Vec::new(),
            is_halved: true,
            margin: 0,
            team_winner: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Leader {
    Player(String),
    Team(Team),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamLineup {
    pub team_a: Vec<String>,
    pub team_b: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchStatus {
    pub applicable: bool,
    pub leader: Option<Leader>,
    pub leader_label: String,
    pub margin: u32,
    pub is_all_square: bool,
    pub status: String,
    pub can_end: bool,
    pub holes_remaining: u32,
    pub teams: Option<TeamLineup>,
}

impl MatchStatus {
    pub fn not_applicable(label: &str, status: &str, holes_played: usize) -> Self {
        Self {
            applicable: false,
            leader: None,
            leader_label: label.to_string(),
            margin: 0,
            is_all_square: true,
            status: status.to_string(),
            can_end: false,
            holes_remaining: holes_remaining(holes_played),
            teams: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    First,
    Second,
}

/// Win tally for a two-sided match, rendered the conventional way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Standing {
    pub leader: Option<Side>,
    pub margin: u32,
    pub is_all_square: bool,
    pub status: String,
    pub can_end: bool,
    pub holes_remaining: u32,
}

pub(crate) fn standing(first_wins: u32, second_wins: u32, holes_played: usize) -> Standing {
    let margin = first_wins.abs_diff(second_wins);
    let holes_remaining = holes_remaining(holes_played);
    let is_all_square = first_wins == second_wins;
    let leader = if first_wins > second_wins {
        Some(Side::First)
    } else if second_wins > first_wins {
        Some(Side::Second)
    } else {
        None
    };
    let can_end = margin > holes_remaining && holes_remaining > 0;

    let status = if is_all_square {
        "All Square".to_string()
    } else if can_end {
        format!("{margin} & {holes_remaining}")
    } else if margin == 1 {
        "1 Up".to_string()
    } else {
        format!("{margin} Up")
    };

    Standing {
        leader,
        margin,
        is_all_square,
        status,
        can_end,
        holes_remaining,
    }
}

fn holes_remaining(holes_played: usize) -> u32 {
    (HOLES_PER_ROUND - holes_played.min(HOLES_PER_ROUND)) as u32
}

/// Capped gross minus strokes received, or `None` when unplayed.
pub fn net_score(player: &Player, hole_index: usize, hole: &Hole) -> Option<i32> {
    let gross = player.score(hole_index)?;
    let strokes = strokes_for_hole(player.course_handicap, hole.stroke_index);
    Some(cap_score(gross, hole.par, strokes) - strokes)
}

/// Scorecards hold 18 holes, so longer tables are cut off at 18.
pub(crate) fn hole_at(holes: &[Hole], hole_index: usize) -> Result<&Hole> {
    let playable = &holes[..holes.len().min(HOLES_PER_ROUND)];
    playable.get(hole_index).ok_or(ScorecardError::HoleOutOfRange {
        index: hole_index,
        len: playable.len(),
    })
}

pub fn hole_winner(players: &[Player], hole_index: usize, holes: &[Hole]) -> Result<HoleResult> {
    let [first, second] = players else {
        return Err(ScorecardError::InvalidShape(format!(
            "match play needs exactly 2 players, got {}",
            players.len()
        )));
    };
    let hole = hole_at(holes, hole_index)?;
    Ok(compare_pair(first, second, hole_index, hole))
}

fn compare_pair(first: &Player, second: &Player, hole_index: usize, hole: &Hole) -> HoleResult {
    let (Some(first_net), Some(second_net)) = (
        net_score(first, hole_index, hole),
        net_score(second, hole_index, hole),
    ) else {
        return HoleResult::halved();
    };

    let winner = if first_net < second_net {
        first
    } else if second_net < first_net {
        second
    } else {
        return HoleResult {
            winner_ids: vec![first.id.clone(), second.id.clone()],
            ..HoleResult::halved()
        };
    };

    HoleResult {
        winner_ids: vec![winner.id.clone()],
        is_halved: false,
        margin: (first_net - second_net).abs(),
        team_winner: None,
    }
}

pub fn match_status(players: &[Player], holes: &[Hole], holes_played: usize) -> MatchStatus {
    let order: Vec<usize> = (0..holes_played.min(HOLES_PER_ROUND)).collect();
    match_status_over(players, holes, &order)
}

/// Status over an explicit play order, for rounds that start away from hole 1.
pub fn match_status_over(players: &[Player], holes: &[Hole], order: &[usize]) -> MatchStatus {
    let [first, second] = players else {
        return MatchStatus::not_applicable("Multiple Players", "Stableford Only", order.len());
    };

    let mut first_wins = 0;
    let mut second_wins = 0;
    for &hole_index in order.iter().take(HOLES_PER_ROUND) {
        let Some(hole) = holes.get(hole_index) else {
            continue;
        };
        let result = compare_pair(first, second, hole_index, hole);
        trace!(hole = hole_index + 1, ?result, "match play hole");
        if result.is_halved {
            continue;
        }
        if result.winner_ids.first() == Some(&first.id) {
            first_wins += 1;
        } else {
            second_wins += 1;
        }
    }

    let standing = standing(first_wins, second_wins, order.len());
    let leader = standing.leader.map(|side| match side {
        Side::First => first,
        Side::Second => second,
    });

    MatchStatus {
        applicable: true,
        leader: leader.map(|player| Leader::Player(player.id.clone())),
        leader_label: leader
            .map(|player| player.name.clone())
            .unwrap_or_else(|| "All Square".to_string()),
        margin: standing.margin,
        is_all_square: standing.is_all_square,
        status: standing.status,
        can_end: standing.can_end,
        holes_remaining: standing.holes_remaining,
        teams: None,
    }
}
