//! Six points: a three-player game that splits 6 points on every hole by
//! net placement, with running totals re-based so the trailing player
//! always sits on 0.

use super::match_play::{hole_at, net_score};
use crate::error::{Result, ScorecardError};
use crate::types::course::Hole;
use crate::types::player::Player;
use serde::Serialize;
use tracing::debug;

pub const PLAYERS: usize = 3;
pub const POINTS_PER_HOLE: i32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetScore {
    pub player_id: String,
    pub player_name: String,
    pub net_score: i32,
    pub gross_score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SixPointsHoleResult {
    /// Points per player, in the order the players were given.
    pub player_points: Vec<(String, i32)>,
    /// Only players who scored the hole.
    pub net_scores: Vec<NetScore>,
}

impl SixPointsHoleResult {
    pub fn points_for(&self, player_id: &str) -> i32 {
        self.player_points
            .iter()
            .find(|(id, _)| id == player_id)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub player_id: String,
    pub player_name: String,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SixPointsStatus {
    pub applicable: bool,
    /// Set only when one player holds the outright lead.
    pub leader: Option<String>,
    pub leader_label: String,
    pub leader_points: i32,
    pub standings: Vec<Standing>,
    pub is_three_way_tie: bool,
    pub is_two_way_tie: bool,
    pub holes_played: usize,
}

fn require_three<T>(items: &[T], what: &str) -> Result<()> {
    if items.len() != PLAYERS {
        return Err(ScorecardError::InvalidShape(format!(
            "{what} must have exactly {PLAYERS} entries, got {}",
            items.len()
        )));
    }
    Ok(())
}

/// Dense placements, 1 = lowest net score; equal scores share a place.
pub fn places_from_net_scores(net_scores: &[i32]) -> Result<[u8; PLAYERS]> {
    require_three(net_scores, "net scores")?;
    let mut distinct = net_scores.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let mut places = [0u8; PLAYERS];
    for (place, score) in places.iter_mut().zip(net_scores) {
        let rank = distinct.iter().position(|value| value == score).unwrap_or(0);
        *place = rank as u8 + 1;
    }
    Ok(places)
}

pub fn allocate_six_points_from_places(places: &[u8]) -> Result<[i32; PLAYERS]> {
    require_three(places, "places")?;
    let count = |place: u8| places.iter().filter(|p| **p == place).count();

    let points = match (count(1), count(2)) {
        (3, _) => [2, 2, 2],
        (2, _) => by_place(places, |place| if place == 1 { 3 } else { 0 }),
        (1, 2) => by_place(places, |place| if place == 1 { 4 } else { 1 }),
        (1, _) => by_place(places, |place| match place {
            1 => 4,
            2 => 2,
            _ => 0,
        }),
        // unreachable with dense placements
        _ => [2, 2, 2],
    };
    Ok(points)
}

fn by_place(places: &[u8], points: impl Fn(u8) -> i32) -> [i32; PLAYERS] {
    [points(places[0]), points(places[1]), points(places[2])]
}

pub fn normalize_totals(totals: &[i32]) -> Vec<i32> {
    let min = totals.iter().copied().min().unwrap_or(0);
    totals.iter().map(|total| total - min).collect()
}

pub fn six_points_for_hole(
    players: &[Player],
    hole_index: usize,
    holes: &[Hole],
) -> Result<SixPointsHoleResult> {
    require_three(players, "six points players")?;
    let hole = hole_at(holes, hole_index)?;

    let mut player_points: Vec<(String, i32)> =
        players.iter().map(|player| (player.id.clone(), 0)).collect();
    let net_scores: Vec<NetScore> = players
        .iter()
        .filter_map(|player| {
            let net = net_score(player, hole_index, hole)?;
            Some(NetScore {
                player_id: player.id.clone(),
                player_name: player.name.clone(),
                net_score: net,
                gross_score: player.scores[hole_index],
            })
        })
        .collect();

    let awarded: Vec<i32> = match net_scores.as_slice() {
        [] => Vec::new(),
        [_] => vec![POINTS_PER_HOLE],
        [first, second] => match first.net_score.cmp(&second.net_score) {
            std::cmp::Ordering::Less => vec![4, 2],
            std::cmp::Ordering::Greater => vec![2, 4],
            std::cmp::Ordering::Equal => vec![3, 3],
        },
        _ => {
            let nets: Vec<i32> = net_scores.iter().map(|score| score.net_score).collect();
            let places = places_from_net_scores(&nets)?;
            allocate_six_points_from_places(&places)?.to_vec()
        }
    };

    for (score, points) in net_scores.iter().zip(awarded) {
        if let Some(slot) = player_points.iter_mut().find(|(id, _)| *id == score.player_id) {
            slot.1 = points;
        }
    }

    Ok(SixPointsHoleResult {
        player_points,
        net_scores,
    })
}

/// Records one hole's allocation and re-bases the running totals.
/// Must be called once per hole in play order.
pub fn apply_hole_and_reset_six_points(
    players: &[Player],
    hole_index: usize,
    holes: &[Hole],
) -> Result<Vec<Player>> {
    let result = six_points_for_hole(players, hole_index, holes)?;

    let before: Vec<i32> = players
        .iter()
        .map(|player| player.total_six_points + result.points_for(&player.id))
        .collect();
    let after = normalize_totals(&before);
    let min = before.iter().copied().min().unwrap_or(0);

    debug!(
        hole = hole_index + 1,
        points = ?result.player_points,
        ?before,
        min,
        ?after,
        "six points normalized"
    );

    Ok(players
        .iter()
        .zip(after)
        .map(|(player, total)| {
            player.with_six_points(hole_index, result.points_for(&player.id), total)
        })
        .collect())
}

/// Recomputes six points from scratch over the holes in the order played.
pub fn replay_six_points(
    players: &[Player],
    holes: &[Hole],
    order: &[usize],
) -> Result<Vec<Player>> {
    require_three(players, "six points players")?;
    let reset: Vec<Player> = players.iter().map(Player::without_six_points).collect();
    order.iter().try_fold(reset, |current, &hole_index| {
        apply_hole_and_reset_six_points(&current, hole_index, holes)
    })
}

pub fn six_points_status(players: &[Player], holes_played: usize) -> SixPointsStatus {
    if players.len() != PLAYERS {
        return SixPointsStatus {
            applicable: false,
            leader: None,
            leader_label: "Not 3-Player Game".to_string(),
            leader_points: 0,
            standings: Vec::new(),
            is_three_way_tie: false,
            is_two_way_tie: false,
            holes_played,
        };
    }

    let mut standings: Vec<Standing> = players
        .iter()
        .map(|player| Standing {
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            points: player.total_six_points,
        })
        .collect();
    standings.sort_by(|a, b| b.points.cmp(&a.points));

    let top = standings[0].points;
    let is_three_way_tie = standings.iter().all(|standing| standing.points == top);
    let is_two_way_tie = !is_three_way_tie && standings[1].points == top;
    let outright = !is_three_way_tie && !is_two_way_tie;

    let leader_label = if is_three_way_tie {
        "Three-way tie".to_string()
    } else if is_two_way_tie {
        format!(
            "Tie: {} & {}",
            standings[0].player_name, standings[1].player_name
        )
    } else {
        standings[0].player_name.clone()
    };

    SixPointsStatus {
        applicable: true,
        leader: outright.then(|| standings[0].player_id.clone()),
        leader_label,
        leader_points: top,
        standings,
        is_three_way_tie,
        is_two_way_tie,
        holes_played,
    }
}
