use super::match_play::{
    hole_at, net_score, standing, HoleResult, Leader, MatchStatus, Side, TeamLineup,
};
use crate::error::{Result, ScorecardError};
use crate::types::course::{Hole, HOLES_PER_ROUND};
use crate::types::player::{Player, Team};
use tracing::trace;

const TEAM_SIZE: usize = 2;

struct Teams<'a> {
    a: Vec<&'a Player>,
    b: Vec<&'a Player>,
}

impl Teams<'_> {
    fn lineup(&self) -> TeamLineup {
        TeamLineup {
            team_a: self.a.iter().map(|player| player.name.clone()).collect(),
            team_b: self.b.iter().map(|player| player.name.clone()).collect(),
        }
    }
}

fn split_teams(players: &[Player]) -> Option<Teams<'_>> {
    if players.len() != 2 * TEAM_SIZE {
        return None;
    }
    let members = |team: Team| {
        players
            .iter()
            .filter(|player| player.team == Some(team))
            .collect::<Vec<_>>()
    };
    let teams = Teams {
        a: members(Team::A),
        b: members(Team::B),
    };
    (teams.a.len() == TEAM_SIZE && teams.b.len() == TEAM_SIZE).then_some(teams)
}

/// Best (lowest) net score among the team members who scored the hole.
fn best_ball<'a>(
    team: &[&'a Player],
    hole_index: usize,
    hole: &Hole,
) -> Option<(&'a Player, i32)> {
    team.iter()
        .filter_map(|player| net_score(player, hole_index, hole).map(|net| (*player, net)))
        .min_by_key(|(_, net)| *net)
}

pub fn team_hole_winner(
    players: &[Player],
    hole_index: usize,
    holes: &[Hole],
) -> Result<HoleResult> {
    let teams = split_teams(players).ok_or_else(|| {
        ScorecardError::InvalidShape(format!(
            "team match play needs 4 players split 2/2 into teams A and B, got {} players",
            players.len()
        ))
    })?;
    let hole = hole_at(holes, hole_index)?;
    Ok(compare_teams(&teams, hole_index, hole))
}

fn compare_teams(teams: &Teams<'_>, hole_index: usize, hole: &Hole) -> HoleResult {
    let team_a = best_ball(&teams.a, hole_index, hole);
    let team_b = best_ball(&teams.b, hole_index, hole);

    let won = |player: &Player, margin: i32, team: Team| HoleResult {
        winner_ids: vec![player.id.clone()],
        is_halved: false,
        margin,
        team_winner: Some(team),
    };

    match (team_a, team_b) {
        (None, None) => HoleResult::halved(),
        (Some((player, _)), None) => won(player, 1, Team::A),
        (None, Some((player, _))) => won(player, 1, Team::B),
        (Some((a_player, a_net)), Some((b_player, b_net))) => {
            if a_net < b_net {
                won(a_player, b_net - a_net, Team::A)
            } else if b_net < a_net {
                won(b_player, a_net - b_net, Team::B)
            } else {
                HoleResult {
                    winner_ids: vec![a_player.id.clone(), b_player.id.clone()],
                    ..HoleResult::halved()
                }
            }
        }
    }
}

pub fn team_match_status(players: &[Player], holes: &[Hole], holes_played: usize) -> MatchStatus {
    let order: Vec<usize> = (0..holes_played.min(HOLES_PER_ROUND)).collect();
    team_match_status_over(players, holes, &order)
}

pub fn team_match_status_over(players: &[Player], holes: &[Hole], order: &[usize]) -> MatchStatus {
    if players.len() != 2 * TEAM_SIZE {
        return MatchStatus::not_applicable("Not Team Play", "Individual Play", order.len());
    }
    let Some(teams) = split_teams(players) else {
        return MatchStatus::not_applicable("Invalid Teams", "Check Team Setup", order.len());
    };

    let mut a_wins = 0;
    let mut b_wins = 0;
    for &hole_index in order.iter().take(HOLES_PER_ROUND) {
        let Some(hole) = holes.get(hole_index) else {
            continue;
        };
        let result = compare_teams(&teams, hole_index, hole);
        trace!(hole = hole_index + 1, ?result, "team match hole");
        match result.team_winner {
            Some(Team::A) if !result.is_halved => a_wins += 1,
            Some(Team::B) if !result.is_halved => b_wins += 1,
            _ => {}
        }
    }

    let lineup = teams.lineup();
    let standing = standing(a_wins, b_wins, order.len());
    let leading_team = standing.leader.map(|side| match side {
        Side::First => Team::A,
        Side::Second => Team::B,
    });
    let leader_label = match leading_team {
        Some(Team::A) => format!("Team A ({})", lineup.team_a.join(", ")),
        Some(Team::B) => format!("Team B ({})", lineup.team_b.join(", ")),
        None => "All Square".to_string(),
    };

    MatchStatus {
        applicable: true,
        leader: leading_team.map(Leader::Team),
        leader_label,
        margin: standing.margin,
        is_all_square: standing.is_all_square,
        status: standing.status,
        can_end: standing.can_end,
        holes_remaining: standing.holes_remaining,
        teams: Some(lineup),
    }
}
