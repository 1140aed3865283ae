use crate::engine::match_play::MatchStatus;
use crate::types::report::RoundReport;

pub fn to_markdown(report: &RoundReport) -> String {
    let mut output = String::new();
    output.push_str("# Round Report\n\n");
    output.push_str(&format!(
        "{} ({} tees), {}\n\n",
        report.course, report.tee, report.date
    ));
    output.push_str(&format!(
        "Holes confirmed: {}/18 from hole {}{}\n\n",
        report.holes_confirmed,
        report.start_hole,
        if report.complete { "" } else { " (in progress)" }
    ));

    output.push_str("## Stableford\n\n");
    output.push_str("| Player | CH | Gross | Out | In | Points |\n");
    output.push_str("|---|---|---|---|---|---|\n");
    for player in &report.players {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            player.name,
            player.course_handicap,
            player.gross,
            player.front_nine_points,
            player.back_nine_points,
            player.total_points
        ));
    }
    output.push('\n');
    match &report.stableford_leader {
        Some(name) => output.push_str(&format!("Leader: {name}\n\n")),
        None => output.push_str("Leader: tied\n\n"),
    }

    if let Some(status) = &report.match_play {
        push_match(&mut output, "Match Play", status);
    }
    if let Some(status) = &report.team_match {
        push_match(&mut output, "Team Match Play", status);
    }

    if let Some(six) = &report.six_points {
        output.push_str("## Six Points\n\n");
        for standing in &six.standings {
            output.push_str(&format!("- {}: {}\n", standing.player_name, standing.points));
        }
        output.push_str(&format!("\nLeader: {}\n", six.leader_label));
    }

    output
}

fn push_match(output: &mut String, title: &str, status: &MatchStatus) {
    output.push_str(&format!("## {title}\n\n"));
    if !status.applicable {
        output.push_str(&format!("- {}: {}\n\n", status.leader_label, status.status));
        return;
    }
    if let Some(teams) = &status.teams {
        output.push_str(&format!(
            "- Team A: {}\n- Team B: {}\n",
            teams.team_a.join(", "),
            teams.team_b.join(", ")
        ));
    }
    if status.is_all_square {
        output.push_str(&format!("- {}\n", status.status));
    } else {
        output.push_str(&format!("- {} {}\n", status.leader_label, status.status));
    }
    output.push_str(&format!("- holes remaining: {}\n\n", status.holes_remaining));
}
