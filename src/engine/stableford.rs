use super::normalize::cap_score;

/// Points for one hole, from 0 (net double bogey or worse) to 5.
pub fn stableford_points(raw_score: i32, par: i32, strokes_received: i32) -> i32 {
    if raw_score == 0 {
        return 0;
    }

    let net_score = cap_score(raw_score, par, strokes_received) - strokes_received;
    match net_score - par {
        diff if diff <= -3 => 5,
        -2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

pub fn round_total(points: &[i32]) -> i32 {
    points.iter().sum()
}
