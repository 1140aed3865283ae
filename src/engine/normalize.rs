/// Net double bogey cap. A raw score of 0 means unplayed and passes through.
pub fn cap_score(raw_score: i32, par: i32, strokes_received: i32) -> i32 {
    if raw_score == 0 {
        return 0;
    }
    raw_score.min(max_score(par, strokes_received))
}

pub fn max_score(par: i32, strokes_received: i32) -> i32 {
    par + strokes_received + 2
}
