const STANDARD_SLOPE: f64 = 113.0;
const HOLES: i32 = 18;

/// Strokes a player receives on a hole, including the extra stroke per
/// full 18 above the hole's stroke index.
pub fn strokes_for_hole(course_handicap: i32, hole_stroke_index: i32) -> i32 {
    if course_handicap >= hole_stroke_index {
        1 + (course_handicap - hole_stroke_index) / HOLES
    } else {
        0
    }
}

/// Halves round toward positive infinity.
pub fn course_handicap(handicap_index: f64, slope_rating: u32) -> i32 {
    let scaled = handicap_index * f64::from(slope_rating) / STANDARD_SLOPE;
    (scaled + 0.5).floor() as i32
}
