use crate::error::{Result, ScorecardError};
use crate::types::course::{Course, Hole, TeeBox, Yardages};

#[allow(clippy::too_many_arguments)]
const fn hole(
    number: u32,
    name: &'static str,
    par: i32,
    stroke_index: i32,
    yellow: u32,
    white: u32,
    blue: u32,
    red: Option<u32>,
) -> Hole {
    Hole {
        number,
        name,
        par,
        stroke_index,
        yardages: Yardages {
            yellow,
            white,
            blue,
            red,
        },
    }
}

const fn tee(name: &'static str, course_rating: f64, slope_rating: u32) -> TeeBox {
    TeeBox {
        name,
        course_rating,
        slope_rating,
    }
}

pub const LIPHOOK: Course = Course {
    key: "liphook",
    name: "Liphook Golf Club",
    tee_boxes: &[
        tee("Yellow", 69.4, 126),
        tee("White", 70.9, 129),
        tee("Blue", 71.9, 134),
    ],
    holes: &[
        hole(1, "Birch Hill", 3, 7, 184, 203, 203, None),
        hole(2, "The Old Road", 4, 3, 411, 423, 424, None),
        hole(3, "Mitland", 3, 13, 117, 142, 142, None),
        hole(4, "High View", 4, 1, 439, 460, 460, None),
        hole(5, "The Black Fox", 5, 17, 469, 489, 499, None),
        hole(6, "Ripley", 4, 5, 396, 420, 456, None),
        hole(7, "Two Counties", 5, 15, 478, 501, 501, None),
        hole(8, "The Pulpit", 3, 11, 162, 169, 176, None),
        hole(9, "Waterside", 4, 9, 355, 363, 363, None),
        hole(10, "Fowley", 4, 2, 369, 397, 431, None),
        hole(11, "Forest Mere", 5, 6, 511, 542, 560, None),
        hole(12, "The Bowl", 3, 12, 136, 150, 150, None),
        hole(13, "The Valley", 4, 10, 327, 334, 381, None),
        hole(14, "Bohunt", 4, 4, 417, 434, 434, None),
        hole(15, "Hollycombe", 4, 16, 301, 308, 308, None),
        hole(16, "The Quarry", 4, 8, 344, 360, 360, None),
        hole(17, "Sussex Edge", 3, 14, 148, 161, 161, None),
        hole(18, "Wheatsheaf", 5, 18, 449, 461, 515, None),
    ],
};

pub const ELIE: Course = Course {
    key: "elie",
    name: "Elie Golf House Club",
    tee_boxes: &[
        tee("Blue", 73.9, 140),
        tee("White", 70.6, 134),
        tee("Yellow", 68.3, 132),
        tee("Red", 73.9, 130),
    ],
    holes: &[
        hole(1, "Start", 4, 5, 389, 406, 420, Some(345)),
        hole(2, "High Hole", 4, 7, 284, 284, 284, Some(282)),
        hole(3, "Heather", 3, 17, 170, 141, 170, Some(141)),
        hole(4, "Provost", 4, 1, 367, 372, 378, Some(351)),
        hole(5, "Doctor", 4, 15, 250, 308, 365, Some(250)),
        hole(6, "Quarry", 4, 9, 310, 306, 318, Some(306)),
        hole(7, "Peggy's", 3, 13, 217, 241, 252, Some(217)),
        hole(8, "Neilop", 4, 3, 345, 370, 382, Some(345)),
        hole(9, "Martin's Bay", 5, 6, 433, 432, 440, Some(433)),
        hole(10, "Lunar Law", 4, 16, 239, 278, 288, Some(239)),
        hole(11, "Sea Hole", 3, 18, 163, 131, 131, Some(163)),
        hole(12, "Bents", 5, 11, 415, 436, 466, Some(415)),
        hole(13, "Simplicity", 4, 2, 335, 371, 380, Some(335)),
        hole(14, "Suckielea", 4, 8, 391, 402, 414, Some(391)),
        hole(15, "Coalhill", 4, 14, 321, 303, 336, Some(321)),
        hole(16, "Whinny", 4, 4, 373, 397, 407, Some(373)),
        hole(17, "Ferry", 5, 12, 433, 434, 439, Some(433)),
        hole(18, "Home", 4, 10, 347, 337, 359, Some(347)),
    ],
};

pub const ALL: [Course; 2] = [LIPHOOK, ELIE];

pub fn find(key: &str) -> Result<Course> {
    ALL.iter()
        .find(|course| course.key.eq_ignore_ascii_case(key))
        .copied()
        .ok_or_else(|| ScorecardError::UnknownCourse(key.to_string()))
}
