use crate::error::{Result, ScorecardError};
use serde::Serialize;

pub const HOLES_PER_ROUND: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Yardages {
    pub yellow: u32,
    pub white: u32,
    pub blue: u32,
    pub red: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hole {
    pub number: u32,
    pub name: &'static str,
    pub par: i32,
    /// 1 is the hardest hole and receives strokes first.
    pub stroke_index: i32,
    pub yardages: Yardages,
}

impl Hole {
    #[cfg(test)]
    pub(crate) const fn new(number: u32, par: i32, stroke_index: i32) -> Self {
        Self {
            number,
            name: "",
            par,
            stroke_index,
            yardages: Yardages {
                yellow: 0,
                white: 0,
                blue: 0,
                red: None,
            },
        }
    }

    /// Yardage from the named tee, falling back to the white column.
    pub fn yardage_for(&self, tee: &str) -> u32 {
        match tee.to_ascii_lowercase().as_str() {
            "yellow" => self.yardages.yellow,
            "blue" => self.yardages.blue,
            "red" => self.yardages.red.unwrap_or(self.yardages.white),
            _ => self.yardages.white,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeeBox {
    pub name: &'static str,
    pub course_rating: f64,
    pub slope_rating: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Course {
    pub key: &'static str,
    pub name: &'static str,
    pub tee_boxes: &'static [TeeBox],
    pub holes: &'static [Hole],
}

impl Course {
    pub fn tee(&self, name: &str) -> Result<TeeBox> {
        self.tee_boxes
            .iter()
            .find(|tee| tee.name.eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| ScorecardError::UnknownTee {
                course: self.key.to_string(),
                tee: name.to_string(),
            })
    }

    pub fn par(&self) -> i32 {
        self.holes.iter().map(|hole| hole.par).sum()
    }

    pub fn validate(&self) -> Result<()> {
        validate_holes(self.holes)
    }
}

pub fn validate_holes(holes: &[Hole]) -> Result<()> {
    if holes.len() != HOLES_PER_ROUND {
        return Err(ScorecardError::InvalidShape(format!(
            "expected {} holes, found {}",
            HOLES_PER_ROUND,
            holes.len()
        )));
    }

    let mut seen = [false; HOLES_PER_ROUND];
    for hole in holes {
        if hole.par < 3 {
            return Err(ScorecardError::InvalidShape(format!(
                "hole {} has par {}",
                hole.number, hole.par
            )));
        }
        let slot = usize::try_from(hole.stroke_index - 1)
            .ok()
            .filter(|slot| *slot < HOLES_PER_ROUND)
            .ok_or_else(|| {
                ScorecardError::InvalidShape(format!(
                    "hole {} has stroke index {}",
                    hole.number, hole.stroke_index
                ))
            })?;
        if seen[slot] {
            return Err(ScorecardError::InvalidShape(format!(
                "stroke index {} used more than once",
                hole.stroke_index
            )));
        }
        seen[slot] = true;
    }
    Ok(())
}
