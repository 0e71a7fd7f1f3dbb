use serde::{Deserialize, Serialize};

/// Derived per-player totals. Recomputed from the snapshot, never stored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub name: String,
    pub gross_out: i32,
    pub gross_in: i32,
    pub gross: i32,
    pub net: i32,
    pub points: i32,
    pub birdies: u32,
    pub eagles: u32,
    pub pars: u32,
    pub bogeys: u32,
}

/// Classification of a single played hole relative to par, used when
/// rendering a card.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    Unplayed,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            i32::MIN..=-3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            _ => ScoreDisplay::DoubleBogey,
        }
    }

    #[must_use]
    pub fn for_hole(gross: i32, par: i32) -> Self {
        if gross <= 0 {
            ScoreDisplay::Unplayed
        } else {
            Self::from_diff(gross - par)
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreDisplay::Albatross => "albatross",
            ScoreDisplay::Eagle => "eagle",
            ScoreDisplay::Birdie => "birdie",
            ScoreDisplay::Par => "par",
            ScoreDisplay::Bogey => "bogey",
            ScoreDisplay::DoubleBogey => "double-bogey",
            ScoreDisplay::Unplayed => "unplayed",
        }
    }
}

