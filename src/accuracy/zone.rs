//! Accuracy zone bands.
//!
//! Underspend is graded in five rings below the bullseye, while overspend
//! only gets a single ring (`100 < p <= 105`) before turning into a bust.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const BULLSEYE_FLOOR: f64 = 95.0;
pub const PERFECT: f64 = 100.0;
pub const RING1_CEILING: f64 = 105.0;
pub const RING1_FLOOR: f64 = 80.0;
pub const RING2_FLOOR: f64 = 60.0;
pub const RING3_FLOOR: f64 = 40.0;
pub const RING4_FLOOR: f64 = 20.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyZone {
    Bullseye,
    Ring1,
    Ring2,
    Ring3,
    Ring4,
    Ring5,
    Bust,
    Unused,
}

impl AccuracyZone {
    pub const ALL: [AccuracyZone; 8] = [
        AccuracyZone::Bullseye,
        AccuracyZone::Ring1,
        AccuracyZone::Ring2,
        AccuracyZone::Ring3,
        AccuracyZone::Ring4,
        AccuracyZone::Ring5,
        AccuracyZone::Bust,
        AccuracyZone::Unused,
    ];

    /// Classifies a spend-to-budget percentage. Callers handle the unused
    /// case (no spend) before reaching the bands.
    pub fn classify(percentage: f64) -> Self {
        if percentage > RING1_CEILING {
            AccuracyZone::Bust
        } else if percentage > PERFECT {
            AccuracyZone::Ring1
        } else if percentage > BULLSEYE_FLOOR {
            AccuracyZone::Bullseye
        } else if percentage > RING1_FLOOR {
            AccuracyZone::Ring1
        } else if percentage > RING2_FLOOR {
            AccuracyZone::Ring2
        } else if percentage > RING3_FLOOR {
            AccuracyZone::Ring3
        } else if percentage > RING4_FLOOR {
            AccuracyZone::Ring4
        } else {
            AccuracyZone::Ring5
        }
    }

    /// Ring index counted outward from the centre: bullseye is 0, ring5 is 5.
    /// Bust and unused sit outside the board.
    pub fn ring_index(self) -> Option<u8> {
        match self {
            AccuracyZone::Bullseye => Some(0),
            AccuracyZone::Ring1 => Some(1),
            AccuracyZone::Ring2 => Some(2),
            AccuracyZone::Ring3 => Some(3),
            AccuracyZone::Ring4 => Some(4),
            AccuracyZone::Ring5 => Some(5),
            AccuracyZone::Bust | AccuracyZone::Unused => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccuracyZone::Bullseye => "bullseye",
            AccuracyZone::Ring1 => "ring1",
            AccuracyZone::Ring2 => "ring2",
            AccuracyZone::Ring3 => "ring3",
            AccuracyZone::Ring4 => "ring4",
            AccuracyZone::Ring5 => "ring5",
            AccuracyZone::Bust => "bust",
            AccuracyZone::Unused => "unused",
        }
    }

    /// Human-readable band description, e.g. for legends.
    pub fn band_description(self) -> &'static str {
        match self {
            AccuracyZone::Bullseye => "96-100%",
            AccuracyZone::Ring1 => "81-95% or 101-105%",
            AccuracyZone::Ring2 => "61-80%",
            AccuracyZone::Ring3 => "41-60%",
            AccuracyZone::Ring4 => "21-40%",
            AccuracyZone::Ring5 => "1-20%",
            AccuracyZone::Bust => "over 105%",
            AccuracyZone::Unused => "no spending",
        }
    }
}

impl fmt::Display for AccuracyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
