//! Cast and recast time categories.
//!
//! Raw values in the base sheet are expressed in 100 ms units; only the
//! values below occur in the catalog.
use super::{Category, CategoryValue, ValueInfo};
use crate::error::{DexError, ErrorSeverity};
use crate::filter::FilterKey;

/// Raw 100 ms value that does not belong to the closed timing enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{category} time {raw} (x100ms) is not a known value")]
pub struct UnknownTiming {
    pub category: Category,
    pub raw: u32,
}

impl DexError for UnknownTiming {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self.category {
            Category::Recast => "TIMING_UNKNOWN_RECAST",
            _ => "TIMING_UNKNOWN_CAST",
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum CastTime {
    Instant,
    S1,
    S1_5,
    S2,
    S3,
    S6,
    S10,
}

impl CastTime {
    /// Cast time in 100 ms units.
    pub const fn raw(self) -> u32 {
        match self {
            CastTime::Instant => 0,
            CastTime::S1 => 10,
            CastTime::S1_5 => 15,
            CastTime::S2 => 20,
            CastTime::S3 => 30,
            CastTime::S6 => 60,
            CastTime::S10 => 100,
        }
    }
}

impl TryFrom<u32> for CastTime {
    type Error = UnknownTiming;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(CastTime::Instant),
            10 => Ok(CastTime::S1),
            15 => Ok(CastTime::S1_5),
            20 => Ok(CastTime::S2),
            30 => Ok(CastTime::S3),
            60 => Ok(CastTime::S6),
            100 => Ok(CastTime::S10),
            _ => Err(UnknownTiming {
                category: Category::Cast,
                raw,
            }),
        }
    }
}

impl CategoryValue for CastTime {
    const CATEGORY: Category = Category::Cast;

    fn info(self) -> ValueInfo {
        match self {
            CastTime::Instant => ValueInfo::text("0s"),
            CastTime::S1 => ValueInfo::text("1s"),
            CastTime::S1_5 => ValueInfo::text("1.5s"),
            CastTime::S2 => ValueInfo::text("2s"),
            CastTime::S3 => ValueInfo::text("3s"),
            CastTime::S6 => ValueInfo::text("6s"),
            CastTime::S10 => ValueInfo::text("10s"),
        }
    }
}

impl From<CastTime> for FilterKey {
    fn from(value: CastTime) -> Self {
        FilterKey::Cast(value)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum RecastTime {
    S2_5,
    S30,
    S60,
    S90,
    S120,
    S180,
    S300,
}

impl RecastTime {
    /// Recast time in 100 ms units.
    pub const fn raw(self) -> u32 {
        match self {
            RecastTime::S2_5 => 25,
            RecastTime::S30 => 300,
            RecastTime::S60 => 600,
            RecastTime::S90 => 900,
            RecastTime::S120 => 1200,
            RecastTime::S180 => 1800,
            RecastTime::S300 => 3000,
        }
    }
}

impl TryFrom<u32> for RecastTime {
    type Error = UnknownTiming;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            25 => Ok(RecastTime::S2_5),
            300 => Ok(RecastTime::S30),
            600 => Ok(RecastTime::S60),
            900 => Ok(RecastTime::S90),
            1200 => Ok(RecastTime::S120),
            1800 => Ok(RecastTime::S180),
            3000 => Ok(RecastTime::S300),
            _ => Err(UnknownTiming {
                category: Category::Recast,
                raw,
            }),
        }
    }
}

impl CategoryValue for RecastTime {
    const CATEGORY: Category = Category::Recast;

    fn info(self) -> ValueInfo {
        match self {
            RecastTime::S2_5 => ValueInfo::text("2.5s"),
            RecastTime::S30 => ValueInfo::text("30s"),
            RecastTime::S60 => ValueInfo::text("60s"),
            RecastTime::S90 => ValueInfo::text("90s"),
            RecastTime::S120 => ValueInfo::text("120s"),
            RecastTime::S180 => ValueInfo::text("180s"),
            RecastTime::S300 => ValueInfo::text("300s"),
        }
    }
}

impl From<RecastTime> for FilterKey {
    fn from(value: RecastTime) -> Self {
        FilterKey::Recast(value)
    }
}
