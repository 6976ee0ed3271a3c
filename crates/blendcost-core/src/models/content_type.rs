use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// The two production content types a video's runtime is split between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContentType {
    /// 2D/2.5D animated design work.
    MotionGraphics,
    /// CGI, VFX and SFX work.
    Cgfx,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::MotionGraphics, ContentType::Cgfx];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::MotionGraphics => "Motion Graphics",
            Self::Cgfx => "CGI/VFX/SFX",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
