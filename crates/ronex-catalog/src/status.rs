//! Status badge colors.

use ronex_core::Status;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Success,
    Warning,
    Brand,
    Muted,
}

impl StatusColor {
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Success => "#83bc40",
            Self::Warning => "#f39c12",
            Self::Brand => "#262561",
            Self::Muted => "#b7b7b7",
        }
    }

    /// The same color as RGB components, for terminal output.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Success => (0x83, 0xbc, 0x40),
            Self::Warning => (0xf3, 0x9c, 0x12),
            Self::Brand => (0x26, 0x25, 0x61),
            Self::Muted => (0xb7, 0xb7, 0xb7),
        }
    }
}

#[must_use]
pub fn status_color(status: &Status) -> StatusColor {
    match status {
        Status::Completed => StatusColor::Success,
        Status::Ongoing => StatusColor::Warning,
        Status::Planned => StatusColor::Brand,
        Status::Other(_) => StatusColor::Muted,
    }
}
