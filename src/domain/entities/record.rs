//! Roster record entity representing one student or user row.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Presence status of a roster entry.
///
/// Serialized as `Online` / `Offline`. The dashboard table shows it as
/// `Present` / `Absent` via [`Status::attendance_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Online,
    Offline,
}

impl Status {
    /// Raw status text, used for searching and sorting.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }

    /// Attendance wording shown in the roster table.
    pub fn attendance_label(&self) -> &'static str {
        match self {
            Self::Online => "Present",
            Self::Offline => "Absent",
        }
    }

    /// CSS class for the status cell.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Online)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single roster entry.
///
/// `name` is the identity key and must be unique within a roster.
/// `last_login` is free text ("5 mins ago", "Yesterday") and only ever
/// compared lexically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[validate(length(min = 1, message = "Record name must not be empty"))]
    pub name: String,
    pub role: String,
    pub status: Status,
    pub last_login: String,
}

impl Record {
    /// Creates a new Record instance.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        status: Status,
        last_login: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            status,
            last_login: last_login.into(),
        }
    }
}
