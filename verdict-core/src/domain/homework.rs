//! Homework domain model
//!
//! Represents the latest reviewed homework as reported by the review API.

use std::str::FromStr;

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// Reviewer accepted the work
    Approved,

    /// Work is waiting for or under review
    Reviewing,

    /// Reviewer sent the work back with remarks
    Rejected,
}

impl HomeworkStatus {
    /// Human-readable verdict for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(other.to_string()),
        }
    }
}

/// The most recent homework of a cycle
///
/// Built from the raw payload, formatted into a message and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    pub fn new(name: impl Into<String>, status: HomeworkStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Notification text announcing this record's status
    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}
