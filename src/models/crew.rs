//! Crew member model.
//!
//! Crew members are the people assigned to mission tasks: foremen,
//! equipment operators, laborers, flaggers. Each carries a role, a
//! daily hour cap, and a weekday availability pattern. Read-only input
//! to the constraint evaluator.

use serde::{Deserialize, Serialize};

/// A crew member who can be assigned to tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    /// Unique crew member identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role on the crew.
    pub role: CrewRole,
    /// Calendar display color (hex string, display only).
    pub color: String,
    /// Maximum working hours per calendar day.
    pub max_hours_per_day: f64,
    /// Weekdays this member is available to work.
    /// Empty = available every day.
    pub availability: Vec<Weekday>,
}

/// Crew role classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewRole {
    /// Crew lead, responsible for the site.
    Foreman,
    /// Heavy equipment operator (paver, roller, melter).
    Operator,
    /// General labor.
    Laborer,
    /// Traffic control.
    Flagger,
    /// Domain-specific role.
    Custom(String),
}

/// Day-of-week token for availability patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Converts from a chrono weekday.
    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl CrewMember {
    /// Creates a new crew member with the given ID and role.
    pub fn new(id: impl Into<String>, role: CrewRole) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
            color: String::new(),
            max_hours_per_day: 8.0,
            availability: Vec::new(),
        }
    }

    /// Creates a foreman.
    pub fn foreman(id: impl Into<String>) -> Self {
        Self::new(id, CrewRole::Foreman)
    }

    /// Creates an equipment operator.
    pub fn operator(id: impl Into<String>) -> Self {
        Self::new(id, CrewRole::Operator)
    }

    /// Creates a laborer.
    pub fn laborer(id: impl Into<String>) -> Self {
        Self::new(id, CrewRole::Laborer)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the calendar display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the daily hour cap.
    pub fn with_max_hours(mut self, max_hours_per_day: f64) -> Self {
        self.max_hours_per_day = max_hours_per_day;
        self
    }

    /// Adds an available weekday.
    pub fn with_availability(mut self, day: Weekday) -> Self {
        self.availability.push(day);
        self
    }

    /// Whether this member works on the given weekday.
    ///
    /// An empty availability list means always available.
    pub fn works_on(&self, day: Weekday) -> bool {
        self.availability.is_empty() || self.availability.contains(&day)
    }
}
