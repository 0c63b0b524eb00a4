//! Program entity and its enumerated fields.

use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Unit for a program's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Days,
    Weeks,
    Months,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 3] = [Self::Days, Self::Weeks, Self::Months];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }

    /// Display label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
        }
    }

    /// Case-insensitive parse of either the wire value or the label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "days" => Some(Self::Days),
            "weeks" => Some(Self::Weeks),
            "months" => Some(Self::Months),
            _ => None,
        }
    }
}

/// Primary training goal of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MainGoal {
    #[default]
    #[serde(rename = "strength")]
    Strength,
    #[serde(rename = "endurance")]
    Endurance,
    #[serde(rename = "hypertrophy")]
    Hypertrophy,
    #[serde(rename = "weight loss")]
    WeightLoss,
}

impl MainGoal {
    pub const ALL: [MainGoal; 4] = [
        Self::Strength,
        Self::Endurance,
        Self::Hypertrophy,
        Self::WeightLoss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::Hypertrophy => "hypertrophy",
            Self::WeightLoss => "weight loss",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Endurance => "Endurance",
            Self::Hypertrophy => "Hypertrophy",
            Self::WeightLoss => "Weight Loss",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" => Some(Self::Strength),
            "endurance" => Some(Self::Endurance),
            "hypertrophy" => Some(Self::Hypertrophy),
            "weight loss" | "weight-loss" => Some(Self::WeightLoss),
            _ => None,
        }
    }
}

/// A multi-week training plan. Owns its workouts through the workout
/// sub-state, not through an embedded list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: EntityId,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub program_duration: u32,
    #[serde(default)]
    pub duration_unit: DurationUnit,
    #[serde(default)]
    pub days_per_week: u32,
    #[serde(default)]
    pub main_goal: MainGoal,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            id: EntityId::fresh(),
            user_id: None,
            name: String::new(),
            program_duration: 0,
            duration_unit: DurationUnit::Days,
            days_per_week: 0,
            main_goal: MainGoal::Strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_unit_wire_values() {
        assert_eq!(
            serde_json::to_string(&DurationUnit::Weeks).unwrap(),
            "\"weeks\""
        );
        assert_eq!(DurationUnit::parse("Days"), Some(DurationUnit::Days));
        assert_eq!(DurationUnit::parse("fortnights"), None);
    }

    #[test]
    fn main_goal_wire_values() {
        assert_eq!(
            serde_json::to_string(&MainGoal::WeightLoss).unwrap(),
            "\"weight loss\""
        );
        assert_eq!(MainGoal::parse("Weight Loss"), Some(MainGoal::WeightLoss));
        assert_eq!(MainGoal::WeightLoss.label(), "Weight Loss");
    }

    #[test]
    fn program_deserializes_camel_case() {
        let p: Program = serde_json::from_str(
            r#"{"id": 5, "userId": 2, "name": "Push/Pull", "programDuration": 8,
                "durationUnit": "weeks", "daysPerWeek": 4, "mainGoal": "hypertrophy"}"#,
        )
        .unwrap();
        assert_eq!(p.id, EntityId::Persisted(5));
        assert_eq!(p.user_id, Some(2));
        assert_eq!(p.duration_unit, DurationUnit::Weeks);
        assert_eq!(p.main_goal, MainGoal::Hypertrophy);
    }
}
