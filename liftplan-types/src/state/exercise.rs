//! Exercise instances and their sets.

use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Weight unit for a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lbs => "lbs",
            Self::Kg => "kg",
        }
    }
}

/// One performed unit (reps x weight) within an exercise.
///
/// `reps` and `weight` are `None` for a blank set the user has not filled
/// in yet; on the wire a blank metric is the empty string and a filled one
/// a number (see [`metric`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub id: EntityId,
    #[serde(default)]
    pub order: u32,
    #[serde(default, with = "metric")]
    pub reps: Option<f64>,
    #[serde(default, with = "metric")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub unit: WeightUnit,
}

impl Set {
    /// A fresh, blank set at the given order.
    pub fn blank(order: u32) -> Self {
        Self {
            id: EntityId::fresh(),
            order,
            reps: None,
            weight: None,
            unit: WeightUnit::Lbs,
        }
    }
}

/// Fields of a set that a caller may update. Outer `None` fields are left
/// as-is; the set to patch is matched by `id`. The metric fields are
/// double-optioned so `Some(None)` clears a filled value back to blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPatch {
    pub id: EntityId,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default, with = "metric_patch", skip_serializing_if = "Option::is_none")]
    pub reps: Option<Option<f64>>,
    #[serde(default, with = "metric_patch", skip_serializing_if = "Option::is_none")]
    pub weight: Option<Option<f64>>,
    #[serde(default)]
    pub unit: Option<WeightUnit>,
}

impl SetPatch {
    pub fn for_set(id: EntityId) -> Self {
        Self {
            id,
            order: None,
            reps: None,
            weight: None,
            unit: None,
        }
    }
}

/// A workout-scoped instance of a catalog exercise.
///
/// `id` is the per-workout instance identity; `catalog_exercise_id` is the
/// stable reference into the read-only catalog, and is what "already in
/// this workout" checks compare against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: EntityId,
    #[serde(default)]
    pub catalog_exercise_id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub muscle: String,
    #[serde(default)]
    pub equipment: String,
    /// 1-based position within the workout, contiguous after every
    /// structural mutation.
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub sets: Vec<Set>,
}

/// Serde helper for the blank-or-number metric fields. Serializes `None`
/// as `""` and accepts a number, a numeric string, `""`, or `null`.
pub mod metric {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(n) => s.serialize_f64(*n),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Option::<Repr>::deserialize(d)? {
            None => None,
            Some(Repr::Num(n)) => Some(n),
            Some(Repr::Text(t)) => t.trim().parse().ok(),
        })
    }
}

/// Serde helper for [`SetPatch`] metric fields: a present value follows the
/// [`metric`] rules (so `""` means clear-to-blank); absent fields fall back
/// to the `default` of outer `None`.
pub mod metric_patch {
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<Option<f64>>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(inner) => super::metric::serialize(inner, s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<f64>>, D::Error> {
        super::metric::deserialize(d).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_set_has_no_metrics() {
        let set = Set::blank(3);
        assert_eq!(set.order, 3);
        assert_eq!(set.reps, None);
        assert_eq!(set.weight, None);
        assert_eq!(set.unit, WeightUnit::Lbs);
    }

    #[test]
    fn blank_metric_serializes_as_empty_string() {
        let set = Set::blank(1);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["reps"], "");
        assert_eq!(json["weight"], "");
    }

    #[test]
    fn metric_deserializes_number_string_and_blank() {
        let set: Set = serde_json::from_str(
            r#"{"id": "s1", "order": 1, "reps": 8, "weight": "135.5", "unit": "lbs"}"#,
        )
        .unwrap();
        assert_eq!(set.reps, Some(8.0));
        assert_eq!(set.weight, Some(135.5));

        let blank: Set = serde_json::from_str(r#"{"id": "s2", "order": 2, "reps": "", "weight": null}"#)
            .unwrap();
        assert_eq!(blank.reps, None);
        assert_eq!(blank.weight, None);
    }

    #[test]
    fn patch_distinguishes_absent_from_cleared_metrics() {
        let patch: SetPatch = serde_json::from_str(r#"{"id": "s1", "reps": ""}"#).unwrap();
        assert_eq!(patch.reps, Some(None));
        assert_eq!(patch.weight, None);

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["reps"], "");
        assert!(json.get("weight").is_none());
    }

    #[test]
    fn exercise_defaults_fill_missing_fields() {
        let ex: Exercise = serde_json::from_str(r#"{"id": "e1"}"#).unwrap();
        assert_eq!(ex.catalog_exercise_id, None);
        assert_eq!(ex.name, "");
        assert_eq!(ex.order, 0);
        assert!(ex.sets.is_empty());
    }
}
