//! Entity normalizers: canonicalize raw JSON (from the API or from
//! user-entered defaults) into typed entities with defaults filled in.
//!
//! Both functions return `None` for input that is not a JSON object and
//! never panic.

use serde_json::Value;

use liftplan_types::{
    DurationUnit, EntityId, Exercise, MainGoal, Set, WeightUnit, Workout,
};

/// Parse an id field: integer ids are server-assigned, strings client-side.
pub(crate) fn entity_id(value: Option<&Value>) -> Option<EntityId> {
    match value? {
        Value::Number(n) => n.as_i64().map(EntityId::Persisted),
        Value::String(s) => Some(EntityId::Local(s.clone())),
        _ => None,
    }
}

fn string_field(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn order_field(value: Option<&Value>) -> u32 {
    value.and_then(Value::as_u64).unwrap_or(0) as u32
}

fn metric_field(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

fn set_from_raw(raw: &Value) -> Set {
    Set {
        id: entity_id(raw.get("id")).unwrap_or_else(EntityId::fresh),
        order: order_field(raw.get("order")),
        reps: Some(metric_field(raw.get("reps")).unwrap_or(0.0)),
        weight: Some(metric_field(raw.get("weight")).unwrap_or(0.0)),
        unit: match raw.get("unit").and_then(Value::as_str) {
            Some("kg") => WeightUnit::Kg,
            _ => WeightUnit::Lbs,
        },
    }
}

/// Canonicalize a raw exercise. Missing fields get type-appropriate
/// defaults (`""`, `0`, `"lbs"`) and a fresh id is assigned when absent.
pub fn standardize_exercise(raw: &Value) -> Option<Exercise> {
    let obj = raw.as_object()?;
    Some(Exercise {
        id: entity_id(obj.get("id")).unwrap_or_else(EntityId::fresh),
        catalog_exercise_id: entity_id(obj.get("catalog_exercise_id")),
        equipment: string_field(obj.get("equipment")),
        muscle: string_field(obj.get("muscle")),
        name: string_field(obj.get("name")),
        order: order_field(obj.get("order")),
        sets: obj
            .get("sets")
            .and_then(Value::as_array)
            .map(|sets| sets.iter().map(set_from_raw).collect())
            .unwrap_or_default(),
    })
}

/// Canonicalize a raw workout. The default name numbers the workout after
/// the ones already present; invalid exercise entries are dropped.
pub fn standardize_workout(raw: &Value, existing_count: usize) -> Option<Workout> {
    let obj = raw.as_object()?;
    let name = match obj.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Workout {}", existing_count + 1),
    };
    Some(Workout {
        id: entity_id(obj.get("id")).unwrap_or_else(EntityId::fresh),
        program_id: entity_id(obj.get("programId")),
        name,
        exercises: obj
            .get("exercises")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(standardize_exercise).collect())
            .unwrap_or_default(),
    })
}

/// Parse enumerated program fields leniently: raw data uses both wire
/// values and display labels ("days" / "Days").
pub(crate) fn duration_unit_field(value: Option<&Value>) -> DurationUnit {
    value
        .and_then(Value::as_str)
        .and_then(DurationUnit::parse)
        .unwrap_or_default()
}

pub(crate) fn main_goal_field(value: Option<&Value>) -> MainGoal {
    value
        .and_then(Value::as_str)
        .and_then(MainGoal::parse)
        .unwrap_or_default()
}
