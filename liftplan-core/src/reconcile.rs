//! Program-list reconciliation: flatten an array of server programs (each
//! embedding its workouts) into two id-keyed lookup tables for the list
//! page.

use std::collections::HashMap;

use log::warn;
use serde_json::Value;

use liftplan_types::{EntityId, Program, Workout};

use crate::normalize::{duration_unit_field, entity_id, main_goal_field, standardize_exercise};

/// Flattened lookup tables built from a raw program list. Workouts are
/// keyed independently of their programs and carry a `program_id`
/// back-reference, giving O(1) lookup by workout id and O(workouts)
/// filtering by program.
#[derive(Debug, Default)]
pub struct ProgramIndex {
    pub programs_by_id: HashMap<EntityId, Program>,
    pub workouts_by_id: HashMap<EntityId, Workout>,
}

impl ProgramIndex {
    pub fn workouts_for_program(&self, program_id: &EntityId) -> Vec<&Workout> {
        self.workouts_by_id
            .values()
            .filter(|w| w.program_id.as_ref() == Some(program_id))
            .collect()
    }
}

/// Build the index from the raw `GET /api/users/{id}/programs` response.
///
/// Defaults mirror the normalizers. If the same id appears twice the last
/// occurrence wins; upstream behavior for duplicates is unspecified and no
/// dedup intent is inferred here.
pub fn reconcile_programs(raw_programs: &[Value]) -> ProgramIndex {
    let mut index = ProgramIndex::default();

    for raw in raw_programs {
        let Some(obj) = raw.as_object() else {
            warn!("skipping non-object entry in program list");
            continue;
        };
        let Some(program_id) = entity_id(obj.get("id")) else {
            warn!("skipping program without an id");
            continue;
        };

        let program = Program {
            id: program_id.clone(),
            user_id: obj.get("userId").and_then(Value::as_i64),
            name: obj
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            program_duration: obj
                .get("programDuration")
                .and_then(Value::as_u64)
                .unwrap_or(0) as u32,
            duration_unit: duration_unit_field(obj.get("durationUnit")),
            days_per_week: obj.get("daysPerWeek").and_then(Value::as_u64).unwrap_or(0) as u32,
            main_goal: main_goal_field(obj.get("mainGoal")),
        };
        index.programs_by_id.insert(program_id.clone(), program);

        let workouts = obj
            .get("workouts")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for raw_workout in workouts {
            let Some(workout_obj) = raw_workout.as_object() else {
                continue;
            };
            let Some(workout_id) = entity_id(workout_obj.get("id")) else {
                warn!("skipping workout without an id in program {}", program_id);
                continue;
            };
            let workout = Workout {
                id: workout_id.clone(),
                program_id: Some(program_id.clone()),
                name: workout_obj
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                exercises: workout_obj
                    .get("exercises")
                    .and_then(Value::as_array)
                    .map(|list| list.iter().filter_map(standardize_exercise).collect())
                    .unwrap_or_default(),
            };
            index.workouts_by_id.insert(workout_id, workout);
        }
    }

    index
}
