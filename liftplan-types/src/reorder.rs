//! Drag-based reordering of a workout's exercise list.

use crate::Exercise;

/// Move the exercise at `source` to `destination` and renumber the whole
/// list to a contiguous 1-based `order`.
///
/// A `None` destination is a cancelled drag (dropped outside any target)
/// and returns the input unchanged, as does an out-of-range source. The
/// destination is clamped to the end of the list. Output length and
/// exercise ids always match the input.
pub fn reorder_exercises(
    exercises: &[Exercise],
    source: usize,
    destination: Option<usize>,
) -> Vec<Exercise> {
    let Some(destination) = destination else {
        return exercises.to_vec();
    };
    if source >= exercises.len() {
        return exercises.to_vec();
    }

    let mut reordered = exercises.to_vec();
    let moved = reordered.remove(source);
    let destination = destination.min(reordered.len());
    reordered.insert(destination, moved);

    // Full renumbering, not just the affected range.
    for (index, exercise) in reordered.iter_mut().enumerate() {
        exercise.order = index as u32 + 1;
    }
    reordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntityId;

    fn exercises(names: &[&str]) -> Vec<Exercise> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Exercise {
                id: EntityId::from(*name),
                catalog_exercise_id: Some(EntityId::from(*name)),
                name: name.to_string(),
                muscle: String::new(),
                equipment: String::new(),
                order: i as u32 + 1,
                sets: Vec::new(),
            })
            .collect()
    }

    fn names(list: &[Exercise]) -> Vec<&str> {
        list.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn moves_element_and_renumbers() {
        let list = exercises(&["bench", "squat", "row", "curl"]);
        let moved = reorder_exercises(&list, 0, Some(2));
        assert_eq!(names(&moved), vec!["squat", "row", "bench", "curl"]);
        assert_eq!(
            moved.iter().map(|e| e.order).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn move_backward() {
        let list = exercises(&["bench", "squat", "row"]);
        let moved = reorder_exercises(&list, 2, Some(0));
        assert_eq!(names(&moved), vec!["row", "bench", "squat"]);
        assert_eq!(moved[0].order, 1);
    }

    #[test]
    fn cancelled_drag_is_identity() {
        let list = exercises(&["bench", "squat"]);
        let moved = reorder_exercises(&list, 0, None);
        assert_eq!(moved, list);
    }

    #[test]
    fn out_of_range_source_is_identity() {
        let list = exercises(&["bench", "squat"]);
        let moved = reorder_exercises(&list, 5, Some(0));
        assert_eq!(moved, list);
    }

    #[test]
    fn destination_is_clamped_to_list_end() {
        let list = exercises(&["bench", "squat", "row"]);
        let moved = reorder_exercises(&list, 0, Some(99));
        assert_eq!(names(&moved), vec!["squat", "row", "bench"]);
    }

    #[test]
    fn length_and_ids_are_preserved() {
        let list = exercises(&["bench", "squat", "row", "curl", "dip"]);
        let moved = reorder_exercises(&list, 4, Some(1));
        assert_eq!(moved.len(), list.len());
        let mut before: Vec<_> = list.iter().map(|e| e.id.clone()).collect();
        let mut after: Vec<_> = moved.iter().map(|e| e.id.clone()).collect();
        before.sort_by_key(|id| id.to_string());
        after.sort_by_key(|id| id.to_string());
        assert_eq!(before, after);
    }
}
