use crate::core::equality::loose_equal;
use crate::domain::model::Value;

/// Position of the first element loose-equal to `value`.
pub fn loose_position(sequence: &[Value], value: &Value) -> Option<usize> {
    sequence.iter().position(|item| loose_equal(item, value))
}

/// Index of the first loose match, or -1.
pub fn loose_index_of(sequence: &[Value], value: &Value) -> isize {
    loose_position(sequence, value).map_or(-1, |i| i as isize)
}

pub fn loose_contains(sequence: &[Value], value: &Value) -> bool {
    loose_position(sequence, value).is_some()
}

/// Removes and returns the first element loose-equal to `value`.
pub fn loose_remove(sequence: &mut Vec<Value>, value: &Value) -> Option<Value> {
    let index = loose_position(sequence, value)?;
    Some(sequence.remove(index))
}
