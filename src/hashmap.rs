use std::collections::HashMap;

/// Single pass with a value -> index map of everything seen so far.
///
/// For each element the needed difference is looked up in the map before the
/// element itself is inserted, so the returned pair is always
/// `[earlier_index, current_index]`.
pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {
    let mut seen = HashMap::new();

    for (index, &value) in nums.iter().enumerate() {
        let diff = target - value;
        if let Some(&found) = seen.get(&diff) {
            return vec![found as i32, index as i32];
        }
        seen.insert(value, index);
    }

    vec![]
}
