use std::collections::HashMap;

/// Same single-pass map scan as [`crate::hashmap`], kept as a separate
/// near-duplicate: the map is keyed the same way, only the local naming
/// differs. Behavior is identical for every input.
pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {
    let mut num_map: HashMap<i32, usize> = HashMap::new();

    for (i, &num) in nums.iter().enumerate() {
        let complement = target - num;
        if num_map.contains_key(&complement) {
            return vec![num_map[&complement] as i32, i as i32];
        }
        num_map.insert(num, i);
    }

    // no solution found (though the exercise guarantees one)
    vec![]
}
