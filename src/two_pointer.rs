/// Sort the values together with their original indices, then converge two
/// pointers from both ends.
///
/// Unlike the map-based variants the returned pair is normalized: the two
/// original indices come back sorted ascending no matter which pointer found
/// the match.
pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {
    let mut sorted: Vec<(usize, i32)> = nums.into_iter().enumerate().collect();
    sorted.sort_by_key(|&(_, value)| value);

    let mut left = 0;
    let mut right = sorted.len() - 1;

    while left < right {
        let sum = sorted[left].1 + sorted[right].1;
        if sum == target {
            let (i, j) = (sorted[left].0, sorted[right].0);
            return vec![i.min(j) as i32, i.max(j) as i32];
        } else if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }

    vec![]
}
