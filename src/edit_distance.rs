use crate::helpers::prefix_suffix_prep;

// reusable dynamic-program rows; compare() allocates its own, callers running
// many comparisons in a loop can reuse one Scratch instead
#[derive(Default)]
pub struct Scratch {
    char_costs: Vec<i64>,
    prev_char_costs: Vec<i64>,
}

// returns the OSA distance if it is <= max_distance, else -1
pub fn compare(s1: &str, s2: &str, max_distance: i64) -> i64 {
    let mut scratch = Scratch::default();
    compare_with(&mut scratch, s1, s2, max_distance)
}

pub fn compare_with(scratch: &mut Scratch, s1: &str, s2: &str, max_distance: i64) -> i64 {
    if s1 == s2 {
        return 0;
    }
    if max_distance <= 0 {
        return if s1 == s2 { 0 } else { -1 };
    }

    let mut c1: Vec<char> = s1.chars().collect();
    let mut c2: Vec<char> = s2.chars().collect();
    if c1.len() > c2.len() {
        std::mem::swap(&mut c1, &mut c2);
    }
    if c1.is_empty() {
        return if c2.len() as i64 <= max_distance {
            c2.len() as i64
        } else {
            -1
        };
    }
    if (c2.len() - c1.len()) as i64 > max_distance {
        return -1;
    }

    let (len_1, len_2, start) = prefix_suffix_prep(&c1, &c2);
    if len_1 == 0 {
        return if len_2 as i64 <= max_distance {
            len_2 as i64
        } else {
            -1
        };
    }

    if len_2 > scratch.char_costs.len() {
        scratch.char_costs = vec![0; len_2];
        scratch.prev_char_costs = vec![0; len_2];
    }

    if max_distance < len_2 as i64 {
        distance_max(
            &c1,
            &c2,
            len_1,
            len_2,
            start,
            max_distance,
            &mut scratch.char_costs,
            &mut scratch.prev_char_costs,
        )
    } else {
        distance_unbounded(
            &c1,
            &c2,
            len_1,
            len_2,
            start,
            &mut scratch.char_costs,
            &mut scratch.prev_char_costs,
        )
    }
}

fn distance_unbounded(
    s1: &[char],
    s2: &[char],
    len_1: usize,
    len_2: usize,
    start: usize,
    char_costs: &mut [i64],
    prev_char_costs: &mut [i64],
) -> i64 {
    for (j, slot) in char_costs.iter_mut().take(len_2).enumerate() {
        *slot = j as i64 + 1;
    }

    let mut char_1 = '\0';
    let mut current_cost = 0i64;
    for i in 0..len_1 {
        let prev_char_1 = char_1;
        char_1 = s1[start + i];
        let mut char_2 = '\0';
        let mut left_char_cost = i as i64;
        let mut above_char_cost = i as i64;
        let mut next_trans_cost = 0i64;
        for j in 0..len_2 {
            let this_trans_cost = next_trans_cost;
            next_trans_cost = prev_char_costs[j];
            prev_char_costs[j] = left_char_cost;
            current_cost = left_char_cost;
            left_char_cost = char_costs[j];
            let prev_char_2 = char_2;
            char_2 = s2[start + j];
            if char_1 != char_2 {
                if above_char_cost < current_cost {
                    current_cost = above_char_cost;
                }
                if left_char_cost < current_cost {
                    current_cost = left_char_cost;
                }
                current_cost += 1;
                if i != 0
                    && j != 0
                    && char_1 == prev_char_2
                    && prev_char_1 == char_2
                    && this_trans_cost + 1 < current_cost
                {
                    current_cost = this_trans_cost + 1;
                }
            }
            char_costs[j] = current_cost;
            above_char_cost = current_cost;
        }
    }
    current_cost
}

#[allow(clippy::too_many_arguments)]
fn distance_max(
    s1: &[char],
    s2: &[char],
    len_1: usize,
    len_2: usize,
    start: usize,
    max_distance: i64,
    char_costs: &mut [i64],
    prev_char_costs: &mut [i64],
) -> i64 {
    for (j, slot) in char_costs.iter_mut().take(len_2).enumerate() {
        *slot = if (j as i64) < max_distance {
            j as i64 + 1
        } else {
            max_distance + 1
        };
    }

    let len_diff = len_2 as i64 - len_1 as i64;
    let j_start_offset = max_distance - len_diff;
    let mut j_start = 0i64;
    let mut j_end = max_distance;
    let mut char_1 = '\0';
    let mut current_cost = 0i64;
    for i in 0..len_1 {
        let prev_char_1 = char_1;
        char_1 = s1[start + i];
        let mut char_2 = '\0';
        let mut left_char_cost = i as i64;
        let mut above_char_cost = i as i64;
        let mut next_trans_cost = 0i64;
        if i as i64 > j_start_offset {
            j_start += 1;
        }
        if j_end < len_2 as i64 {
            j_end += 1;
        }
        for j in j_start as usize..j_end as usize {
            let this_trans_cost = next_trans_cost;
            next_trans_cost = prev_char_costs[j];
            prev_char_costs[j] = left_char_cost;
            current_cost = left_char_cost;
            left_char_cost = char_costs[j];
            let prev_char_2 = char_2;
            char_2 = s2[start + j];
            if char_1 != char_2 {
                if above_char_cost < current_cost {
                    current_cost = above_char_cost;
                }
                if left_char_cost < current_cost {
                    current_cost = left_char_cost;
                }
                current_cost += 1;
                if i != 0
                    && j != 0
                    && char_1 == prev_char_2
                    && prev_char_1 == char_2
                    && this_trans_cost + 1 < current_cost
                {
                    current_cost = this_trans_cost + 1;
                }
            }
            char_costs[j] = current_cost;
            above_char_cost = current_cost;
        }
        if char_costs[(i as i64 + len_diff) as usize] > max_distance {
            return -1;
        }
    }
    if current_cost <= max_distance {
        current_cost
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_are_zero() {
        assert_eq!(compare("hello", "hello", 5), 0);
    }

    #[test]
    fn symmetric() {
        assert_eq!(compare("kitten", "sitting", 5), compare("sitting", "kitten", 5));
    }

    #[test]
    fn substitution_counts_as_one() {
        assert_eq!(compare("teh", "the", 2), 1);
    }

    #[test]
    fn transposition_counts_as_one() {
        assert_eq!(compare("ab", "ba", 2), 1);
    }

    #[test]
    fn exceeding_bound_returns_minus_one() {
        assert_eq!(compare("kitten", "sitting", 2), -1);
    }

    #[test]
    fn bounded_matches_unbounded_for_many_pairs() {
        let pairs = [
            ("spelling", "speling"),
            ("quick", "quikc"),
            ("brown", "broown"),
            ("the", "teh"),
            ("member", "membr"),
            ("a", "abc"),
        ];
        for (a, b) in pairs {
            let unbounded = compare(a, b, 100);
            let bounded = compare(a, b, unbounded.max(0));
            assert_eq!(unbounded, bounded, "{a} vs {b}");
        }
    }

    #[test]
    fn empty_string_distance_is_other_length() {
        assert_eq!(compare("", "abc", 5), 3);
        assert_eq!(compare("", "abc", 2), -1);
    }
}
