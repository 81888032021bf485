/// Every item whose key lies in `[min, max]`, in input order.
pub fn filter_in_range<T, K, F>(items: &[T], min: K, max: K, key: F) -> Vec<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    items
        .iter()
        .filter(|item| {
            let value = key(*item);
            value >= min && value <= max
        })
        .collect()
}

/// Binary search over `sorted` (ascending by `key`) for the rightmost index
/// whose key is `<= max`.
///
/// Each probe within budget moves the lower bound up, so the result is the
/// most expensive item still affordable. `None` when every key exceeds `max`.
pub fn rightmost_at_most<T, K, F>(sorted: &[T], max: K, key: F) -> Option<usize>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut left = 0;
    let mut right = sorted.len();
    let mut found = None;

    while left < right {
        let mid = left + (right - left) / 2;
        if key(&sorted[mid]) <= max {
            found = Some(mid);
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    found
}
