/// In-place partition-exchange sort, ascending by `key`.
///
/// The pivot is the last element of the active range. Not stable: elements
/// with equal keys may change relative order.
pub fn quick_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    quick_sort_range(items, &key);
}

fn quick_sort_range<T, K, F>(mut items: &mut [T], key: &F)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    // Recurse into the smaller side and loop on the larger one so stack depth
    // stays logarithmic on already-sorted input.
    while items.len() > 1 {
        let pivot = partition(items, key);
        let (left, rest) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort_range(left, key);
            items = right;
        } else {
            quick_sort_range(right, key);
            items = left;
        }
    }
}

/// Lomuto partition around the last element. Returns the pivot's final index.
fn partition<T, K, F>(items: &mut [T], key: &F) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let high = items.len() - 1;
    let pivot = key(&items[high]);
    let mut store = 0;

    for j in 0..high {
        if key(&items[j]) <= pivot {
            items.swap(store, j);
            store += 1;
        }
    }

    items.swap(store, high);
    store
}

/// Stable top-down merge sort, ascending by `key`.
///
/// Each merge copies the two halves into buffers sized exactly to them; on
/// equal keys the left element is taken first.
pub fn merge_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    merge_sort_range(items, &key);
}

fn merge_sort_range<T, K, F>(items: &mut [T], key: &F)
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if items.len() < 2 {
        return;
    }

    // Left half gets the middle element: [0, mid) and [mid, len)
    let mid = (items.len() + 1) / 2;
    merge_sort_range(&mut items[..mid], key);
    merge_sort_range(&mut items[mid..], key);
    merge(items, mid, key);
}

fn merge<T, K, F>(items: &mut [T], mid: usize, key: &F)
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if key(&left[i]) <= key(&right[j]) {
            items[k] = left[i].clone();
            i += 1;
        } else {
            items[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    for item in left[i..].iter().chain(right[j..].iter()) {
        items[k] = item.clone();
        k += 1;
    }
}
