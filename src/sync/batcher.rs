/// Splits `items` into contiguous batches of at most `size` elements, preserving order.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn chunk<T>(items: Vec<T>, size: usize) -> Vec<Vec<T>> {
    assert!(size > 0, "batch size must be greater than zero");

    let mut batches = Vec::with_capacity(items.len().div_ceil(size));
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        batches.push(items.by_ref().take(size).collect());
    }

    batches
}
