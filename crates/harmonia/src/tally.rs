//! Integer percentages by largest-remainder rounding.

/// Converts non-negative weights into integer percentages summing to 100.
///
/// Each share is floored, then the points still missing go one each to the
/// largest fractional remainders (ties to the lower index). Returns `None`
/// when the weights sum to zero.
pub fn largest_remainder_percentages<const N: usize>(weights: [f64; N]) -> Option<[u32; N]> {
    let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let exact: Vec<f64> = weights.iter().map(|w| w.max(0.0) / total * 100.0).collect();
    let mut result = [0u32; N];
    for (slot, value) in result.iter_mut().zip(&exact) {
        *slot = value.floor() as u32;
    }

    let assigned: u32 = result.iter().sum();
    let mut order: Vec<usize> = (0..N).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    for &index in order.iter().take(100u32.saturating_sub(assigned) as usize) {
        result[index] += 1;
    }

    Some(result)
}
