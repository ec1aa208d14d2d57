//! Per-vehicle timeline construction.
//!
//! A timeline is a `Vec<usize>` where entry `t` is the node occupied at
//! tick `t`. Its last entry is always the vehicle's current position.
//! All helpers are total: they never drop required ticks.

/// Appends `ticks` wait ticks at `node`. No-op for `ticks == 0`.
pub fn append_wait(timeline: &mut Vec<usize>, node: usize, ticks: usize) {
    timeline.extend(std::iter::repeat(node).take(ticks));
}

/// Appends a move along `path`.
///
/// `path[0]` is assumed to be the current tail of `timeline`; one tick is
/// appended per remaining node.
pub fn append_move(timeline: &mut Vec<usize>, path: &[usize]) {
    if let Some((_, rest)) = path.split_first() {
        timeline.extend_from_slice(rest);
    }
}

/// Returns `timeline` padded (by waiting at its last node) or truncated to
/// exactly `horizon` ticks.
///
/// An empty timeline is padded with `fallback`.
pub fn fit_to_horizon(timeline: &[usize], horizon: usize, fallback: usize) -> Vec<usize> {
    if timeline.len() >= horizon {
        return timeline[..horizon].to_vec();
    }
    let last = timeline.last().copied().unwrap_or(fallback);
    let mut fitted = Vec::with_capacity(horizon);
    fitted.extend_from_slice(timeline);
    append_wait(&mut fitted, last, horizon - timeline.len());
    fitted
}
