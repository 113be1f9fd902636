/// Deadline until which the display stays on after activity at `now_ms`.
pub fn display_deadline(now_ms: u64, timeout_ms: u64) -> u64 {
    now_ms.saturating_add(timeout_ms)
}

/// Decide whether the watch should go back to deep sleep.
///
/// Sleep starts once the current time has moved strictly past the deadline.
pub fn should_sleep(now_ms: u64, deadline_ms: u64) -> bool {
    now_ms > deadline_ms
}
