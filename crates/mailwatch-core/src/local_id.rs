// ── Local identifiers ──
//
// Ids for records created while the backend is unreachable. Derived from
// the wall clock in milliseconds and forced strictly increasing, so they are
// unique for the lifetime of the process. They are NOT unique across
// restarts or across separate client processes.

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Next process-unique local id.
pub fn next_local_id() -> String {
    let now = chrono::Utc::now().timestamp_millis();
    let bump = |prev: i64| now.max(prev.saturating_add(1));

    // The closure always returns `Some`, so both arms carry the previous value.
    let prev = match LAST_ID.fetch_update(Ordering::AcqRel, Ordering::Acquire, |prev| {
        Some(bump(prev))
    }) {
        Ok(prev) | Err(prev) => prev,
    };
    bump(prev).to_string()
}
