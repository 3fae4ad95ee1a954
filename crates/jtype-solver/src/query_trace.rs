//! Structured query tracing for the public relation checks.
//!
//! Events use target `jtype::query_json` and are intended to be consumed with:
//! `JTYPE_LOG=jtype::query_json=trace JTYPE_LOG_FORMAT=json`.
//!
//! Environment:
//! - `JTYPE_QUERY_RUN_ID`: optional run identifier attached to every event.

use crate::TypeId;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Level, trace};

static NEXT_QUERY_ID: AtomicU64 = AtomicU64::new(1);
static QUERY_RUN_ID: OnceLock<String> = OnceLock::new();

#[inline]
pub(crate) fn enabled() -> bool {
    tracing::enabled!(target: "jtype::query_json", Level::TRACE)
}

#[inline]
pub(crate) fn next_query_id() -> u64 {
    NEXT_QUERY_ID.fetch_add(1, Ordering::Relaxed)
}

#[inline]
fn run_id() -> &'static str {
    QUERY_RUN_ID
        .get_or_init(|| std::env::var("JTYPE_QUERY_RUN_ID").unwrap_or_else(|_| "default".to_string()))
        .as_str()
}

#[inline]
pub(crate) fn relation_start(query_id: u64, op: &'static str, to: TypeId, from: TypeId, infer: bool) {
    trace!(
        target: "jtype::query_json",
        event = "relation",
        phase = "start",
        run_id = run_id(),
        query_id,
        op,
        to_type_id = to.0,
        from_type_id = from.0,
        infer
    );
}

#[inline]
pub(crate) fn relation_end(query_id: u64, op: &'static str, result: bool, limit_hit: bool) {
    trace!(
        target: "jtype::query_json",
        event = "relation",
        phase = "end",
        run_id = run_id(),
        query_id,
        op,
        result,
        limit_hit
    );
}
