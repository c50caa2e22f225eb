#![forbid(unsafe_code)]

use std::time::{SystemTime, UNIX_EPOCH};

pub(in crate::store) fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .min(i64::MAX as u128) as i64
}

pub(in crate::store) fn current_year() -> i64 {
    i64::from(::time::OffsetDateTime::now_utc().year())
}
