use std::path::Path;

use crate::error::KinchResult;
use crate::events::Event;

use super::row::for_each_row;

/// Result of `competitor` in `event`, scanning the whole of `source`.
///
/// The last matching row wins, so updated rows appended to an export take
/// precedence. Returns `0` when the competitor has no result.
pub fn lookup_result(source: &Path, event: Event, competitor: &str) -> KinchResult<i64> {
    let code = event.code();
    let mut result = 0;
    for_each_row(source, |row| {
        if row.person == competitor && row.event == code {
            result = row.result;
        }
    })?;
    Ok(result)
}

/// Current record for `event` in `source`, or `0` if no row is flagged.
pub fn lookup_record_holder(source: &Path, event: Event) -> KinchResult<i64> {
    let code = event.code();
    let mut record = 0;
    for_each_row(source, |row| {
        if row.is_record && row.event == code {
            record = row.result;
        }
    })?;
    Ok(record)
}
