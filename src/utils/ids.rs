use std::num::ParseIntError;

/// What a `DELETE /emp/{ids}` path segment refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Single(i32),
    Batch(Vec<i32>),
}

/// Parses `"7"` as a single id and `"3-5-9"` as a batch. Any non-numeric
/// token, including an empty one, fails the whole segment.
pub fn parse_delete_target(segment: &str) -> Result<DeleteTarget, ParseIntError> {
    if segment.contains('-') {
        let ids = segment
            .split('-')
            .map(str::parse::<i32>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DeleteTarget::Batch(ids))
    } else {
        segment.parse().map(DeleteTarget::Single)
    }
}
