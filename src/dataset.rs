//! Read-only access to the nested consumption dataset.
//!
//! The dataset itself is an external JSON document keyed per the path
//! grammar of the query plan. The aggregator only needs one capability from
//! it: fetch the numeric leaf at a typed path-segment list, or report that
//! the path has no entry. There is deliberately no way to get a silent
//! default out of a missing segment.

pub trait DatasetRead {
    /// The numeric leaf at `path`, or `None` if any segment is missing or
    /// the leaf is not a number.
    fn leaf(&self, path: &[&str]) -> Option<f64>;
}

impl DatasetRead for serde_json::Value {
    fn leaf(&self, path: &[&str]) -> Option<f64> {
        let mut node = self;
        for segment in path {
            node = node.as_object()?.get(*segment)?;
        }
        node.as_f64()
    }
}

/// Render a path-segment list in the bracketed form used by error messages,
/// e.g. `[AIA_CZ1][single family home][electricity (grid)]`.
pub fn format_path(path: &[&str]) -> String {
    let mut out = String::with_capacity(path.iter().map(|s| s.len() + 2).sum());
    for segment in path {
        out.push('[');
        out.push_str(segment);
        out.push(']');
    }
    out
}
