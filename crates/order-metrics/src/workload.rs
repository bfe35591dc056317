use crate::series::coerce_count;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// One normalized row of the executor workload table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadEntry {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub requests: u64,
}

/// Normalizes the heterogeneous executor-orders payload into table rows.
///
/// The endpoint has served several generations of entry shapes: bare
/// request counts, and objects with `id`/`executor_id`, `name`/
/// `executor_name` and `orders`/`count` field spellings. Objects take the
/// first usable value per field pair; empty names count as unusable. Bare
/// counts get a positional id; a missing or uncoercible count becomes
/// zero. Unlike the series decode this pass is lenient, since it feeds a
/// display table: entries of any other JSON type are dropped with a
/// warning.
pub fn normalize_workload(entries: &[Value]) -> Vec<WorkloadEntry> {
    let mut rows = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry {
            Value::Number(n) => {
                let requests = clamp_requests(n.as_f64().unwrap_or(0.0));
                rows.push(WorkloadEntry {
                    id: Some(rows.len() as u64 + 1),
                    name: None,
                    requests,
                });
            }
            Value::Object(map) => {
                // The alternate spelling kicks in when the preferred key
                // is absent or holds an unusable value.
                let id = map
                    .get("id")
                    .and_then(Value::as_u64)
                    .or_else(|| map.get("executor_id").and_then(Value::as_u64));
                let name = map
                    .get("name")
                    .and_then(Value::as_str)
                    .or_else(|| map.get("executor_name").and_then(Value::as_str))
                    .filter(|name| !name.is_empty())
                    .map(str::to_string);
                let requests = map
                    .get("orders")
                    .and_then(coerce_count)
                    .or_else(|| map.get("count").and_then(coerce_count))
                    .map_or(0, clamp_requests);

                rows.push(WorkloadEntry { id, name, requests });
            }
            other => {
                warn!("Skipping workload entry with unsupported shape: {other}");
            }
        }
    }

    rows
}

/// Request counts are display integers: floored, never negative.
fn clamp_requests(count: f64) -> u64 {
    if count.is_finite() && count > 0.0 {
        count.floor() as u64
    } else {
        0
    }
}
