use serde::{Deserialize, Serialize};

/// One normalized sample of the order-count series.
///
/// `ts` is the backend's timestamp label, kept opaque; the dashboard only
/// displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCountPoint {
    pub ts: String,
    pub count: f64,
}

impl OrderCountPoint {
    pub fn new(ts: impl Into<String>, count: f64) -> Self {
        Self {
            ts: ts.into(),
            count,
        }
    }
}

/// Aggregate count of all orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalOrderCount {
    pub count: u64,
}

/// Aggregate count of completed orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteOrderCount {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_counts_decode_from_count_objects() {
        let total: TotalOrderCount =
            serde_json::from_value(serde_json::json!({"count": 250})).unwrap();
        assert_eq!(total.count, 250);

        let complete: CompleteOrderCount = serde_json::from_str(r#"{"count": 198}"#).unwrap();
        assert_eq!(complete.count, 198);
    }
}
