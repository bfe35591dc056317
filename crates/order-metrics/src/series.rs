use crate::error::SeriesError;
use model::metrics::order_count::OrderCountPoint;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// The two payload shapes the backend serves for the order-count series.
///
/// Entries are held raw here; [`decode_series`] runs the validation pass
/// that turns them into [`OrderCountPoint`]s or a [`SeriesError`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeriesPayload {
    /// Current shape: an array of `{ts, count}` samples.
    Points(Vec<Map<String, Value>>),
    /// Legacy shape: timestamp keys mapping directly to counts.
    Keyed(Map<String, Value>),
}

/// Decodes an order-count payload into normalized samples.
///
/// Validation rejects the whole payload on the first entry whose count
/// fails numeric coercion or whose fields are missing or mistyped; samples
/// are never silently dropped. Payloads that are neither shape are rejected
/// as [`SeriesError::UnrecognizedShape`].
pub fn decode_series(payload: Value) -> Result<Vec<OrderCountPoint>, SeriesError> {
    let payload: SeriesPayload =
        serde_json::from_value(payload).map_err(|_| SeriesError::UnrecognizedShape)?;

    match payload {
        SeriesPayload::Points(entries) => decode_points(entries),
        SeriesPayload::Keyed(map) => {
            debug!(
                "Order-count payload uses the legacy keyed shape ({} entries)",
                map.len()
            );
            decode_keyed(map)
        }
    }
}

/// Sum of all sample counts, as shown on the dashboard cards.
pub fn sum_series(points: &[OrderCountPoint]) -> f64 {
    points.iter().map(|p| p.count).sum()
}

fn decode_points(entries: Vec<Map<String, Value>>) -> Result<Vec<OrderCountPoint>, SeriesError> {
    let mut points = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let ts = entry
            .get("ts")
            .ok_or(SeriesError::MissingField { index, field: "ts" })?;
        let ts = coerce_ts(ts).ok_or_else(|| SeriesError::InvalidTimestamp {
            index,
            value: ts.clone(),
        })?;

        let count = entry.get("count").ok_or(SeriesError::MissingField {
            index,
            field: "count",
        })?;
        let count = coerce_count(count).ok_or_else(|| SeriesError::NonNumericCount {
            index,
            value: count.clone(),
        })?;

        points.push(OrderCountPoint::new(ts, count));
    }

    Ok(points)
}

fn decode_keyed(map: Map<String, Value>) -> Result<Vec<OrderCountPoint>, SeriesError> {
    let mut points = Vec::with_capacity(map.len());

    for (key, value) in map {
        let count = coerce_count(&value).ok_or_else(|| SeriesError::NonNumericKeyedCount {
            key: key.clone(),
            value: value.clone(),
        })?;
        points.push(OrderCountPoint::new(key, count));
    }

    Ok(points)
}

/// Accepts JSON numbers and numeric strings; the backend emits both.
/// Non-finite values fail coercion, so strings like `"NaN"` and
/// `"Infinity"` never reach the sums.
pub(crate) fn coerce_count(value: &Value) -> Option<f64> {
    let count = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    count.filter(|count| count.is_finite())
}

fn coerce_ts(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_the_sample_array_shape() {
        let payload = json!([
            {"ts": "2024-01-01T10:00", "count": 12},
            {"ts": 1704103200, "count": "7.5"},
        ]);

        let points = decode_series(payload).unwrap();
        assert_eq!(
            points,
            vec![
                OrderCountPoint::new("2024-01-01T10:00", 12.0),
                OrderCountPoint::new("1704103200", 7.5),
            ]
        );
    }

    #[test]
    fn decodes_the_legacy_keyed_shape() {
        let payload = json!({
            "2024-01-01": 4,
            "2024-01-02": "9",
        });

        let points = decode_series(payload).unwrap();
        assert_eq!(
            points,
            vec![
                OrderCountPoint::new("2024-01-01", 4.0),
                OrderCountPoint::new("2024-01-02", 9.0),
            ]
        );
    }

    #[test]
    fn empty_payloads_decode_to_no_samples() {
        assert_eq!(decode_series(json!([])).unwrap(), vec![]);
        assert_eq!(decode_series(json!({})).unwrap(), vec![]);
    }

    #[test]
    fn rejects_non_numeric_counts() {
        let payload = json!([{"ts": "2024-01-01", "count": "lots"}]);
        let err = decode_series(payload).unwrap_err();
        assert!(matches!(err, SeriesError::NonNumericCount { index: 0, .. }));

        let payload = json!({"2024-01-01": null});
        let err = decode_series(payload).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::NonNumericKeyedCount { ref key, .. } if key == "2024-01-01"
        ));
    }

    #[test]
    fn rejects_non_finite_count_strings() {
        for bad in ["NaN", "inf", "Infinity", "-inf"] {
            let payload = json!([{"ts": "2024-01-01", "count": bad}]);
            let err = decode_series(payload).unwrap_err();
            assert!(matches!(err, SeriesError::NonNumericCount { index: 0, .. }));
        }

        let err = decode_series(json!({"2024-01-01": "Infinity"})).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::NonNumericKeyedCount { ref key, .. } if key == "2024-01-01"
        ));
    }

    #[test]
    fn rejects_samples_with_missing_fields() {
        let payload = json!([{"count": 3}]);
        let err = decode_series(payload).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::MissingField {
                index: 0,
                field: "ts"
            }
        ));

        let payload = json!([{"ts": "2024-01-01"}]);
        let err = decode_series(payload).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::MissingField {
                index: 0,
                field: "count"
            }
        ));
    }

    #[test]
    fn rejects_unrecognized_payload_shapes() {
        for payload in [json!("orders"), json!(42), json!(null), json!([1, 2, 3])] {
            let err = decode_series(payload).unwrap_err();
            assert!(matches!(err, SeriesError::UnrecognizedShape));
        }
    }

    #[test]
    fn sums_sample_counts() {
        let points = vec![
            OrderCountPoint::new("a", 1.5),
            OrderCountPoint::new("b", 2.5),
            OrderCountPoint::new("c", 6.0),
        ];
        assert_eq!(sum_series(&points), 10.0);
        assert_eq!(sum_series(&[]), 0.0);
    }
}
