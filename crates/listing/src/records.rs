use model::core::identifiers::{Identified, Named};

/// Next id for a locally-created row: one past the largest taken id, `1`
/// for an empty collection, saturating at `u64::MAX`. Ids are
/// backend-assigned and assumed unique; no gap reuse.
pub fn next_id<T: Identified>(records: &[T]) -> u64 {
    records
        .iter()
        .map(|r| r.id())
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Case-insensitive name search over a record collection. A blank or
/// whitespace-only query keeps every record.
pub fn filter_by_name<'a, T: Named>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let query = query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| query.is_empty() || r.name().to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::parameter::{Parameter, ParameterKind};

    fn params(ids: &[u64]) -> Vec<Parameter> {
        ids.iter()
            .map(|&id| Parameter::new(id, format!("Parameter {id}"), ParameterKind::Int))
            .collect()
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&params(&[])), 1);
    }

    #[test]
    fn next_id_is_one_past_the_max() {
        assert_eq!(next_id(&params(&[3, 7, 2])), 8);
    }

    #[test]
    fn next_id_saturates_at_the_id_ceiling() {
        assert_eq!(next_id(&params(&[u64::MAX])), u64::MAX);
    }

    #[test]
    fn name_search_is_case_insensitive_and_trimmed() {
        let rows = vec![
            Parameter::new(1, "Timeout", ParameterKind::Int),
            Parameter::new(2, "Retry count", ParameterKind::Int),
            Parameter::new(3, "timeout window", ParameterKind::Int),
        ];

        let hits = filter_by_name(&rows, "  TIMEOUT ");
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Timeout", "timeout window"]);
    }

    #[test]
    fn blank_query_keeps_every_record() {
        let rows = params(&[1, 2, 3]);
        assert_eq!(filter_by_name(&rows, "   ").len(), 3);
        assert_eq!(filter_by_name(&rows, "").len(), 3);
    }
}
