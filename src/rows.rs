use crate::snmp::Variable;

/// Align per-subtree result sequences into rows by position.
///
/// `results` holds one (root identifier, sequence) entry per configured walk,
/// in configuration order. Row `i` carries the i-th variable of every
/// sequence long enough to have one, still in configuration order; exhausted
/// sequences contribute nothing, with no placeholder. The number of rows is
/// the longest sequence's length, zero when nothing was configured or every
/// walk came back empty.
pub fn aligned_rows<'a>(
    results: &'a [(String, Vec<Variable>)],
) -> impl Iterator<Item = Vec<&'a Variable>> + 'a {
    let row_count = results
        .iter()
        .map(|(_, sequence)| sequence.len())
        .max()
        .unwrap_or(0);

    (0..row_count).map(move |index| {
        results
            .iter()
            .filter_map(move |(_, sequence)| sequence.get(index))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snmp::ScalarValue;

    fn seq(root: &str, values: &[&str]) -> (String, Vec<Variable>) {
        let sequence = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                Variable::new(
                    format!("{}.{}", root, i + 1),
                    ScalarValue::Text((*v).to_string()),
                )
            })
            .collect();
        (root.to_string(), sequence)
    }

    fn values(row: &[&Variable]) -> Vec<String> {
        row.iter().map(|v| v.value.to_string()).collect()
    }

    #[test]
    fn uneven_sequences_align_by_index() {
        let results = vec![seq("1.3.1", &["a", "b", "c"]), seq("1.3.2", &["p", "q"])];
        let rows: Vec<_> = aligned_rows(&results).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(values(&rows[0]), ["a", "p"]);
        assert_eq!(values(&rows[1]), ["b", "q"]);
        assert_eq!(values(&rows[2]), ["c"]);
    }

    #[test]
    fn fields_follow_configuration_order() {
        let results = vec![seq("2.2", &["second"]), seq("1.1", &["first"])];
        let rows: Vec<_> = aligned_rows(&results).collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0].name, "2.2.1");
        assert_eq!(rows[0][1].name, "1.1.1");
    }

    #[test]
    fn no_sequences_no_rows() {
        let results: Vec<(String, Vec<Variable>)> = Vec::new();
        assert_eq!(aligned_rows(&results).count(), 0);
    }

    #[test]
    fn all_empty_sequences_no_rows() {
        let results = vec![seq("1.3.1", &[]), seq("1.3.2", &[])];
        assert_eq!(aligned_rows(&results).count(), 0);
    }

    #[test]
    fn single_sequence_degenerates_to_one_field_per_row() {
        let results = vec![seq("1.3.1", &["a", "b"])];
        let rows: Vec<_> = aligned_rows(&results).collect();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 1));
    }

    #[test]
    fn row_width_shrinks_as_sequences_run_out() {
        let results = vec![
            seq("1.3.1", &["a"]),
            seq("1.3.2", &["p", "q"]),
            seq("1.3.3", &["x", "y", "z"]),
        ];
        let widths: Vec<_> = aligned_rows(&results).map(|row| row.len()).collect();

        assert_eq!(widths, [3, 2, 1]);
    }
}
