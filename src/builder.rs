//! Tree-to-table building.
//!
//! [`TreeBuilder`] converts one nested-data [`Value`] into sections and
//! rows of a [`MultiTable`], recursively, without a schema. Shapes are
//! classified on the fly:
//!
//! - a sequence whose elements are all mappings becomes a list-of-records
//!   table: one header row over the sorted union of scalar keys, one data
//!   row per record, and a nested sub-table per structural key
//! - any other sequence is laid out element by element
//! - a mapping becomes a header+row pair over its scalar keys (or a single
//!   `label | value` row when only one scalar key exists), with structural
//!   keys expanded into nested sections
//!
//! Key sets are always sorted lexicographically, so column order does not
//! depend on input key order.
//!
//! ## Usage
//!
//! Most users should use [`render_to_string`](crate::render_to_string) or
//! [`render_to_writer`](crate::render_to_writer); the builder is public
//! for callers that want to fill a table from several values before
//! rendering.
//!
//! ```rust
//! use multitable::{value, ColorChoice, MultiTable, RenderOptions, TreeBuilder};
//!
//! let mut table = MultiTable::new(RenderOptions::new().with_color(ColorChoice::Off));
//! let data = value!({"Name": "web-1", "Port": 8080});
//! let rendered = TreeBuilder::new(&mut table).build(Some("Instance"), &data, 0);
//! assert!(rendered);
//! ```

use crate::{Map, MultiTable, Shape, Value};
use std::collections::BTreeSet;

/// Recursive walk that populates a [`MultiTable`] from a [`Value`] tree.
///
/// Holds a mutable handle to the table it fills; every section it opens is
/// appended through that handle, which keeps the walk's side effects in
/// one place.
pub struct TreeBuilder<'a> {
    table: &'a mut MultiTable,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a builder writing into `table`.
    pub fn new(table: &'a mut MultiTable) -> Self {
        TreeBuilder { table }
    }

    /// Lays out `value` under an optional section title.
    ///
    /// Returns `false` without touching the table when `value` is empty
    /// (null, `false`, zero, empty string, empty collection), so callers
    /// can skip a title that would head nothing. Otherwise opens a section
    /// when `title` is given, dispatches on the value's shape, and returns
    /// `true`.
    pub fn build(&mut self, title: Option<&str>, value: &Value, indent_level: usize) -> bool {
        if value.is_empty() {
            return false;
        }
        if title.is_some() {
            self.table.new_section(title, indent_level);
        }
        match value {
            Value::Array(items) => {
                if items.iter().all(Value::is_object) {
                    self.records(items, title, indent_level);
                } else {
                    self.mixed_sequence(items, indent_level);
                }
            }
            Value::Object(fields) => self.mapping(fields, indent_level),
            // A bare scalar contributes nothing beyond the titled section.
            _ => {}
        }
        true
    }

    /// Sequence of mappings: a rectangular list-of-records table.
    ///
    /// The header is the sorted union of scalar keys across all records;
    /// records need not be uniform and missing cells fall back to the
    /// empty string. Structural keys are expanded directly under their
    /// record's row; when the list has structural keys at all, every
    /// record after the first starts a fresh section with the header
    /// repeated, so its nested sub-tables stay grouped under it.
    fn records(&mut self, records: &[Value], title: Option<&str>, indent_level: usize) {
        let (headers, nested) = group_scalar_keys_from_list(records);
        self.table.add_row_header(headers.clone());
        let mut first = true;
        for record in records {
            if let Some(fields) = record.as_object() {
                if !first && !nested.is_empty() {
                    // Record boundary with pending structural keys: re-open
                    // the section under the same title and indent.
                    self.table.new_section(title, indent_level);
                    self.table.add_row_header(headers.clone());
                }
                first = false;
                let row = headers
                    .iter()
                    .map(|header| {
                        fields
                            .get(header)
                            .map(|v| v.to_string())
                            .unwrap_or_default()
                    })
                    .collect();
                self.table.add_row(row);
                for key in &nested {
                    // Not every record carries every structural key.
                    if let Some(sub) = fields.get(key) {
                        self.build(Some(key), sub, indent_level + 1);
                    }
                }
            }
        }
    }

    /// Sequence with non-mapping content, laid out element by element:
    /// scalars become single-cell rows, flat collections become one
    /// multi-cell row, anything deeper recurses untitled at this level.
    fn mixed_sequence(&mut self, items: &[Value], indent_level: usize) {
        for item in items {
            match item {
                Value::Array(elements) => {
                    if elements.iter().all(|e| e.shape() == Shape::Scalar) {
                        self.table
                            .add_row(elements.iter().map(|e| e.to_string()).collect());
                    } else {
                        self.build(None, item, indent_level);
                    }
                }
                Value::Object(fields) => {
                    if fields.values().all(|v| v.shape() == Shape::Scalar) {
                        let mut keys: Vec<&String> = fields.keys().collect();
                        keys.sort();
                        self.table.add_row(
                            keys.iter()
                                .filter_map(|key| fields.get(key.as_str()))
                                .map(|v| v.to_string())
                                .collect(),
                        );
                    } else {
                        self.build(None, item, indent_level);
                    }
                }
                _ => self.table.add_row(vec![item.to_string()]),
            }
        }
    }

    /// Mapping: scalar keys render as a header+row pair (or a single
    /// `label | value` row when exactly one scalar key exists); each
    /// structural key becomes a nested titled section.
    fn mapping(&mut self, fields: &Map, indent_level: usize) {
        let (scalars, nested) = group_scalar_keys(fields);
        if scalars.len() == 1 {
            let key = &scalars[0];
            if let Some(value) = fields.get(key) {
                self.table.add_row(vec![key.clone(), value.to_string()]);
            }
        } else if !scalars.is_empty() {
            self.table.add_row_header(scalars.clone());
            self.table.add_row(
                scalars
                    .iter()
                    .map(|key| {
                        fields
                            .get(key)
                            .map(|v| v.to_string())
                            .unwrap_or_default()
                    })
                    .collect(),
            );
        }
        for key in &nested {
            if let Some(sub) = fields.get(key) {
                self.build(Some(key), sub, indent_level + 1);
            }
        }
    }
}

/// Partitions a mapping's keys into scalar keys and structural keys, both
/// sorted lexicographically.
fn group_scalar_keys(fields: &Map) -> (Vec<String>, Vec<String>) {
    let mut scalars = Vec::new();
    let mut nested = Vec::new();
    for (key, value) in fields.iter() {
        match value.shape() {
            Shape::Scalar => scalars.push(key.clone()),
            Shape::Sequence | Shape::Mapping => nested.push(key.clone()),
        }
    }
    scalars.sort();
    nested.sort();
    (scalars, nested)
}

/// Unions the scalar-key and structural-key partitions across all records
/// of a list. A key that is scalar in one record and structural in another
/// lands in both sets.
fn group_scalar_keys_from_list(records: &[Value]) -> (Vec<String>, Vec<String>) {
    let mut scalars = BTreeSet::new();
    let mut nested = BTreeSet::new();
    for record in records {
        if let Some(fields) = record.as_object() {
            let (record_scalars, record_nested) = group_scalar_keys(fields);
            scalars.extend(record_scalars);
            nested.extend(record_nested);
        }
    }
    (
        scalars.into_iter().collect(),
        nested.into_iter().collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{value, ColorChoice, RenderOptions, Row};

    fn build(title: Option<&str>, value: &Value) -> (MultiTable, bool) {
        let mut table = MultiTable::new(RenderOptions::new().with_color(ColorChoice::Off));
        let rendered = TreeBuilder::new(&mut table).build(title, value, 0);
        (table, rendered)
    }

    #[test]
    fn test_group_scalar_keys_sorted() {
        let data = value!({"b": 1, "a": 2, "z": [1], "c": {"k": 1}});
        let fields = data.as_object().unwrap();
        let (scalars, nested) = group_scalar_keys(fields);
        assert_eq!(scalars, vec!["a", "b"]);
        assert_eq!(nested, vec!["c", "z"]);
    }

    #[test]
    fn test_group_scalar_keys_from_list_union() {
        let data = value!([{"b": 1}, {"a": 2, "c": [3]}]);
        let records = data.as_array().unwrap();
        let (scalars, nested) = group_scalar_keys_from_list(records);
        assert_eq!(scalars, vec!["a", "b"]);
        assert_eq!(nested, vec!["c"]);
    }

    #[test]
    fn test_key_scalar_in_one_record_structural_in_another() {
        let data = value!([{"k": 1}, {"k": [2]}]);
        let records = data.as_array().unwrap();
        let (scalars, nested) = group_scalar_keys_from_list(records);
        assert_eq!(scalars, vec!["k"]);
        assert_eq!(nested, vec!["k"]);
    }

    #[test]
    fn test_empty_value_builds_nothing() {
        for empty in [
            Value::Null,
            value!([]),
            value!({}),
            Value::from(""),
            Value::from(0),
            Value::from(false),
        ] {
            let (table, rendered) = build(Some("Title"), &empty);
            assert!(!rendered);
            assert!(table.is_empty());
        }
    }

    #[test]
    fn test_single_scalar_key_label_row() {
        let data = value!({"Name": "web-1"});
        let (table, rendered) = build(Some("Instance"), &data);
        assert!(rendered);
        let rows = table.sections()[0].rows();
        assert_eq!(
            rows,
            &[Row::Data(vec!["Name".to_string(), "web-1".to_string()])]
        );
    }

    #[test]
    fn test_records_reopen_section_at_boundaries() {
        let data = value!([
            {"Id": 1, "Tags": [{"Key": "a", "Value": "1"}]},
            {"Id": 2, "Tags": [{"Key": "b", "Value": "2"}]}
        ]);
        let (table, _) = build(Some("Items"), &data);
        let titles: Vec<_> = table.sections().iter().map(|s| s.title()).collect();
        // Record 2 re-opens "Items" so its Tags section follows its row.
        assert_eq!(
            titles,
            vec![
                Some("Items"),
                Some("Tags"),
                Some("Items"),
                Some("Tags")
            ]
        );
    }

    #[test]
    fn test_records_without_structural_keys_stay_in_one_section() {
        let data = value!([{"Id": 1}, {"Id": 2}, {"Id": 3}]);
        let (table, _) = build(Some("Items"), &data);
        assert_eq!(table.sections().len(), 1);
        let data_rows = table.sections()[0]
            .rows()
            .iter()
            .filter(|r| !r.is_header())
            .count();
        assert_eq!(data_rows, 3);
    }

    #[test]
    fn test_mixed_sequence_rows() {
        let data = value!([1, "x", [2, 3], {"k": "v"}]);
        let (table, _) = build(Some("Mixed"), &data);
        let rows = table.sections()[0].rows();
        assert_eq!(
            rows,
            &[
                Row::Data(vec!["1".to_string()]),
                Row::Data(vec!["x".to_string()]),
                Row::Data(vec!["2".to_string(), "3".to_string()]),
                Row::Data(vec!["v".to_string()]),
            ]
        );
    }

    #[test]
    fn test_empty_structural_value_emits_no_section() {
        let data = value!({"Name": "x", "Tags": []});
        let (table, rendered) = build(Some("Instance"), &data);
        assert!(rendered);
        assert_eq!(table.sections().len(), 1);
        assert_eq!(table.sections()[0].title(), Some("Instance"));
    }

    #[test]
    fn test_scalar_value_renders_title_only() {
        let (table, rendered) = build(Some("Answer"), &Value::from(42));
        assert!(rendered);
        assert_eq!(table.sections().len(), 1);
        assert!(table.sections()[0].rows().is_empty());
    }
}
