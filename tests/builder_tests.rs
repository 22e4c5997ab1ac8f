use multitable::{
    value, ColorChoice, MultiTable, RenderOptions, Row, TreeBuilder, Value,
};

fn plain_options() -> RenderOptions {
    RenderOptions::new().with_color(ColorChoice::Off)
}

fn build(title: Option<&str>, value: &Value) -> (MultiTable, bool) {
    let mut table = MultiTable::new(plain_options());
    let rendered = TreeBuilder::new(&mut table).build(title, value, 0);
    (table, rendered)
}

fn data_rows(table: &MultiTable) -> Vec<Vec<String>> {
    table
        .sections()
        .iter()
        .flat_map(|s| s.rows())
        .filter(|r| !r.is_header())
        .map(|r| r.cells().to_vec())
        .collect()
}

#[test]
fn test_scenario_single_field_with_nested_tags() {
    // {"Name": "x", "Tags": [...]} becomes a "label | value" row plus a
    // nested Tags table one level deeper.
    let data = value!({
        "Name": "x",
        "Tags": [
            {"Key": "a", "Value": "1"},
            {"Key": "b", "Value": "2"}
        ]
    });

    let (table, rendered) = build(Some("Instance"), &data);
    assert!(rendered);

    let sections = table.sections();
    assert_eq!(sections.len(), 2);

    assert_eq!(sections[0].title(), Some("Instance"));
    assert_eq!(sections[0].indent_level(), 0);
    assert_eq!(
        sections[0].rows(),
        &[Row::Data(vec!["Name".to_string(), "x".to_string()])]
    );

    assert_eq!(sections[1].title(), Some("Tags"));
    assert_eq!(sections[1].indent_level(), 1);
    assert_eq!(
        sections[1].rows(),
        &[
            Row::Header(vec!["Key".to_string(), "Value".to_string()]),
            Row::Data(vec!["a".to_string(), "1".to_string()]),
            Row::Data(vec!["b".to_string(), "2".to_string()]),
        ]
    );
}

#[test]
fn test_scenario_record_list_with_partial_structural_key() {
    // Record 2 carries a structural key absent from record 1, so the
    // second record re-opens the section with the header repeated and its
    // sub-table nested underneath.
    let data = value!([
        {"Id": 1},
        {"Id": 2, "Extra": {"k": "v"}}
    ]);

    let (table, rendered) = build(Some("Records"), &data);
    assert!(rendered);

    let sections = table.sections();
    assert_eq!(sections.len(), 3);

    assert_eq!(sections[0].title(), Some("Records"));
    assert_eq!(
        sections[0].rows(),
        &[
            Row::Header(vec!["Id".to_string()]),
            Row::Data(vec!["1".to_string()]),
        ]
    );

    assert_eq!(sections[1].title(), Some("Records"));
    assert_eq!(
        sections[1].rows(),
        &[
            Row::Header(vec!["Id".to_string()]),
            Row::Data(vec!["2".to_string()]),
        ]
    );

    assert_eq!(sections[2].title(), Some("Extra"));
    assert_eq!(sections[2].indent_level(), 1);
    assert_eq!(
        sections[2].rows(),
        &[Row::Data(vec!["k".to_string(), "v".to_string()])]
    );
}

#[test]
fn test_scenario_empty_list_renders_nothing() {
    let (table, rendered) = build(Some("Anything"), &value!([]));
    assert!(!rendered);
    assert!(table.is_empty());
}

#[test]
fn test_header_is_union_of_scalar_keys() {
    let data = value!([
        {"Name": "a", "Id": 1},
        {"Id": 2, "State": "running"}
    ]);

    let (table, _) = build(Some("Items"), &data);
    let sections = table.sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(
        sections[0].rows()[0],
        Row::Header(vec![
            "Id".to_string(),
            "Name".to_string(),
            "State".to_string()
        ])
    );
    // Missing cells fall back to the empty string.
    assert_eq!(
        sections[0].rows()[1],
        Row::Data(vec!["1".to_string(), "a".to_string(), String::new()])
    );
    assert_eq!(
        sections[0].rows()[2],
        Row::Data(vec!["2".to_string(), String::new(), "running".to_string()])
    );
}

#[test]
fn test_row_count_matches_record_count() {
    let data = value!([
        {"Id": 1},
        {"Id": 2},
        {"Id": 3},
        {"Id": 4}
    ]);
    let (table, _) = build(Some("Items"), &data);
    assert_eq!(data_rows(&table).len(), 4);
}

#[test]
fn test_no_reopen_without_structural_keys() {
    // The re-open behavior triggers only when the record list has
    // structural keys; flat record lists stay in one section.
    let data = value!([
        {"Id": 1, "Name": "a"},
        {"Id": 2, "Name": "b"},
        {"Id": 3, "Name": "c"}
    ]);
    let (table, _) = build(Some("Items"), &data);
    assert_eq!(table.sections().len(), 1);
}

#[test]
fn test_reopen_even_when_later_record_lacks_structural_key() {
    // One structural key anywhere in the list is enough: every record
    // after the first re-opens the section, including records that do
    // not themselves carry the key.
    let data = value!([
        {"Id": 1, "Nested": {"k": "v"}},
        {"Id": 2},
        {"Id": 3}
    ]);
    let (table, _) = build(Some("Items"), &data);
    let titles: Vec<_> = table.sections().iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec![
            Some("Items"),
            Some("Nested"),
            Some("Items"),
            Some("Items")
        ]
    );
}

#[test]
fn test_single_record_with_structural_key_does_not_reopen() {
    let data = value!([
        {"Id": 1, "Nested": {"k": "v"}}
    ]);
    let (table, _) = build(Some("Items"), &data);
    let titles: Vec<_> = table.sections().iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec![Some("Items"), Some("Nested")]);
}

#[test]
fn test_mapping_with_multiple_scalar_keys() {
    let data = value!({"State": "running", "Id": "i-1", "Zone": "us-east-1a"});
    let (table, _) = build(Some("Instance"), &data);
    let rows = table.sections()[0].rows();
    assert_eq!(
        rows,
        &[
            Row::Header(vec![
                "Id".to_string(),
                "State".to_string(),
                "Zone".to_string()
            ]),
            Row::Data(vec![
                "i-1".to_string(),
                "running".to_string(),
                "us-east-1a".to_string()
            ]),
        ]
    );
}

#[test]
fn test_mapping_with_only_structural_keys() {
    // No scalar keys: no header, no data row, straight to recursion.
    let data = value!({"Tags": [{"Key": "a", "Value": "1"}]});
    let (table, _) = build(Some("Instance"), &data);
    let sections = table.sections();
    assert_eq!(sections.len(), 2);
    assert!(sections[0].rows().is_empty());
    assert_eq!(sections[1].title(), Some("Tags"));
}

#[test]
fn test_empty_sub_values_propagate_at_every_depth() {
    let data = value!({
        "Name": "x",
        "Empty": [],
        "AlsoEmpty": {},
        "Deep": {"Inner": []}
    });
    let (table, _) = build(Some("Instance"), &data);
    let titles: Vec<_> = table.sections().iter().map(|s| s.title()).collect();
    // "Deep" itself is non-empty (it has a key) so its section opens, but
    // the empty "Inner" below it does not.
    assert_eq!(titles, vec![Some("Instance"), Some("Deep")]);
}

#[test]
fn test_mixed_sequence_classification() {
    let data = value!([
        "scalar",
        7,
        ["a", "b"],
        {"x": 1, "y": 2},
        {"deep": {"k": "v"}}
    ]);
    let (table, _) = build(Some("Mixed"), &data);
    let rows = data_rows(&table);
    assert_eq!(
        rows,
        vec![
            vec!["scalar".to_string()],
            vec!["7".to_string()],
            vec!["a".to_string(), "b".to_string()],
            vec!["1".to_string(), "2".to_string()],
            vec!["k".to_string(), "v".to_string()],
        ]
    );
}

#[test]
fn test_mixed_sequence_recursion_keeps_indent() {
    let data = value!([
        "top",
        [{"Id": 1, "Sub": {"k": "v"}}]
    ]);
    let (table, _) = build(Some("Mixed"), &data);
    // The record list recursed into with no title lands in the current
    // section at the same indent; only genuine nesting goes deeper.
    let indents: Vec<_> = table
        .sections()
        .iter()
        .map(|s| (s.title(), s.indent_level()))
        .collect();
    assert_eq!(indents, vec![(Some("Mixed"), 0), (Some("Sub"), 1)]);
}

#[test]
fn test_determinism_under_key_reordering() {
    let forward = value!({"a": 1, "b": 2, "c": [{"k": "v"}]});
    let backward = value!({"c": [{"k": "v"}], "b": 2, "a": 1});

    let (table_f, _) = build(Some("T"), &forward);
    let (table_b, _) = build(Some("T"), &backward);

    let rows_f: Vec<_> = table_f.sections().iter().map(|s| s.rows()).collect();
    let rows_b: Vec<_> = table_b.sections().iter().map(|s| s.rows()).collect();
    assert_eq!(rows_f, rows_b);
}

#[test]
fn test_key_scalar_in_one_record_structural_in_another() {
    // "Extra" is a header column (it is scalar in record 1) and also a
    // structural key (it is a mapping in record 2); both roles apply.
    let data = value!([
        {"Extra": "plain"},
        {"Extra": {"k": "v"}}
    ]);
    let (table, _) = build(Some("Items"), &data);
    let sections = table.sections();
    assert_eq!(sections[0].rows()[0], Row::Header(vec!["Extra".to_string()]));
    assert_eq!(sections[0].rows()[1], Row::Data(vec!["plain".to_string()]));
    let titles: Vec<_> = sections.iter().map(|s| s.title()).collect();
    assert!(titles.contains(&Some("Extra")));
}

#[test]
fn test_builder_reports_not_rendered_for_falsy_scalars() {
    for empty in [
        Value::Null,
        Value::from(false),
        Value::from(0),
        Value::from(""),
    ] {
        let (table, rendered) = build(Some("T"), &empty);
        assert!(!rendered, "expected {:?} to render nothing", empty);
        assert!(table.is_empty());
    }
}
