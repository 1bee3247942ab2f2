use flora_table::ingestion::{read_table_from_path, IngestionOptions};
use flora_table::processing::{intersect, select, select_all, sort};
use flora_table::types::{Column, FilterCriterion, SortOrder, Table};
use flora_table::TableError;

fn registry() -> Table {
    read_table_from_path("tests/fixtures/registry.csv", &IngestionOptions::default()).unwrap()
}

fn ids(rows: &[Vec<String>]) -> Vec<&str> {
    rows.iter().map(|r| r[Column::Id.index()].as_str()).collect()
}

#[test]
fn select_by_zone_is_case_insensitive_and_skips_headers() {
    let table = registry();
    let out = select(Column::LandscapingZone.index(), &table, "СЕВЕРНАЯ").unwrap();
    assert_eq!(ids(&out), ["1", "3"]);

    // Only the Russian header row contains this text.
    let err = select(Column::LandscapingZone.index(), &table, "ландшафтная").unwrap_err();
    assert!(matches!(err, TableError::NoMatch { column: 4, .. }));
}

#[test]
fn select_does_not_mutate_table() {
    let table = registry();
    let before = table.clone();
    let _ = select(Column::LocationPlace.index(), &table, "a1").unwrap();
    assert_eq!(table, before);
}

#[test]
fn compound_selection_matches_both_predicates() {
    let table = registry();
    let zone = select(Column::LandscapingZone.index(), &table, "северная").unwrap();
    let period = select(Column::ProsperityPeriod.index(), &table, "май").unwrap();
    assert_eq!(ids(&zone), ["1", "3"]);
    assert_eq!(ids(&period), ["1", "2", "4"]);

    let both = intersect(&zone, &period);
    assert_eq!(ids(&both), ["1"]);

    let via_criteria = select_all(
        &table,
        &[
            FilterCriterion::new(Column::LandscapingZone, "северная"),
            FilterCriterion::new(Column::ProsperityPeriod, "май"),
        ],
    )
    .unwrap();
    assert_eq!(via_criteria, both);
}

#[test]
fn compound_selection_follows_first_selection_order() {
    let table = registry();
    let period = select(Column::ProsperityPeriod.index(), &table, "апрель").unwrap();
    let mut reversed = period.clone();
    reversed.reverse();

    assert_eq!(ids(&intersect(&period, &reversed)), ["2", "3"]);
    assert_eq!(ids(&intersect(&reversed, &period)), ["3", "2"]);
}

#[test]
fn ascending_sort_is_ordinal_on_stripped_latin_name() {
    let mut table = registry();
    sort(&mut table, SortOrder::Ascending).unwrap();
    assert_eq!(ids(table.data_rows()), ["2", "3", "1", "5", "4"]);
    assert_eq!(table.rows[0][0], "ID");
    assert_eq!(table.rows[1][0], "Код");
}

#[test]
fn descending_sort_ignores_case() {
    let mut table = registry();
    sort(&mut table, SortOrder::Descending).unwrap();
    assert_eq!(ids(table.data_rows()), ["4", "5", "1", "3", "2"]);
}

#[test]
fn sorting_headers_only_is_invalid_argument() {
    let mut table = registry();
    table.rows.truncate(2);
    assert!(matches!(
        sort(&mut table, SortOrder::Ascending),
        Err(TableError::InvalidArgument { .. })
    ));
}
