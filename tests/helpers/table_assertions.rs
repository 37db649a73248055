//! Definition table assertion helpers.

use gtkcolor::DefinitionTable;

/// Assert `name` resolves to exactly `expected`.
pub fn assert_defined(table: &DefinitionTable, name: &str, expected: &str) {
    assert_eq!(
        table.get(name),
        Some(expected),
        "Expected @{} = {}, table: {:?}",
        name,
        expected,
        table.iter().collect::<Vec<_>>()
    );
}

/// Assert the table holds exactly these entries, in any order.
pub fn assert_table_eq(table: &DefinitionTable, expected: &[(&str, &str)]) {
    let mut actual: Vec<_> = table.iter().collect();
    let mut expected = expected.to_vec();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected);
}
