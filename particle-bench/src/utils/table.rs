//! Table formatting utilities

use prettytable::{Cell, Row, Table};

/// Create a table with bold headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        headers.iter().map(|h| Cell::new(h).style_spec("b")).collect(),
    ));
    table
}

/// Add a name / value row, right-aligning the value
pub fn add_field_row(table: &mut Table, name: &str, value: impl ToString) {
    table.add_row(Row::new(vec![
        Cell::new(name),
        Cell::new(&value.to_string()).style_spec("r"),
    ]));
}

/// Build a two-column name / value table
pub fn field_table<I, V>(headers: [&str; 2], fields: I) -> Table
where
    I: IntoIterator<Item = (&'static str, V)>,
    V: ToString,
{
    let mut table = create_table(&headers);
    for (name, value) in fields {
        add_field_row(&mut table, name, value);
    }
    table
}
