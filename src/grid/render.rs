//! HTML fragments for the autocomplete preview pane
//!
//! @module grid/render

use super::Table;

const TD_END: &str = "</td>";

/// Render a table; a row's last cell spans the remaining columns of the widest row
pub fn table_html(table: &Table) -> String {
    let max_cols = table.max_columns();
    let mut html = String::from("<table>");

    for row in table.rows() {
        let last_col = row.len().saturating_sub(1);
        html.push_str("<tr>");
        for (col, cell) in row.iter().enumerate() {
            if col == last_col && col + 1 < max_cols {
                html.push_str(&format!("<td colspan={}>", max_cols - col));
            } else {
                html.push_str("<td>");
            }
            html.push_str(cell);
            html.push_str(TD_END);
        }
        html.push_str("</tr>");
    }

    html.push_str("</table>");
    html
}

/// Render a single row as a one-row table
pub fn row_html(cells: &[String]) -> String {
    let mut html = String::from("<table><tr>");
    for cell in cells {
        html.push_str("<td>");
        html.push_str(cell);
        html.push_str(TD_END);
    }
    html.push_str("</tr></table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_html_colspan_fills_short_rows() {
        let table = Table::from_rows(vec![vec!["script"], vec!["check", "x", "1"]]);
        assert_eq!(
            table_html(&table),
            "<table><tr><td colspan=3>script</td></tr>\
             <tr><td>check</td><td>x</td><td>1</td></tr></table>"
        );
    }

    #[test]
    fn test_row_html() {
        let cells = vec!["$id=".to_string(), "echo".to_string(), "7".to_string()];
        assert_eq!(
            row_html(&cells),
            "<table><tr><td>$id=</td><td>echo</td><td>7</td></tr></table>"
        );
    }
}
