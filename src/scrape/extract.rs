//! HTML table extraction

use scraper::{Html, Selector};

/// Header and body rows of the first table on a page, cells trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Extract the first `<table>` in document order.
///
/// The first row's `<th>` cells become the headers and each later row's
/// `<td>` cells become a body row, all trimmed of surrounding whitespace.
/// Returns `None` when the page has no table or the table holds no rows
/// beyond the header.
pub fn extract_table(html: &str) -> Option<RawTable> {
    let document = Html::parse_document(html);
    let table_sel = Selector::parse("table").ok()?;
    let row_sel = Selector::parse("tr").ok()?;
    let th_sel = Selector::parse("th").ok()?;
    let td_sel = Selector::parse("td").ok()?;

    let table = document.select(&table_sel).next()?;
    let rows: Vec<_> = table.select(&row_sel).collect();
    if rows.len() < 2 {
        return None;
    }

    let headers = rows[0]
        .select(&th_sel)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect();

    let body = rows[1..]
        .iter()
        .map(|row| {
            row.select(&td_sel)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect()
        })
        .collect();

    Some(RawTable {
        headers,
        rows: body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <p>Women's Soccer</p>
        <table>
          <tr><th> Rank </th><th>Team</th><th>GP</th><th> Goals </th></tr>
          <tr><td>1</td><td> TeamA </td><td>12</td><td>30</td></tr>
          <tr><td>2</td><td>TeamB</td><td>12</td><td>25</td></tr>
        </table>
        </body></html>"#;

    #[test]
    fn test_extracts_first_table() {
        let table = extract_table(PAGE).unwrap();
        assert_eq!(table.headers, ["Rank", "Team", "GP", "Goals"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], ["1", "TeamA", "12", "30"]);
        assert_eq!(table.rows[1], ["2", "TeamB", "12", "25"]);
    }

    #[test]
    fn test_no_table() {
        assert!(extract_table("<html><body><p>404</p></body></html>").is_none());
    }

    #[test]
    fn test_header_only_table() {
        let html = "<table><tr><th>Team</th><th>Goals</th></tr></table>";
        assert!(extract_table(html).is_none());
    }

    #[test]
    fn test_row_without_cells_is_kept_empty() {
        let html = r#"
            <table>
              <tr><th>Team</th><th>Goals</th></tr>
              <tr></tr>
              <tr><td>TeamA</td><td>3</td></tr>
            </table>"#;
        let table = extract_table(html).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows[0].is_empty());
        assert_eq!(table.rows[1], ["TeamA", "3"]);
    }
}
