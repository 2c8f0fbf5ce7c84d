//! Paginated scraping of a single stat

use reqwest::blocking::Client;

use super::extract::extract_table;
use super::page::fetch_page;
use crate::catalog::StatDef;
use crate::table::StatTable;
use crate::{Result, ScrapeConfig};

/// Result of scraping one stat.
#[derive(Debug)]
pub enum StatOutcome {
    /// Usable two-column (Team, stat) table.
    Table(StatTable),
    /// Structurally valid table whose metric column is entirely empty.
    AllNull(StatTable),
    /// No rows collected, or the table had no Team column.
    NoData,
}

/// Scrape all pages for one stat and reduce them to a (Team, stat) table.
pub fn scrape_stat(client: &Client, config: &ScrapeConfig, stat: &StatDef) -> Result<StatOutcome> {
    let base_url = config.stat_url(stat.site_id);
    let (headers, all_rows) = collect_pages(|page| {
        let url = page_url(&base_url, page);
        fetch_page(client, &url)
    })?;

    log::debug!("{}: collected {} rows", stat.name, all_rows.len());

    match headers {
        Some(headers) => Ok(build_stat_table(&headers, all_rows, stat.name)),
        None => Ok(StatOutcome::NoData),
    }
}

/// Walk a stat's pages in order until one is absent or has no table rows.
///
/// Headers are captured from the first page only; the table schema is
/// stable across a stat's pages. Rows already accumulated are kept when a
/// later page ends the walk.
fn collect_pages<F>(mut fetch: F) -> Result<(Option<Vec<String>>, Vec<Vec<String>>)>
where
    F: FnMut(u32) -> Result<Option<String>>,
{
    let mut headers: Option<Vec<String>> = None;
    let mut all_rows: Vec<Vec<String>> = Vec::new();
    let mut page = 1u32;

    loop {
        let Some(body) = fetch(page)? else {
            break;
        };
        let Some(table) = extract_table(&body) else {
            break;
        };

        if headers.is_none() {
            headers = Some(table.headers);
        }
        all_rows.extend(table.rows.into_iter().filter(|cells| !cells.is_empty()));
        page += 1;
    }

    Ok((headers, all_rows))
}

/// Page URL for one stat: the bare base URL for page 1, `/p<N>` after.
fn page_url(base: &str, page: u32) -> String {
    if page == 1 {
        base.to_string()
    } else {
        format!("{}/p{}", base, page)
    }
}

/// Reduce raw page rows to the two columns (Team, <stat name>).
///
/// The team comes from the Team header's position and the metric from each
/// row's last cell. No rows or no Team header means the stat is unusable.
pub fn build_stat_table(headers: &[String], rows: Vec<Vec<String>>, stat_name: &str) -> StatOutcome {
    if rows.is_empty() {
        return StatOutcome::NoData;
    }
    let Some(team_idx) = headers.iter().position(|h| h == "Team") else {
        return StatOutcome::NoData;
    };

    let mut table = StatTable::new(stat_name);
    for row in rows {
        let Some(team) = row.get(team_idx) else {
            continue;
        };
        // A row whose last cell is the team cell has no metric value.
        let value = match row.last() {
            Some(v) if row.len() - 1 != team_idx => Some(v.clone()),
            _ => None,
        };
        table.push(team.clone(), value);
    }

    if table.is_empty() {
        StatOutcome::NoData
    } else if table.is_all_null() {
        StatOutcome::AllNull(table)
    } else {
        StatOutcome::Table(table)
    }
}
