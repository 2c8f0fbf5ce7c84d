//! Fixed-size worker pool over the stat catalog
//!
//! Workers share one HTTP client and pull stats off an atomic cursor.
//! Results flow back over a channel to the submitting thread, which is the
//! sole consumer and performs every merge itself, so the master table
//! needs no locking.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use super::stat::{scrape_stat, StatOutcome};
use crate::catalog::StatDef;
use crate::table::MasterTable;
use crate::{Config, Result};

/// Outcome of a full scrape run.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// Wide team table; `None` when no stat produced a table.
    pub master: Option<MasterTable>,
    /// Stats that produced nothing, with error text where one was raised.
    pub failed: Vec<String>,
    /// Stats whose metric column was entirely empty.
    pub null_stats: Vec<String>,
}

/// Scrape every stat in the catalog and merge the results.
///
/// One task per stat runs on a pool of `config.scrape.workers` threads.
/// Completions arrive in completion order, not submission order; the final
/// table is the same either way since the outer join is keyed on the team
/// name.
pub fn scrape_all(config: &Config, stats: Vec<StatDef>) -> Result<ScrapeReport> {
    let client = super::build_client(&config.scrape)?;
    let total = stats.len();

    let stats = Arc::new(stats);
    let cursor = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel::<(&'static str, Result<StatOutcome>)>();

    let workers = config.scrape.workers.min(total).max(1);
    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let stats = Arc::clone(&stats);
        let cursor = Arc::clone(&cursor);
        let tx = tx.clone();
        let client = client.clone();
        let scrape_config = config.scrape.clone();

        handles.push(thread::spawn(move || loop {
            let i = cursor.fetch_add(1, Ordering::Relaxed);
            if i >= stats.len() {
                break;
            }
            let stat = stats[i];
            let result = scrape_stat(&client, &scrape_config, &stat);
            if tx.send((stat.name, result)).is_err() {
                break;
            }
        }));
    }
    drop(tx); // main thread is sole receiver now

    let mut report = ScrapeReport::default();
    let mut master = MasterTable::new();
    let mut done = 0usize;

    for (name, result) in rx {
        record(&mut report, &mut master, name, result);
        done += 1;
        println!("[{}/{}] Processed stat: {}", done, total, name);
    }

    for handle in handles {
        let _ = handle.join();
    }

    if !master.is_empty() {
        report.master = Some(master);
    }
    Ok(report)
}

/// Route one stat's outcome into the master table or the summary lists.
fn record(
    report: &mut ScrapeReport,
    master: &mut MasterTable,
    name: &str,
    result: Result<StatOutcome>,
) {
    match result {
        Ok(StatOutcome::Table(table)) => master.outer_merge(table),
        Ok(StatOutcome::AllNull(table)) => {
            log::warn!("{} has no values in its metric column", name);
            report.null_stats.push(name.to_string());
            master.outer_merge(table);
        }
        Ok(StatOutcome::NoData) => {
            log::warn!("{} produced no data", name);
            report.failed.push(name.to_string());
        }
        Err(e) => {
            log::warn!("{} failed: {}", name, e);
            report.failed.push(format!("{} (error: {})", name, e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::StatTable;
    use crate::StatsError;

    fn stat_table(name: &str, rows: &[(&str, Option<&str>)]) -> StatTable {
        let mut table = StatTable::new(name);
        for (team, value) in rows {
            table.push(team.to_string(), value.map(str::to_string));
        }
        table
    }

    #[test]
    fn test_record_routes_outcomes() {
        let mut report = ScrapeReport::default();
        let mut master = MasterTable::new();

        record(
            &mut report,
            &mut master,
            "Total Goals",
            Ok(StatOutcome::Table(stat_table(
                "Total Goals",
                &[("TeamA", Some("10"))],
            ))),
        );
        record(
            &mut report,
            &mut master,
            "Penalty Kicks",
            Ok(StatOutcome::AllNull(stat_table(
                "Penalty Kicks",
                &[("TeamB", None)],
            ))),
        );
        record(&mut report, &mut master, "Shot Accuracy", Ok(StatOutcome::NoData));

        assert_eq!(master.columns(), ["Total Goals", "Penalty Kicks"]);
        assert_eq!(master.teams(), ["TeamA", "TeamB"]);
        assert_eq!(report.null_stats, ["Penalty Kicks"]);
        assert_eq!(report.failed, ["Shot Accuracy"]);
    }

    #[test]
    fn test_record_isolates_errors() {
        let mut report = ScrapeReport::default();
        let mut master = MasterTable::new();

        record(
            &mut report,
            &mut master,
            "Red Cards",
            Err(StatsError::Config("connection refused".to_string())),
        );
        record(
            &mut report,
            &mut master,
            "Total Goals",
            Ok(StatOutcome::Table(stat_table(
                "Total Goals",
                &[("TeamA", Some("10"))],
            ))),
        );

        assert_eq!(
            report.failed,
            ["Red Cards (error: Configuration error: connection refused)"]
        );
        assert_eq!(master.columns(), ["Total Goals"]);
    }

    #[test]
    fn test_failed_stat_has_no_column() {
        let mut report = ScrapeReport::default();
        let mut master = MasterTable::new();

        record(&mut report, &mut master, "Saves per Game", Ok(StatOutcome::NoData));

        assert!(master.is_empty());
        assert!(master.columns().is_empty());
        assert_eq!(report.failed, ["Saves per Game"]);
    }
}
