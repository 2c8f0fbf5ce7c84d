//! Stat and master tables
//!
//! A [`StatTable`] holds one stat's (team, value) pairs. The [`MasterTable`]
//! outer-joins stat tables on the team name into one wide table and writes
//! it out as CSV.

use std::collections::HashMap;
use std::path::Path;

use crate::Result;

/// Two-column table for a single stat: team name plus metric value.
#[derive(Debug, Clone)]
pub struct StatTable {
    stat_name: String,
    rows: Vec<(String, Option<String>)>,
}

impl StatTable {
    pub fn new(stat_name: impl Into<String>) -> Self {
        StatTable {
            stat_name: stat_name.into(),
            rows: Vec::new(),
        }
    }

    pub fn stat_name(&self) -> &str {
        &self.stat_name
    }

    pub fn push(&mut self, team: String, value: Option<String>) {
        self.rows.push((team, value));
    }

    pub fn rows(&self) -> &[(String, Option<String>)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when every metric value is missing or blank.
    pub fn is_all_null(&self) -> bool {
        self.rows
            .iter()
            .all(|(_, v)| v.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

/// Wide team table built by repeated outer joins on the team name.
///
/// Teams keep first-seen order and columns keep merge order. Cell values
/// are invariant to the order in which stat tables are merged.
#[derive(Debug, Clone, Default)]
pub struct MasterTable {
    columns: Vec<String>,
    teams: Vec<String>,
    rows: HashMap<String, Vec<Option<String>>>,
}

impl MasterTable {
    pub fn new() -> Self {
        MasterTable::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Cell value for a (team, stat) pair, if present and non-missing.
    pub fn value(&self, team: &str, stat: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c == stat)?;
        self.rows.get(team)?.get(col)?.as_deref()
    }

    /// Outer-join a stat table on the team column.
    ///
    /// The master team set becomes the union of both team sets: teams
    /// missing from the incoming table get a missing value in the new
    /// column, new teams get missing values in all existing columns.
    pub fn outer_merge(&mut self, table: StatTable) {
        let width = self.columns.len();
        self.columns.push(table.stat_name);

        for row in self.rows.values_mut() {
            row.push(None);
        }
        for (team, value) in table.rows {
            match self.rows.get_mut(&team) {
                Some(row) => row[width] = value,
                None => {
                    let mut row = vec![None; width];
                    row.push(value);
                    self.teams.push(team.clone());
                    self.rows.insert(team, row);
                }
            }
        }
    }

    /// Write the table as CSV with a `Team,<stat1>,...` header row.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        self.write_to(&mut writer)?;
        Ok(())
    }

    fn write_to<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<()> {
        let mut header = Vec::with_capacity(self.columns.len() + 1);
        header.push("Team");
        header.extend(self.columns.iter().map(String::as_str));
        writer.write_record(&header)?;

        for team in &self.teams {
            let row = &self.rows[team];
            let mut record = Vec::with_capacity(row.len() + 1);
            record.push(team.as_str());
            record.extend(row.iter().map(|v| v.as_deref().unwrap_or("")));
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
