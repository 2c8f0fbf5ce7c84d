//! Team stat catalog
//!
//! Stat names and the numeric site ids used in stat page URLs.
//! Ids come from the NCAA site's stat selection dropdown.

/// One named statistic and its site identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatDef {
    pub name: &'static str,
    pub site_id: u32,
}

/// All team stats to scrape, in display order.
pub fn team_stats() -> Vec<StatDef> {
    [
        ("Scoring Offense", 56),
        ("Goals Against Average", 58),
        ("Shots Per Game", 984),
        ("Shutout Percentage", 59),
        ("Save Percentage", 424),
        ("Points Per Game", 95),
        ("Assists Per Game", 94),
        ("Win-Loss-Tied Percentage", 60),
        ("Fouls Per Game", 547),
        ("Corner Kicks Per Game", 1176),
        ("Yellow Cards", 549),
        ("Goal Differential", 1263),
        ("Penalty Kicks", 1208),
        ("Red Cards", 551),
        ("Saves per Game", 93),
        ("Shot Accuracy", 1203),
        ("Shots on Goal Per Game", 986),
        ("Total Assists", 910),
        ("Total Goals", 914),
        ("Total Points", 915),
    ]
    .into_iter()
    .map(|(name, site_id)| StatDef { name, site_id })
    .collect()
}
