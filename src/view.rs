use crate::message::{JobConfig, JobCounts, Player};
use crate::state::DisplayState;
use serde::{Deserialize, Serialize};

/// Ping severity class applied to the ping cell of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PingClass {
    Normal,
    Warning,
    Danger,
}

impl PingClass {
    /// CSS class for the cell; normal pings keep the stylesheet default.
    pub fn as_class(&self) -> &'static str {
        match self {
            PingClass::Normal => "",
            PingClass::Warning => "ping-warning",
            PingClass::Danger => "ping-danger",
        }
    }
}

pub fn ping_class(ping: u32) -> PingClass {
    if ping < 100 {
        PingClass::Normal
    } else if ping < 200 {
        PingClass::Warning
    } else {
        PingClass::Danger
    }
}

/// Inline job glyph shown next to a player name when the dedicated job
/// panel is not up (non-large layouts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobIcon {
    pub glyph: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: u32,
    pub name: String,
    pub job_icon: Option<JobIcon>,
    pub ping: u32,
    pub ping_class: PingClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobEntry {
    pub glyph: String,
    pub color: String,
    pub text: String,
}

/// The aggregate job-occupancy panel, one entry per configured job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPanel {
    pub entries: Vec<JobEntry>,
}

impl JobPanel {
    /// Entries follow the config order, never the counts map. A job the
    /// counts never mention shows as zero.
    pub fn build(configs: &[JobConfig], counts: &JobCounts) -> Self {
        let entries = configs
            .iter()
            .map(|job| {
                let count = counts.get(&job.name).copied().unwrap_or(0);
                JobEntry {
                    glyph: job.icon.clone(),
                    color: job.color.clone(),
                    text: format!("{} {}", count, job.label),
                }
            })
            .collect();
        Self { entries }
    }
}

/// The visible tree the dispatcher keeps in sync with the display state.
/// Rows and occupancy are rebuilt wholesale on every show/update; the job
/// panel node exists only while jobs are displayable.
#[derive(Debug, Serialize, Deserialize)]
pub struct ViewTree {
    pub occupancy: String,
    pub rows: Vec<PlayerRow>,
    pub job_panel: Option<JobPanel>,
    pub footer: String,
}

impl Default for ViewTree {
    fn default() -> Self {
        Self {
            occupancy: occupancy_line(0),
            rows: vec![],
            job_panel: None,
            footer: "".to_string(),
        }
    }
}

impl ViewTree {
    pub fn rebuild_player_list(&mut self, players: &[Player], state: &DisplayState) {
        self.occupancy = occupancy_line(players.len());
        self.rows = build_rows(players, state);
    }
}

pub fn occupancy_line(n: usize) -> String {
    if n == 1 {
        "1 Player Online".to_string()
    } else {
        format!("{} Players Online", n)
    }
}

pub fn build_rows(players: &[Player], state: &DisplayState) -> Vec<PlayerRow> {
    players
        .iter()
        .map(|player| {
            // the panel carries the aggregate in large mode, so the inline
            // glyph only appears outside it
            let job_icon = if state.show_jobs && !state.large_mode {
                player
                    .job
                    .as_deref()
                    .and_then(|key| state.job_config(key))
                    .map(|job| JobIcon {
                        glyph: job.icon.clone(),
                        color: job.color.clone(),
                    })
            } else {
                None
            };
            PlayerRow {
                id: player.id,
                name: player.name.clone(),
                job_icon,
                ping: player.ping,
                ping_class: ping_class(player.ping),
            }
        })
        .collect()
}
