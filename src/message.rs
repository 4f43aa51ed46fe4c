use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the player roster. Rosters are replaced wholesale on every
/// show/update, so this type never outlives a single render pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub ping: u32,
    pub job: Option<String>,
}

/// One role/service category supplied by the host. Cached in the display
/// state until replaced or cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub label: String,
    pub icon: String,
    pub color: String,
}

pub type JobCounts = HashMap<String, u32>;

/// Inbound host message, discriminated by the `type` field. Tags the host
/// does not send today deserialize into `Unknown` and are dropped without
/// an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Message {
    #[serde(rename_all = "camelCase")]
    ShowScoreboard {
        #[serde(default)]
        players: Vec<Player>,
        title: Option<String>,
        position: Option<String>,
        large_mode: Option<bool>,
        show_jobs: Option<bool>,
        job_configs: Option<Vec<JobConfig>>,
        job_counts: Option<JobCounts>,
    },
    HideScoreboard,
    #[serde(rename_all = "camelCase")]
    UpdatePlayers {
        #[serde(default)]
        players: Vec<Player>,
        title: Option<String>,
        position: Option<String>,
        large_mode: Option<bool>,
        show_jobs: Option<bool>,
        job_configs: Option<Vec<JobConfig>>,
        job_counts: Option<JobCounts>,
    },
    Scroll {
        offset: f64,
    },
    #[serde(other)]
    Unknown,
}

impl Message {
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
