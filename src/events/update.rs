use super::MessageHandler;
use crate::message::{JobConfig, JobCounts, Player};
use crate::state::{Position, Scoreboard};
use crate::view::JobPanel;
use anyhow::Result;

/// Live partial update: merges only the supplied fields, rebuilds the row
/// list, and rebuilds or removes the job panel. Unlike `Show`, the panel is
/// not gated on large mode here.
#[derive(Debug)]
pub struct Update {
    pub players: Vec<Player>,
    pub title: Option<String>,
    pub position: Option<String>,
    pub large_mode: Option<bool>,
    pub show_jobs: Option<bool>,
    pub job_configs: Option<Vec<JobConfig>>,
    pub job_counts: Option<JobCounts>,
}

impl MessageHandler for Update {
    fn on(&self, board: &mut Scoreboard) -> Result<()> {
        let state = &mut board.state;
        if let Some(title) = &self.title {
            state.title = title.clone();
        }
        if let Some(position) = &self.position {
            state.position = Position::parse(position);
        }
        if let Some(large_mode) = self.large_mode {
            state.large_mode = large_mode;
        }
        if let Some(show_jobs) = self.show_jobs {
            state.show_jobs = show_jobs;
        }
        if !state.show_jobs {
            state.job_configs = None;
        } else if self.job_configs.is_some() {
            state.job_configs = self.job_configs.clone();
        }

        board.view.rebuild_player_list(&self.players, &board.state);

        board.view.job_panel = match (&self.job_configs, &self.job_counts) {
            (Some(configs), Some(counts)) if board.state.show_jobs => {
                Some(JobPanel::build(configs, counts))
            }
            _ => None,
        };
        Ok(())
    }
}
