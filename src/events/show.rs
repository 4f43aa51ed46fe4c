use super::MessageHandler;
use crate::message::{JobConfig, JobCounts, Player};
use crate::state::{Position, Scoreboard};
use crate::view::JobPanel;
use anyhow::Result;

pub const CONTROLS_HINT: &str = "Press HOME to close | Arrow keys to scroll";

/// Initial full display: applies every supplied field, rebuilds the whole
/// visible tree. The job panel only comes up here when the large layout is
/// active; live updates are not gated that way (see `Update`).
#[derive(Debug)]
pub struct Show {
    pub players: Vec<Player>,
    pub title: Option<String>,
    pub position: Option<String>,
    pub large_mode: Option<bool>,
    pub show_jobs: Option<bool>,
    pub job_configs: Option<Vec<JobConfig>>,
    pub job_counts: Option<JobCounts>,
}

impl MessageHandler for Show {
    fn on(&self, board: &mut Scoreboard) -> Result<()> {
        let state = &mut board.state;
        state.visible = true;
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
        // a full display re-establishes the config cache or drops it
        if state.show_jobs && self.job_configs.is_some() {
            state.job_configs = self.job_configs.clone();
        } else {
            state.job_configs = None;
        }

        board.view.rebuild_player_list(&self.players, &board.state);

        let displayable = board.state.large_mode && board.state.show_jobs;
        board.view.job_panel = match (&self.job_configs, &self.job_counts) {
            (Some(configs), Some(counts)) if displayable => {
                Some(JobPanel::build(configs, counts))
            }
            _ => None,
        };

        board.view.footer = CONTROLS_HINT.to_string();
        Ok(())
    }
}
