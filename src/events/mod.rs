use crate::message::Message;
use crate::state::Scoreboard;
use anyhow::Result;

pub mod hide;
pub mod scroll;
pub mod show;
pub mod update;

use crate::events::{hide::Hide, scroll::Scroll, show::Show, update::Update};

pub trait MessageHandler {
    fn on(&self, board: &mut Scoreboard) -> Result<()>;
}

/// Exhaustive routing from message kind to handler. `Unknown` carries every
/// tag newer hosts may send and resolves to an explicit no-op.
pub fn from_message(message: Message) -> Box<dyn MessageHandler> {
    match message {
        Message::ShowScoreboard {
            players,
            title,
            position,
            large_mode,
            show_jobs,
            job_configs,
            job_counts,
        } => Box::new(Show {
            players,
            title,
            position,
            large_mode,
            show_jobs,
            job_configs,
            job_counts,
        }),
        Message::HideScoreboard => Box::new(Hide),
        Message::UpdatePlayers {
            players,
            title,
            position,
            large_mode,
            show_jobs,
            job_configs,
            job_counts,
        } => Box::new(Update {
            players,
            title,
            position,
            large_mode,
            show_jobs,
            job_configs,
            job_counts,
        }),
        Message::Scroll { offset } => Box::new(Scroll { offset }),
        Message::Unknown => Box::new(Ignore),
    }
}

struct Ignore;

impl MessageHandler for Ignore {
    fn on(&self, _board: &mut Scoreboard) -> Result<()> {
        log::debug!("ignoring unrecognized message kind");
        Ok(())
    }
}
