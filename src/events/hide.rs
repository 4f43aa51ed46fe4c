use super::MessageHandler;
use crate::state::Scoreboard;
use anyhow::Result;

/// Hides the overlay without touching the rest of the state, so a later
/// bare show reuses the last known layout.
#[derive(Debug)]
pub struct Hide;

impl MessageHandler for Hide {
    fn on(&self, board: &mut Scoreboard) -> Result<()> {
        board.state.visible = false;
        Ok(())
    }
}
