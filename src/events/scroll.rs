use super::MessageHandler;
use crate::state::Scoreboard;
use anyhow::Result;

/// Moves the content region; display state is disjoint and never touched.
#[derive(Debug)]
pub struct Scroll {
    pub offset: f64,
}

impl MessageHandler for Scroll {
    fn on(&self, board: &mut Scoreboard) -> Result<()> {
        board.content.handle_scroll(self.offset);
        Ok(())
    }
}
