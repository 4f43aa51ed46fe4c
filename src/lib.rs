//! Live "who is online" scoreboard overlay. The host pushes JSON messages
//! (show/hide/update/scroll); the crate merges them into an owned display
//! state and projects it into the visible tree.

#[cfg(target_arch = "wasm32")]
use crate::message::Message;
#[cfg(target_arch = "wasm32")]
use crate::state::Scoreboard;
#[cfg(target_arch = "wasm32")]
use extism_pdk::*;

pub mod events;
pub mod message;
pub mod render;
pub mod scroll;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
impl ToBytes<'_> for Scoreboard {
    type Bytes = Vec<u8>;

    fn to_bytes(&self) -> Result<Self::Bytes, Error> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(target_arch = "wasm32")]
impl FromBytesOwned for Scoreboard {
    fn from_bytes_owned(bytes: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(target_arch = "wasm32")]
#[plugin_fn]
pub fn init_overlay(_: ()) -> FnResult<()> {
    var::set("scoreboard", &Scoreboard::new())?;
    Ok(())
}

// debug
#[cfg(target_arch = "wasm32")]
#[plugin_fn]
pub fn get_state(_: ()) -> FnResult<Option<Scoreboard>> {
    Ok(var::get("scoreboard")?)
}

#[cfg(target_arch = "wasm32")]
#[plugin_fn]
pub fn handle_message(Json(message): Json<Message>) -> FnResult<()> {
    let mut board: Scoreboard = var::get("scoreboard")?.unwrap_or_default();
    board.handle(message)?;
    var::set("scoreboard", &board)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
#[plugin_fn]
pub fn render(_: ()) -> FnResult<String> {
    let board: Scoreboard = var::get("scoreboard")?.unwrap_or_default();
    Ok(render::render_scoreboard(&board)?)
}
