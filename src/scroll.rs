use serde::{Deserialize, Serialize};

/// Offsets arrive as small relative units; the multiplier turns them into a
/// readable scroll delta.
pub const SCROLL_MULTIPLIER: f64 = 10.0;

/// The scrollable content region. The height metrics come from the host
/// layout; the dispatcher only moves `scroll_top`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScrollRegion {
    pub scroll_height: f64,
    pub client_height: f64,
    pub scroll_top: f64,
}

impl ScrollRegion {
    pub fn set_metrics(&mut self, scroll_height: f64, client_height: f64) {
        self.scroll_height = scroll_height;
        self.client_height = client_height;
    }

    pub fn max_scroll(&self) -> f64 {
        self.scroll_height - self.client_height
    }

    /// Maps a relative offset to an absolute position, clamped to the top of
    /// the scroll range. There is deliberately no lower clamp.
    pub fn handle_scroll(&mut self, offset: f64) {
        self.scroll_top = (offset * SCROLL_MULTIPLIER).min(self.max_scroll());
    }
}
