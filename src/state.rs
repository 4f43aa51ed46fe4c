use crate::events;
use crate::message::{JobConfig, Message};
use crate::scroll::ScrollRegion;
use crate::view::ViewTree;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Position {
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "center")]
    #[default]
    Center,
    #[serde(rename = "right")]
    Right,
}

impl Position {
    /// Anything outside the closed set degrades to center.
    pub fn parse(value: &str) -> Self {
        match value {
            "left" => Position::Left,
            "center" => Position::Center,
            "right" => Position::Right,
            _ => Position::Center,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Left => write!(f, "left"),
            Position::Center => write!(f, "center"),
            Position::Right => write!(f, "right"),
        }
    }
}

/// The single position/mode class active on the overlay root. Large mode
/// always wins over any requested position; resolving to one value is what
/// keeps stale position classes from coexisting with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    Large,
    Position(Position),
}

impl LayoutClass {
    pub fn resolve(position: Option<&str>, large_mode: bool) -> Self {
        if large_mode {
            LayoutClass::Large
        } else {
            LayoutClass::Position(position.map(Position::parse).unwrap_or_default())
        }
    }
}

impl std::fmt::Display for LayoutClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutClass::Large => write!(f, "large-mode"),
            LayoutClass::Position(position) => write!(f, "position-{}", position),
        }
    }
}

/// Layout and job settings that survive between messages. A field a message
/// does not carry keeps its previous value; only an explicit field replaces
/// it.
#[derive(Debug, Serialize, Deserialize)]
pub struct DisplayState {
    pub visible: bool,
    pub title: String,
    pub position: Position,
    pub large_mode: bool,
    pub show_jobs: bool,
    pub job_configs: Option<Vec<JobConfig>>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            visible: false,
            title: "Scoreboard".to_string(),
            position: Position::Center,
            large_mode: false,
            show_jobs: false,
            job_configs: None,
        }
    }
}

impl DisplayState {
    pub fn layout(&self) -> LayoutClass {
        if self.large_mode {
            LayoutClass::Large
        } else {
            LayoutClass::Position(self.position)
        }
    }

    pub fn job_config(&self, key: &str) -> Option<&JobConfig> {
        self.job_configs
            .as_deref()
            .and_then(|configs| configs.iter().find(|job| job.name == key))
    }
}

/// The overlay root: display state, the visible tree, and the scrollable
/// content region. One instance per overlay, constructed explicitly so
/// tests never need a live visual tree.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub state: DisplayState,
    pub view: ViewTree,
    pub content: ScrollRegion,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages are handled synchronously in arrival order; each runs to
    /// completion before the next is looked at.
    pub fn handle(&mut self, message: Message) -> Result<()> {
        events::from_message(message).on(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutClass, Position, Scoreboard};
    use crate::message::Message;

    fn handle_json(board: &mut Scoreboard, json: &str) {
        board
            .handle(Message::from_json(json.as_bytes()).unwrap())
            .unwrap();
    }

    #[test]
    fn test_large_mode_wins_over_position() {
        assert_eq!(LayoutClass::resolve(Some("left"), true), LayoutClass::Large);
        assert_eq!(LayoutClass::resolve(Some("right"), true), LayoutClass::Large);
        assert_eq!(LayoutClass::resolve(None, true), LayoutClass::Large);
    }

    #[test]
    fn test_invalid_position_defaults_to_center() {
        assert_eq!(
            LayoutClass::resolve(Some("bogus"), false),
            LayoutClass::Position(Position::Center)
        );
        assert_eq!(
            LayoutClass::resolve(None, false),
            LayoutClass::Position(Position::Center)
        );
        assert_eq!(
            LayoutClass::resolve(Some("left"), false),
            LayoutClass::Position(Position::Left)
        );
    }

    #[test]
    fn test_layout_class_names() {
        assert_eq!(LayoutClass::Large.to_string(), "large-mode");
        assert_eq!(
            LayoutClass::Position(Position::Left).to_string(),
            "position-left"
        );
        assert_eq!(
            LayoutClass::Position(Position::Center).to_string(),
            "position-center"
        );
    }

    #[test]
    fn test_update_without_layout_fields_preserves_position() {
        let mut board = Scoreboard::new();
        handle_json(
            &mut board,
            r#"{"type":"showScoreboard","players":[],"position":"left","largeMode":false}"#,
        );
        assert_eq!(board.state.layout(), LayoutClass::Position(Position::Left));

        handle_json(
            &mut board,
            r#"{"type":"updatePlayers","players":[{"id":1,"name":"A","ping":10,"job":null}]}"#,
        );
        assert_eq!(board.state.layout(), LayoutClass::Position(Position::Left));
        assert_eq!(board.view.rows.len(), 1);
    }

    #[test]
    fn test_hide_keeps_layout_for_next_show() {
        let mut board = Scoreboard::new();
        handle_json(
            &mut board,
            r#"{"type":"showScoreboard","players":[],"title":"Staff","largeMode":true}"#,
        );
        handle_json(&mut board, r#"{"type":"hideScoreboard"}"#);
        assert!(!board.state.visible);
        assert_eq!(board.state.title, "Staff");
        assert_eq!(board.state.layout(), LayoutClass::Large);

        // a bare show reuses the last known layout
        handle_json(&mut board, r#"{"type":"showScoreboard","players":[]}"#);
        assert!(board.state.visible);
        assert_eq!(board.state.title, "Staff");
        assert_eq!(board.state.layout(), LayoutClass::Large);
    }

    #[test]
    fn test_show_scenario_without_jobs() {
        let mut board = Scoreboard::new();
        handle_json(
            &mut board,
            r#"{
                "type": "showScoreboard",
                "players": [{"id": 1, "name": "A", "ping": 50, "job": null}],
                "title": "Board",
                "position": "right",
                "largeMode": false,
                "showJobs": false
            }"#,
        );
        assert!(board.state.visible);
        assert_eq!(board.state.title, "Board");
        assert_eq!(board.state.layout(), LayoutClass::Position(Position::Right));
        assert!(board.view.job_panel.is_none());
        assert_eq!(board.view.rows.len(), 1);
        assert_eq!(
            board.view.rows[0].ping_class,
            crate::view::PingClass::Normal
        );
        assert_eq!(board.view.occupancy, "1 Player Online");
    }

    #[test]
    fn test_update_scenario_with_empty_roster_and_jobs() {
        let mut board = Scoreboard::new();
        handle_json(&mut board, r#"{"type":"showScoreboard","players":[]}"#);
        handle_json(
            &mut board,
            r#"{
                "type": "updatePlayers",
                "players": [],
                "showJobs": true,
                "jobConfigs": [{"name": "ems", "label": "EMS", "icon": "+", "color": "red"}],
                "jobCounts": {}
            }"#,
        );
        let panel = board.view.job_panel.as_ref().unwrap();
        assert_eq!(panel.entries.len(), 1);
        assert_eq!(panel.entries[0].text, "0 EMS");
        assert!(board.view.rows.is_empty());
        assert_eq!(board.view.occupancy, "0 Players Online");
    }

    #[test]
    fn test_show_panel_requires_large_mode() {
        let mut board = Scoreboard::new();
        let show = r#"{
            "type": "showScoreboard",
            "players": [],
            "largeMode": false,
            "showJobs": true,
            "jobConfigs": [{"name": "ems", "label": "EMS", "icon": "+", "color": "red"}],
            "jobCounts": {"ems": 2}
        }"#;
        handle_json(&mut board, show);
        assert!(board.view.job_panel.is_none());
        // configs are still cached for inline row icons
        assert!(board.state.job_config("ems").is_some());

        let show_large = show.replace(r#""largeMode": false"#, r#""largeMode": true"#);
        handle_json(&mut board, &show_large);
        let panel = board.view.job_panel.as_ref().unwrap();
        assert_eq!(panel.entries[0].text, "2 EMS");
    }

    #[test]
    fn test_disabling_jobs_clears_config_cache_and_panel() {
        let mut board = Scoreboard::new();
        handle_json(
            &mut board,
            r#"{
                "type": "updatePlayers",
                "players": [],
                "showJobs": true,
                "jobConfigs": [{"name": "ems", "label": "EMS", "icon": "+", "color": "red"}],
                "jobCounts": {"ems": 1}
            }"#,
        );
        assert!(board.view.job_panel.is_some());

        handle_json(
            &mut board,
            r#"{"type":"updatePlayers","players":[],"showJobs":false}"#,
        );
        assert!(board.view.job_panel.is_none());
        assert!(board.state.job_configs.is_none());
    }

    #[test]
    fn test_update_without_counts_removes_panel() {
        let mut board = Scoreboard::new();
        handle_json(
            &mut board,
            r#"{
                "type": "updatePlayers",
                "players": [],
                "showJobs": true,
                "jobConfigs": [{"name": "ems", "label": "EMS", "icon": "+", "color": "red"}],
                "jobCounts": {"ems": 1}
            }"#,
        );
        assert!(board.view.job_panel.is_some());

        handle_json(&mut board, r#"{"type":"updatePlayers","players":[]}"#);
        assert!(board.view.job_panel.is_none());
    }

    #[test]
    fn test_scroll_leaves_display_state_alone() {
        let mut board = Scoreboard::new();
        handle_json(
            &mut board,
            r#"{"type":"showScoreboard","players":[],"position":"left"}"#,
        );
        board.content.set_metrics(500.0, 200.0);
        handle_json(&mut board, r#"{"type":"scroll","offset":5}"#);
        assert_eq!(board.content.scroll_top, 50.0);
        assert_eq!(board.state.layout(), LayoutClass::Position(Position::Left));
        assert!(board.state.visible);
    }

    #[test]
    fn test_unknown_message_is_a_no_op() {
        let mut board = Scoreboard::new();
        handle_json(
            &mut board,
            r#"{"type":"showScoreboard","players":[],"title":"Board"}"#,
        );
        handle_json(&mut board, r#"{"type":"toggleMinimap"}"#);
        assert!(board.state.visible);
        assert_eq!(board.state.title, "Board");
    }
}
