use crate::state::Scoreboard;
use anyhow::Result;
use tera::Tera;

static SCOREBOARD_HTML: &[u8] = include_bytes!("templates/scoreboard.html");

/// Projects the merged state and the visible tree into the final HTML.
pub fn render_scoreboard(board: &Scoreboard) -> Result<String> {
    let mut context = tera::Context::new();

    context.insert("hidden", &!board.state.visible);
    context.insert("layout_class", &board.state.layout().to_string());
    context.insert("title", &board.state.title);
    context.insert("occupancy", &board.view.occupancy);
    context.insert("job_panel", &board.view.job_panel);
    context.insert("footer", &board.view.footer);
    context.insert("scroll_top", &board.content.scroll_top);

    let rows = board
        .view
        .rows
        .iter()
        .map(|row| {
            (
                row.id,
                row.name.clone(),
                row.job_icon.clone(),
                row.ping,
                row.ping_class.as_class(),
            )
        })
        .collect::<Vec<_>>();
    context.insert("rows", &rows);

    let html = Tera::one_off(std::str::from_utf8(SCOREBOARD_HTML).unwrap(), &context, false)?;
    Ok(html)
}
