use crate::state::app::AppState;
use crate::terminal::CursorPos;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::ui::view::render_form;
use crate::widgets::traits::RenderContext;

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub struct Renderer;

impl Renderer {
    pub fn render(state: &AppState) -> RenderFrame {
        let snapshot = state.snapshot();
        let mut frame = RenderFrame::default();
        let ctx = RenderContext {
            focused_id: state.focused_id().map(ToOwned::to_owned),
            view: render_form(&snapshot, state.message()),
        };
        let mut row_offset: u16 = 0;

        for node in state.nodes() {
            let out = node.draw(&ctx);
            if frame.cursor.is_none() && ctx.is_focused(node.id()) {
                if let Some(local_cursor) = node.cursor_pos(&snapshot) {
                    frame.cursor = Some(CursorPos {
                        col: local_cursor.col,
                        row: row_offset.saturating_add(local_cursor.row),
                    });
                }
            }
            row_offset = row_offset.saturating_add(out.lines.len() as u16);
            frame.lines.extend(out.lines);

            if let Some(error) = ctx.view.error_for(node.id()) {
                let error_style = Style::new().color(Color::Red);
                frame
                    .lines
                    .push(vec![Span::styled(format!("    {}", error), error_style)]);
                row_offset = row_offset.saturating_add(1);
            }
        }

        frame
    }
}
