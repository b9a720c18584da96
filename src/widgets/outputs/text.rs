use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::traits::{DrawOutput, Drawable, RenderContext};

/// Static, dimmed text such as key hints.
pub struct Text {
    id: String,
    text: String,
}

impl Text {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl Drawable for Text {
    fn id(&self) -> &str {
        &self.id
    }

    fn draw(&self, _ctx: &RenderContext) -> DrawOutput {
        DrawOutput {
            lines: vec![vec![Span::styled(
                self.text.clone(),
                Style::new().color(Color::DarkGrey),
            )]],
        }
    }
}
