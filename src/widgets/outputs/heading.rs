use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::traits::{DrawOutput, Drawable, RenderContext};

/// Draws the form's display message.
pub struct Heading {
    id: String,
}

impl Heading {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Drawable for Heading {
    fn id(&self) -> &str {
        &self.id
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        DrawOutput {
            lines: vec![
                vec![Span::styled(
                    ctx.view.heading.clone(),
                    Style::new().color(Color::Cyan).bold(),
                )],
                Vec::new(),
            ],
        }
    }
}
