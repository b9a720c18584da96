use crate::runtime::event::WidgetAction;
use crate::state::snapshot::FormSnapshot;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::InputBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, FocusMode, InteractionResult, Interactive, RenderContext,
};

pub struct SubmitButton {
    base: InputBase,
}

impl SubmitButton {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, ""),
        }
    }
}

impl Drawable for SubmitButton {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let submit = &ctx.view.submit;
        let style = if submit.disabled {
            Style::new().color(Color::DarkGrey)
        } else if focused {
            Style::new()
                .color(Color::White)
                .background(Color::Blue)
                .bold()
        } else {
            Style::new().color(Color::White)
        };

        let mut line = vec![
            Span::new(format!("{} ", self.base.focus_marker(focused))),
            Span::styled(format!("[ {} ]", submit.label), style),
        ];
        if submit.disabled {
            line.push(Span::styled(
                " submitting...",
                Style::new().color(Color::Yellow),
            ));
        }

        DrawOutput { lines: vec![line] }
    }
}

impl Interactive for SubmitButton {
    fn focus_mode(&self) -> FocusMode {
        FocusMode::Leaf
    }

    fn on_key(&mut self, key: KeyEvent, snapshot: &FormSnapshot) -> InteractionResult {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if !snapshot.is_submitting => {
                InteractionResult::with_action(WidgetAction::SubmitRequested)
            }
            _ => InteractionResult::ignored(),
        }
    }
}
