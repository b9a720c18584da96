use super::text_edit;
use crate::core::Field;
use crate::state::snapshot::FormSnapshot;
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::InputBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, FocusMode, InteractionResult, Interactive, RenderContext, TextAction,
    TextEditState,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    #[default]
    Plain,
    /// Drawn as `*`, one per character. Word-wise editing is disabled so
    /// the shape of the secret is not revealed.
    Password,
}

pub struct TextInput {
    base: InputBase,
    field: Field,
    mode: TextMode,
    cursor: usize,
    placeholder: Option<String>,
}

impl TextInput {
    pub fn new(field: Field, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(field.as_str(), label),
            field,
            mode: TextMode::Plain,
            cursor: 0,
            placeholder: None,
        }
    }

    pub fn with_mode(mut self, mode: TextMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    fn display_value(&self, value: &str) -> String {
        match self.mode {
            TextMode::Plain => value.to_string(),
            TextMode::Password => "*".repeat(text_edit::char_count(value)),
        }
    }

    /// Applies `edit` to a copy of the bound value and reports the result as
    /// a value change. The container stays the only owner of the value.
    fn edit(
        &mut self,
        snapshot: &FormSnapshot,
        edit: impl FnOnce(&mut String, &mut usize) -> bool,
    ) -> InteractionResult {
        let mut value = snapshot.values.get(self.field).to_string();
        let mut cursor = text_edit::clamp_cursor(self.cursor, &value);
        let changed = edit(&mut value, &mut cursor);
        self.cursor = cursor;
        if changed {
            InteractionResult::value_changed(self.field, value)
        } else {
            InteractionResult::ignored()
        }
    }

    fn move_cursor(
        &mut self,
        snapshot: &FormSnapshot,
        step: impl FnOnce(&mut usize, &str) -> bool,
    ) -> InteractionResult {
        let value = snapshot.values.get(self.field);
        let mut cursor = text_edit::clamp_cursor(self.cursor, value);
        let moved = step(&mut cursor, value);
        self.cursor = cursor;
        if moved {
            InteractionResult::handled()
        } else {
            InteractionResult::ignored()
        }
    }
}

impl Drawable for TextInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let value = ctx
            .view
            .input(self.field)
            .map(|input| input.value.as_str())
            .unwrap_or_default();

        let mut line = vec![Span::new(self.base.prefix(focused))];
        match &self.placeholder {
            Some(placeholder) if value.is_empty() => {
                line.push(Span::styled(
                    placeholder.clone(),
                    Style::new().color(Color::DarkGrey),
                ));
            }
            _ => line.push(Span::new(self.display_value(value))),
        }

        DrawOutput { lines: vec![line] }
    }
}

impl Interactive for TextInput {
    fn focus_mode(&self) -> FocusMode {
        FocusMode::Leaf
    }

    fn field(&self) -> Option<Field> {
        Some(self.field)
    }

    fn on_key(&mut self, key: KeyEvent, snapshot: &FormSnapshot) -> InteractionResult {
        match key.code {
            KeyCode::Char(ch)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.edit(snapshot, |value, cursor| {
                    text_edit::insert_char(value, cursor, ch);
                    true
                })
            }
            KeyCode::Backspace => self.edit(snapshot, text_edit::backspace_char),
            KeyCode::Delete => self.edit(snapshot, text_edit::delete_char),
            KeyCode::Left => self.move_cursor(snapshot, text_edit::move_left),
            KeyCode::Right => self.move_cursor(snapshot, text_edit::move_right),
            KeyCode::Home => self.move_cursor(snapshot, |cursor, _| {
                let moved = *cursor != 0;
                *cursor = 0;
                moved
            }),
            KeyCode::End => self.move_cursor(snapshot, |cursor, value| {
                let end = text_edit::char_count(value);
                let moved = *cursor != end;
                *cursor = end;
                moved
            }),
            KeyCode::Enter => InteractionResult::input_done(),
            _ => InteractionResult::ignored(),
        }
    }

    fn on_text_action(&mut self, action: TextAction, snapshot: &FormSnapshot) -> InteractionResult {
        if self.mode == TextMode::Password {
            return InteractionResult::ignored();
        }
        self.edit(snapshot, |value, cursor| {
            action.apply(&mut TextEditState { value, cursor })
        })
    }

    fn cursor_pos(&self, snapshot: &FormSnapshot) -> Option<CursorPos> {
        let value = snapshot.values.get(self.field);
        let cursor = text_edit::clamp_cursor(self.cursor, value);
        let value_width: usize = match self.mode {
            TextMode::Password => cursor,
            TextMode::Plain => value
                .chars()
                .take(cursor)
                .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
                .sum(),
        };
        let prefix_width = UnicodeWidthStr::width(self.base.prefix(true).as_str());
        Some(CursorPos {
            col: (prefix_width + value_width) as u16,
            row: 0,
        })
    }

    fn sync(&mut self, snapshot: &FormSnapshot) {
        self.cursor = text_edit::char_count(snapshot.values.get(self.field));
    }
}

#[cfg(test)]
mod tests {
    use super::{TextInput, TextMode};
    use crate::core::Field;
    use crate::runtime::event::WidgetAction;
    use crate::state::form::{FormProps, FormState};
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::ui::span::line_text;
    use crate::ui::view::render_form;
    use crate::widgets::traits::{Drawable, Interactive, RenderContext, TextAction};

    fn changed_value(actions: &[WidgetAction]) -> Option<(Field, String)> {
        actions.iter().find_map(|action| match action {
            WidgetAction::ValueChanged { change } => Some((change.field, change.value.clone())),
            _ => None,
        })
    }

    #[test]
    fn typing_reports_the_new_value_without_owning_it() {
        let form = FormState::initialize(&FormProps::new("Sign up").with_initial_email("bo"));
        let mut input = TextInput::new(Field::Email, "Email");
        input.sync(&form.snapshot());

        let result = input.on_key(KeyEvent::plain(KeyCode::Char('b')), &form.snapshot());
        assert_eq!(
            changed_value(&result.actions),
            Some((Field::Email, "bob".to_string()))
        );
        assert_eq!(form.values().email, "bo");
    }

    #[test]
    fn control_chords_are_not_inserted() {
        let form = FormState::initialize(&FormProps::new("Sign up"));
        let mut input = TextInput::new(Field::Email, "Email");
        let result = input.on_key(KeyEvent::ctrl('s'), &form.snapshot());
        assert!(!result.handled);
    }

    #[test]
    fn enter_signals_input_done() {
        let form = FormState::initialize(&FormProps::new("Sign up"));
        let mut input = TextInput::new(Field::Email, "Email");
        let result = input.on_key(KeyEvent::plain(KeyCode::Enter), &form.snapshot());
        assert!(matches!(result.actions.as_slice(), [WidgetAction::InputDone]));
    }

    #[test]
    fn password_mode_masks_and_blocks_word_edits() {
        let mut form = FormState::initialize(&FormProps::new("Sign up"));
        form.set_field_value(Field::Password, "secret");
        let snapshot = form.snapshot();

        let mut input = TextInput::new(Field::Password, "Password").with_mode(TextMode::Password);
        input.sync(&snapshot);
        let ctx = RenderContext {
            focused_id: Some("password".to_string()),
            view: render_form(&snapshot, "Sign up"),
        };
        let drawn = input.draw(&ctx);
        assert_eq!(line_text(&drawn.lines[0]), "> Password: ******");

        let result = input.on_text_action(TextAction::DeleteWordLeft, &snapshot);
        assert!(!result.handled);
    }

    #[test]
    fn placeholder_is_drawn_for_empty_value() {
        let form = FormState::initialize(&FormProps::new("Sign up"));
        let input = TextInput::new(Field::Email, "Email").with_placeholder("you@example.com");
        let ctx = RenderContext {
            focused_id: None,
            view: render_form(&form.snapshot(), "Sign up"),
        };
        assert_eq!(line_text(&input.draw(&ctx).lines[0]), "  Email: you@example.com");
    }

    #[test]
    fn cursor_follows_prefix_and_value() {
        let form = FormState::initialize(&FormProps::new("Sign up").with_initial_email("ab"));
        let mut input = TextInput::new(Field::Email, "Email");
        input.sync(&form.snapshot());
        let pos = input.cursor_pos(&form.snapshot()).expect("text inputs have a cursor");
        assert_eq!(pos.col, "> Email: ".len() as u16 + 2);
        assert_eq!(pos.row, 0);
    }
}
