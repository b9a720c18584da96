use crate::core::Field;
use crate::runtime::event::{ValueChange, WidgetAction};
use crate::state::snapshot::FormSnapshot;
use crate::terminal::{CursorPos, KeyEvent};
use crate::ui::span::SpanLine;
use crate::ui::view::FormView;
use crate::widgets::inputs::text_edit;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMode {
    /// Node does not participate in focus cycling.
    None,
    /// A single focusable leaf (text input, button).
    Leaf,
}

// ---------------------------------------------------------------------------
// Render context & output
// ---------------------------------------------------------------------------

/// Everything a widget may read while drawing. Widgets never read the form
/// container directly; they draw from the presentation view.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub focused_id: Option<String>,
    pub view: FormView,
}

impl RenderContext {
    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id.as_deref() == Some(id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

// ---------------------------------------------------------------------------
// Drawable: every node can draw itself
// ---------------------------------------------------------------------------

pub trait Drawable: Send {
    fn id(&self) -> &str;
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

// ---------------------------------------------------------------------------
// InteractionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub actions: Vec<WidgetAction>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: Vec::new(),
        }
    }

    pub fn with_action(action: WidgetAction) -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: vec![action],
        }
    }

    pub fn input_done() -> Self {
        Self::with_action(WidgetAction::InputDone)
    }

    pub fn value_changed(field: Field, value: String) -> Self {
        Self::with_action(WidgetAction::ValueChanged {
            change: ValueChange::new(field, value),
        })
    }
}

// ---------------------------------------------------------------------------
// TextAction & TextEditState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAction {
    DeleteWordLeft,
    DeleteWordRight,
}

pub struct TextEditState<'a> {
    pub value: &'a mut String,
    pub cursor: &'a mut usize,
}

impl TextAction {
    pub(crate) fn apply(self, state: &mut TextEditState<'_>) -> bool {
        match self {
            Self::DeleteWordLeft => text_edit::delete_word_left(state.value, state.cursor),
            Self::DeleteWordRight => text_edit::delete_word_right(state.value, state.cursor),
        }
    }
}

// ---------------------------------------------------------------------------
// Interactive: input nodes
// ---------------------------------------------------------------------------

/// Inputs are controlled: the value lives in the form container and arrives
/// through `snapshot`. A widget only keeps presentation state such as its
/// cursor, and reports edits as [`WidgetAction::ValueChanged`].
pub trait Interactive: Send {
    fn focus_mode(&self) -> FocusMode;

    /// The form field this widget is bound to, if any.
    fn field(&self) -> Option<Field> {
        None
    }

    fn on_key(&mut self, key: KeyEvent, snapshot: &FormSnapshot) -> InteractionResult;

    fn on_text_action(&mut self, _action: TextAction, _snapshot: &FormSnapshot) -> InteractionResult {
        InteractionResult::ignored()
    }

    fn cursor_pos(&self, _snapshot: &FormSnapshot) -> Option<CursorPos> {
        None
    }

    /// Called when values changed outside of this widget (mount, reset).
    fn sync(&mut self, _snapshot: &FormSnapshot) {}
}

// ---------------------------------------------------------------------------
// InteractiveNode: combined bound used in Node
// ---------------------------------------------------------------------------

pub trait InteractiveNode: Drawable + Interactive {}
impl<T> InteractiveNode for T where T: Drawable + Interactive {}
