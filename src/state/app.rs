use crate::core::Field;
use crate::runtime::event::{SystemEvent, WidgetAction};
use crate::state::focus::FocusState;
use crate::state::form::{FormProps, FormState, SubmitAttempt, SubmitTicket};
use crate::state::snapshot::FormSnapshot;
use crate::terminal::KeyEvent;
use crate::ui::view::{FormView, render_form};
use crate::widgets::inputs::button::SubmitButton;
use crate::widgets::inputs::text::{TextInput, TextMode};
use crate::widgets::node::{Node, find_node, find_node_mut};
use crate::widgets::outputs::heading::Heading;
use crate::widgets::outputs::text::Text;
use crate::widgets::traits::{InteractionResult, TextAction};

const KEY_HINT: &str = "Tab/↑↓ move  Enter next/submit  Ctrl+S submit  Ctrl+R reset  Esc quit";

/// Routes UI events into the form container: focus, blur-to-touch, edits
/// and submission requests. The container stays the only owner of form data.
pub struct AppState {
    form: FormState,
    message: String,
    nodes: Vec<Node>,
    focus: FocusState,
    pending_submissions: Vec<SubmitTicket>,
    should_exit: bool,
}

impl AppState {
    pub fn new(props: FormProps) -> Self {
        let form = FormState::initialize(&props);
        let mut nodes = signup_nodes();
        let snapshot = form.snapshot();
        for node in nodes.iter_mut() {
            node.sync(&snapshot);
        }
        let focus = FocusState::from_nodes(&nodes);
        Self {
            form,
            message: props.message,
            nodes,
            focus,
            pending_submissions: Vec::new(),
            should_exit: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.form.snapshot()
    }

    pub fn view(&self) -> FormView {
        render_form(&self.form.snapshot(), &self.message)
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focus.current_id()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn focus_next(&mut self) {
        self.blur_focused();
        self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.blur_focused();
        self.focus.prev();
    }

    pub fn dispatch_key_to_focused(&mut self, key: KeyEvent) -> InteractionResult {
        let snapshot = self.form.snapshot();
        let Some(id) = self.focus.current_id().map(str::to_string) else {
            return InteractionResult::ignored();
        };
        find_node_mut(&mut self.nodes, &id)
            .map(|node| node.on_key(key, &snapshot))
            .unwrap_or_else(InteractionResult::ignored)
    }

    pub fn dispatch_text_action_to_focused(&mut self, action: TextAction) -> InteractionResult {
        let snapshot = self.form.snapshot();
        let Some(id) = self.focus.current_id().map(str::to_string) else {
            return InteractionResult::ignored();
        };
        find_node_mut(&mut self.nodes, &id)
            .map(|node| node.on_text_action(action, &snapshot))
            .unwrap_or_else(InteractionResult::ignored)
    }

    /// Applies a widget action. Returns `true` when a render is needed.
    pub fn handle_action(&mut self, action: WidgetAction) -> bool {
        match action {
            WidgetAction::ValueChanged { change } => {
                self.form.set_field_value(change.field, change.value);
                self.form.set_field_touched(change.field);
                true
            }
            WidgetAction::InputDone => {
                self.advance_from_input();
                true
            }
            WidgetAction::SubmitRequested => {
                self.request_submit();
                true
            }
        }
    }

    pub fn handle_system_event(&mut self, event: SystemEvent) -> bool {
        match event {
            SystemEvent::SubmitCompleted { completion } => self
                .form
                .finish_submit(completion.run_id, &completion.outcome),
        }
    }

    pub fn request_submit(&mut self) -> SubmitAttempt {
        let attempt = self.form.submit();
        if let SubmitAttempt::Started(ticket) = &attempt {
            self.pending_submissions.push(ticket.clone());
        }
        attempt
    }

    /// Submissions that passed validation and still need a handler run.
    pub fn take_pending_submissions(&mut self) -> Vec<SubmitTicket> {
        std::mem::take(&mut self.pending_submissions)
    }

    pub fn reset_form(&mut self) -> bool {
        if !self.form.reset() {
            return false;
        }
        let snapshot = self.form.snapshot();
        for node in self.nodes.iter_mut() {
            node.sync(&snapshot);
        }
        true
    }

    fn focused_field(&self) -> Option<Field> {
        self.focus
            .current_id()
            .and_then(|id| find_node(&self.nodes, id))
            .and_then(Node::field)
    }

    fn blur_focused(&mut self) {
        if let Some(field) = self.focused_field() {
            self.form.set_field_touched(field);
        }
    }

    fn advance_from_input(&mut self) {
        let has_later_input = self.focus.following_ids().any(|id| {
            find_node(&self.nodes, id).is_some_and(|node| node.field().is_some())
        });
        if has_later_input {
            self.focus_next();
        } else {
            self.blur_focused();
            self.request_submit();
        }
    }
}

fn signup_nodes() -> Vec<Node> {
    vec![
        Node::Output(Box::new(Heading::new("heading"))),
        Node::Input(Box::new(
            TextInput::new(Field::Email, "Email").with_placeholder("you@example.com"),
        )),
        Node::Input(Box::new(
            TextInput::new(Field::Password, "Password").with_mode(TextMode::Password),
        )),
        Node::Input(Box::new(SubmitButton::new("submit"))),
        Node::Output(Box::new(Text::new("hint", KEY_HINT))),
    ]
}
