//! Headless walkthroughs of the sign-up form: keys go through the bindings,
//! the reducer and the app state exactly as the terminal loop routes them.

use signup_form::runtime::effect::Effect;
use signup_form::runtime::event::SystemEvent;
use signup_form::runtime::intent::Intent;
use signup_form::runtime::key_bindings::KeyBindings;
use signup_form::runtime::reducer::Reducer;
use signup_form::state::app::AppState;
use signup_form::state::snapshot::FormPhase;
use signup_form::submit::{SubmitError, SubmitExecutor, SubmitHandler};
use signup_form::terminal::{KeyCode, KeyEvent};
use signup_form::{Field, FormProps, FormValues};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

struct Harness {
    state: AppState,
    bindings: KeyBindings,
    executor: SubmitExecutor,
}

impl Harness {
    fn new(props: FormProps, handler: Arc<dyn SubmitHandler>) -> Self {
        Self {
            state: AppState::new(props),
            bindings: KeyBindings::new(),
            executor: SubmitExecutor::new(handler),
        }
    }

    fn press(&mut self, key: KeyEvent) {
        let intent = self.bindings.resolve_or_input(key);
        self.apply(intent);
    }

    fn apply(&mut self, intent: Intent) {
        for effect in Reducer::reduce(&mut self.state, intent) {
            match effect {
                Effect::Action(action) => {
                    self.state.handle_action(action);
                }
                Effect::RequestRender => {}
            }
        }
        for ticket in self.state.take_pending_submissions() {
            self.executor.spawn(ticket);
        }
    }

    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyEvent::plain(KeyCode::Char(ch)));
        }
    }

    fn settle(&mut self) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while self.state.form().is_submitting() {
            for completion in self.executor.drain_ready() {
                self.state
                    .handle_system_event(SystemEvent::SubmitCompleted { completion });
            }
            assert!(Instant::now() < deadline, "submission never settled");
            std::thread::sleep(Duration::from_millis(5));
        }
    }
}

fn recording_handler() -> (Arc<Mutex<Vec<FormValues>>>, Arc<dyn SubmitHandler>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let handler = move |values: &FormValues| -> Result<(), SubmitError> {
        sink.lock().expect("calls lock").push(values.clone());
        Ok(())
    };
    let handler: Arc<dyn SubmitHandler> = Arc::new(handler);
    (calls, handler)
}

#[test]
fn blurring_an_empty_email_shows_required() {
    let (calls, handler) = recording_handler();
    let mut harness = Harness::new(FormProps::new("Sign up"), handler);

    harness.press(KeyEvent::plain(KeyCode::Tab));

    let view = harness.state.view();
    assert_eq!(view.error_for("email"), Some("Required"));
    assert_eq!(view.error_for("password"), None);
    assert!(calls.lock().expect("calls lock").is_empty());
}

#[test]
fn malformed_email_is_reported_after_typing() {
    let (_, handler) = recording_handler();
    let mut harness = Harness::new(FormProps::new("Sign up"), handler);

    harness.type_text("abc");
    harness.press(KeyEvent::plain(KeyCode::Tab));

    assert_eq!(
        harness.state.view().error_for("email"),
        Some("Invalid email address")
    );
}

#[test]
fn valid_form_submits_once_and_settles() {
    let (calls, handler) = recording_handler();
    let mut harness = Harness::new(FormProps::new("Sign up"), handler);

    harness.type_text("bob@example.com");
    harness.press(KeyEvent::plain(KeyCode::Enter));
    assert_eq!(harness.state.focused_id(), Some("password"));
    harness.type_text("hunter2");
    harness.press(KeyEvent::plain(KeyCode::Enter));

    assert!(harness.state.form().is_submitting());
    assert!(harness.state.view().submit.disabled);

    // Repeated triggers while in flight are ignored.
    harness.press(KeyEvent::ctrl('s'));
    assert_eq!(harness.state.form().submit_count(), 1);

    harness.settle();
    assert!(!harness.state.view().submit.disabled);
    assert_eq!(harness.state.form().phase(), FormPhase::Editing);

    let calls = calls.lock().expect("calls lock");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], FormValues::new("bob@example.com", "hunter2"));
}

#[test]
fn invalid_submit_does_not_call_handler() {
    let (calls, handler) = recording_handler();
    let mut harness = Harness::new(FormProps::new("Sign up"), handler);

    harness.type_text("bob@");
    harness.press(KeyEvent::ctrl('s'));

    assert!(!harness.state.form().is_submitting());
    assert!(harness.state.form().touched().is_touched(Field::Password));
    assert_eq!(
        harness.state.view().error_for("email"),
        Some("Invalid email address")
    );
    assert!(calls.lock().expect("calls lock").is_empty());
}

#[test]
fn prefilled_email_submits_from_the_button() {
    let (calls, handler) = recording_handler();
    let mut harness = Harness::new(FormProps::new("Sign up").with_initial_email("a@b.com"), handler);

    assert_eq!(harness.state.form().phase(), FormPhase::Idle);
    harness.press(KeyEvent::plain(KeyCode::Up));
    assert_eq!(harness.state.focused_id(), Some("submit"));
    harness.press(KeyEvent::plain(KeyCode::Enter));
    harness.settle();

    let calls = calls.lock().expect("calls lock");
    assert_eq!(calls.as_slice(), &[FormValues::new("a@b.com", "")]);
}

#[test]
fn failing_handler_still_clears_submitting() {
    let handler: Arc<dyn SubmitHandler> = Arc::new(|_: &FormValues| -> Result<(), SubmitError> {
        Err(SubmitError::Rejected("server said no".into()))
    });
    let mut harness = Harness::new(FormProps::new("Sign up").with_initial_email("a@b.com"), handler);

    harness.apply(Intent::Submit);
    assert!(harness.state.form().is_submitting());
    harness.settle();
    assert!(!harness.state.form().is_submitting());
    assert_eq!(harness.state.form().values().email, "a@b.com");
}

#[test]
fn password_is_masked_in_the_frame() {
    let (_, handler) = recording_handler();
    let mut harness = Harness::new(FormProps::new("Sign up"), handler);

    harness.press(KeyEvent::plain(KeyCode::Tab));
    harness.type_text("secret");

    let frame = signup_form::ui::renderer::Renderer::render(&harness.state);
    let text: Vec<String> = frame
        .lines
        .iter()
        .map(signup_form::ui::span::line_text)
        .collect();
    assert!(text.iter().any(|line| line.contains("******")));
    assert!(!text.iter().any(|line| line.contains("secret")));
}
