use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::app::AppState;
use crate::widgets::traits::InteractionResult;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Intent::Submit => {
                state.request_submit();
                vec![Effect::RequestRender]
            }
            Intent::Reset => {
                if state.reset_form() {
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
            Intent::NextFocus => {
                state.focus_next();
                vec![Effect::RequestRender]
            }
            Intent::PrevFocus => {
                state.focus_prev();
                vec![Effect::RequestRender]
            }
            Intent::InputKey(key) => collect_effects(state.dispatch_key_to_focused(key)),
            Intent::TextAction(action) => {
                collect_effects(state.dispatch_text_action_to_focused(action))
            }
            Intent::Tick => vec![],
        }
    }
}

fn collect_effects(result: InteractionResult) -> Vec<Effect> {
    let mut effects: Vec<Effect> = result.actions.into_iter().map(Effect::Action).collect();
    if result.request_render {
        effects.push(Effect::RequestRender);
    }
    effects
}

#[cfg(test)]
mod tests {
    use super::Reducer;
    use crate::core::Field;
    use crate::runtime::effect::Effect;
    use crate::runtime::event::{ValueChange, WidgetAction};
    use crate::runtime::intent::Intent;
    use crate::state::app::AppState;
    use crate::state::form::FormProps;
    use crate::terminal::{KeyCode, KeyEvent};

    #[test]
    fn typing_a_char_yields_value_change() {
        let mut state = AppState::new(FormProps::new("Sign up"));
        let effects = Reducer::reduce(
            &mut state,
            Intent::InputKey(KeyEvent::plain(KeyCode::Char('a'))),
        );
        assert_eq!(
            effects[0],
            Effect::Action(WidgetAction::ValueChanged {
                change: ValueChange::new(Field::Email, "a"),
            })
        );
        assert!(effects.contains(&Effect::RequestRender));
        // The container is only updated once the action is applied.
        assert_eq!(state.form().values().email, "");
    }

    #[test]
    fn submit_intent_on_invalid_form_shows_errors() {
        let mut state = AppState::new(FormProps::new("Sign up"));
        Reducer::reduce(&mut state, Intent::Submit);
        assert!(!state.form().is_submitting());
        assert!(state.take_pending_submissions().is_empty());
        assert_eq!(state.view().error_for("email"), Some("Required"));
    }

    #[test]
    fn reset_is_refused_while_submitting() {
        let mut state = AppState::new(FormProps::new("Sign up").with_initial_email("a@b.com"));
        Reducer::reduce(&mut state, Intent::Submit);
        assert!(state.form().is_submitting());
        assert!(Reducer::reduce(&mut state, Intent::Reset).is_empty());
    }

    #[test]
    fn exit_sets_flag() {
        let mut state = AppState::new(FormProps::new("Sign up"));
        Reducer::reduce(&mut state, Intent::Exit);
        assert!(state.should_exit());
    }

    #[test]
    fn only_widget_actions_and_renders_leave_the_reducer() {
        let mut state = AppState::new(FormProps::new("Sign up"));
        assert!(Reducer::reduce(&mut state, Intent::Tick).is_empty());

        let effects = Reducer::reduce(&mut state, Intent::InputKey(KeyEvent::plain(KeyCode::Enter)));
        assert_eq!(
            effects,
            vec![Effect::Action(WidgetAction::InputDone), Effect::RequestRender]
        );
    }
}
