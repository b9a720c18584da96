use crate::terminal::KeyEvent;
use crate::widgets::traits::TextAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Exit,
    Submit,
    Reset,
    NextFocus,
    PrevFocus,
    InputKey(KeyEvent),
    TextAction(TextAction),
    Tick,
}
