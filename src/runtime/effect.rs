use crate::runtime::event::WidgetAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Action(WidgetAction),
    RequestRender,
}
