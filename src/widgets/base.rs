use crate::widgets::traits::RenderContext;

#[derive(Debug, Clone)]
pub struct InputBase {
    id: String,
    label: String,
}

impl InputBase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_focused(&self, ctx: &RenderContext) -> bool {
        ctx.is_focused(&self.id)
    }

    pub fn focus_marker(&self, focused: bool) -> &'static str {
        if focused { ">" } else { " " }
    }

    /// The text drawn before the value, e.g. `"> Email: "`.
    pub fn prefix(&self, focused: bool) -> String {
        format!("{} {}: ", self.focus_marker(focused), self.label)
    }
}
