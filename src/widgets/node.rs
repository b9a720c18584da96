use crate::core::Field;
use crate::state::snapshot::FormSnapshot;
use crate::terminal::{CursorPos, KeyEvent};
use crate::widgets::traits::{
    DrawOutput, Drawable, FocusMode, InteractionResult, InteractiveNode, RenderContext, TextAction,
};

pub enum Node {
    Input(Box<dyn InteractiveNode>),
    Output(Box<dyn Drawable>),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Self::Input(w) => w.id(),
            Self::Output(w) => w.id(),
        }
    }

    pub fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        match self {
            Self::Input(w) => w.draw(ctx),
            Self::Output(w) => w.draw(ctx),
        }
    }

    pub fn focus_mode(&self) -> FocusMode {
        match self {
            Self::Input(w) => w.focus_mode(),
            Self::Output(_) => FocusMode::None,
        }
    }

    pub fn is_focusable(&self) -> bool {
        self.focus_mode() == FocusMode::Leaf
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Input(w) => w.field(),
            Self::Output(_) => None,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, snapshot: &FormSnapshot) -> InteractionResult {
        match self {
            Self::Input(w) => w.on_key(key, snapshot),
            Self::Output(_) => InteractionResult::ignored(),
        }
    }

    pub fn on_text_action(&mut self, action: TextAction, snapshot: &FormSnapshot) -> InteractionResult {
        match self {
            Self::Input(w) => w.on_text_action(action, snapshot),
            Self::Output(_) => InteractionResult::ignored(),
        }
    }

    pub fn cursor_pos(&self, snapshot: &FormSnapshot) -> Option<CursorPos> {
        match self {
            Self::Input(w) => w.cursor_pos(snapshot),
            Self::Output(_) => None,
        }
    }

    pub fn sync(&mut self, snapshot: &FormSnapshot) {
        if let Self::Input(w) = self {
            w.sync(snapshot);
        }
    }
}

pub fn find_node<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    nodes.iter().find(|node| node.id() == id)
}

pub fn find_node_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Node> {
    nodes.iter_mut().find(|node| node.id() == id)
}
