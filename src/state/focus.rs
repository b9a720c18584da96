use crate::core::NodeId;
use crate::widgets::node::Node;

#[derive(Debug, Default, Clone)]
pub struct FocusState {
    targets: Vec<NodeId>,
    index: Option<usize>,
}

impl FocusState {
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let targets: Vec<NodeId> = nodes
            .iter()
            .filter(|node| node.is_focusable())
            .map(|node| NodeId::from(node.id()))
            .collect();
        let index = if targets.is_empty() { None } else { Some(0) };
        Self { targets, index }
    }

    pub fn current_id(&self) -> Option<&str> {
        self.index
            .and_then(|i| self.targets.get(i))
            .map(NodeId::as_str)
    }

    /// Ids focusable after the current target, in order, without wrapping.
    pub fn following_ids(&self) -> impl Iterator<Item = &str> {
        let start = self.index.map_or(0, |i| i + 1);
        self.targets.iter().skip(start).map(NodeId::as_str)
    }

    pub fn set_focus_by_id(&mut self, id: &str) -> bool {
        match self.targets.iter().position(|target| target.as_str() == id) {
            Some(index) => {
                self.index = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self) {
        let Some(current) = self.index else {
            return;
        };
        self.index = Some((current + 1) % self.targets.len());
    }

    pub fn prev(&mut self) {
        let Some(current) = self.index else {
            return;
        };
        self.index = Some((current + self.targets.len() - 1) % self.targets.len());
    }
}
