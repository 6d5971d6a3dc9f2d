use std::collections::HashMap;

/// One node of a nested filter tree: either a selectable leaf value or a
/// titled section holding further nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterNode {
    Leaf(String),
    Section {
        title: String,
        children: Vec<FilterNode>,
    },
}

impl FilterNode {
    pub fn leaf(value: impl Into<String>) -> Self {
        Self::Leaf(value.into())
    }

    pub fn section(title: impl Into<String>, children: Vec<FilterNode>) -> Self {
        Self::Section {
            title: title.into(),
            children,
        }
    }
}

/// All leaf values of a subtree, in tree order.
fn leaf_values(nodes: &[FilterNode]) -> Vec<String> {
    let mut values = Vec::new();
    for node in nodes {
        match node {
            FilterNode::Leaf(value) => values.push(value.clone()),
            FilterNode::Section { children, .. } => values.extend(leaf_values(children)),
        }
    }
    values
}

/// Map of every section path to `value`. Paths are dot-joined child indices
/// rooted at `"0"`; an index counts leaves and sections alike.
fn section_paths(nodes: &[FilterNode], value: bool, path: &str) -> HashMap<String, bool> {
    let mut map = HashMap::new();
    map.insert(path.to_string(), value);
    for (index, node) in nodes.iter().enumerate() {
        if let FilterNode::Section { children, .. } = node {
            let child_path = format!("{path}.{index}");
            map.extend(section_paths(children, value, &child_path));
        }
    }
    map
}

/// Leaf values reachable through a locked path. A lock at an ancestor covers
/// every leaf beneath it.
fn locked_values(
    nodes: &[FilterNode],
    locked: &HashMap<String, bool>,
    path: &str,
    inherited: bool,
) -> Vec<String> {
    let mut values = Vec::new();
    for (index, node) in nodes.iter().enumerate() {
        let FilterNode::Section { children, .. } = node else {
            continue;
        };
        let child_path = format!("{path}.{index}");
        let is_locked = inherited || locked.get(&child_path).copied().unwrap_or(false);
        if is_locked {
            values.extend(leaf_values(std::slice::from_ref(node)));
        } else if !children.is_empty() {
            values.extend(locked_values(children, locked, &child_path, false));
        }
    }
    values
}

/// Nested multi-select filter with per-path locking (card types, races).
///
/// `reset` keeps the current selection for any value under a locked path and
/// restores the default (everything) for the rest.
#[derive(Debug, Clone)]
pub struct SectionsFilter {
    sections: Vec<FilterNode>,
    selected: Vec<String>,
    locked: HashMap<String, bool>,
    shown: HashMap<String, bool>,
}

impl SectionsFilter {
    pub fn new(sections: Vec<FilterNode>) -> Self {
        let selected = leaf_values(&sections);
        Self {
            sections,
            selected,
            locked: HashMap::new(),
            shown: HashMap::new(),
        }
    }

    pub fn sections(&self) -> &[FilterNode] {
        &self.sections
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn set_selected<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = values.into_iter().map(Into::into).collect();
    }

    pub fn lock(&mut self, path: &str) {
        self.locked.insert(path.to_string(), true);
    }

    pub fn unlock_path(&mut self, path: &str) {
        self.locked.insert(path.to_string(), false);
    }

    /// Clears every path lock.
    pub fn unlock(&mut self) {
        for value in self.locked.values_mut() {
            *value = false;
        }
    }

    pub fn is_locked(&self, path: &str) -> bool {
        self.locked.get(path).copied().unwrap_or(false)
    }

    /// Expands or collapses every section.
    pub fn show(&mut self, shown: bool) {
        self.shown = section_paths(&self.sections, shown, "0");
    }

    pub fn show_path(&mut self, path: &str, shown: bool) {
        self.shown.insert(path.to_string(), shown);
    }

    pub fn is_shown(&self, path: &str) -> bool {
        self.shown.get(path).copied().unwrap_or(false)
    }

    /// Values currently protected by a lock somewhere above them.
    pub fn locked_values(&self) -> Vec<String> {
        let root_locked = self.locked.get("0").copied().unwrap_or(false);
        if root_locked {
            return leaf_values(&self.sections);
        }
        locked_values(&self.sections, &self.locked, "0", false)
    }

    /// Restores defaults for every value not protected by a lock; the
    /// current selection is kept for locked values.
    pub fn reset(&mut self) {
        let all = leaf_values(&self.sections);
        let locked = self.locked_values();

        let mut next: Vec<String> = self
            .selected
            .iter()
            .filter(|value| locked.contains(value))
            .cloned()
            .collect();
        next.extend(all.into_iter().filter(|value| !locked.contains(value)));
        self.selected = next;
    }
}
