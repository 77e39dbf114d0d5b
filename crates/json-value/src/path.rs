//! Locations inside a value tree, rendered as JSON Pointers (RFC 6901).

use std::fmt;

/// A step from a container to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

/// Path from the root of a document to a node.
///
/// The root is the empty path and displays as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns a new path one level below this one.
    pub fn child(&self, step: PathStep) -> Path {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Path { steps }
    }

    pub fn key(&self, key: &str) -> Path {
        self.child(PathStep::Key(key.to_string()))
    }

    pub fn index(&self, index: usize) -> Path {
        self.child(PathStep::Index(index))
    }

    pub(crate) fn from_steps(steps: Vec<PathStep>) -> Path {
        Path { steps }
    }
}

/// Escapes a key for use as a pointer component.
///
/// `~` becomes `~0` and `/` becomes `~1`.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // `~` first, otherwise the `~` in `~1` would be escaped again
    component.replace('~', "~0").replace('/', "~1")
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            f.write_str("/")?;
            match step {
                PathStep::Key(key) => f.write_str(&escape_component(key))?,
                PathStep::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}
