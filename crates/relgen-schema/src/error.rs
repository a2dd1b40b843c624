use serde::Serialize;
use std::fmt::{self, Display};

///
/// ErrorTree
/// Route-aware aggregate of validation failures.
///
/// Validation passes append messages (optionally under a route such as
/// `"Entity.field"`) and callers collapse the tree with `result()` so an
/// empty tree is `Ok(())` and a non-empty one is the error itself.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    entries: Vec<TreeEntry>,
}

#[derive(Clone, Debug, Serialize)]
struct TreeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    route: Option<String>,
    message: String,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a message at the tree root.
    pub fn add(&mut self, message: impl Display) {
        self.entries.push(TreeEntry {
            route: None,
            message: message.to_string(),
        });
    }

    /// Append a message under a route label.
    pub fn add_at(&mut self, route: impl Into<String>, message: impl Display) {
        self.entries.push(TreeEntry {
            route: Some(route.into()),
            message: message.to_string(),
        });
    }

    /// Fold another tree into this one, keeping entry order.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Collapse into a `Result`, consuming the tree.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Iterate rendered `route: message` lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|entry| match &entry.route {
            Some(route) => format!("{route}: {}", entry.message),
            None => entry.message.clone(),
        })
    }
}

impl Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in self.lines() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
            first = false;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Append a formatted message to an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}
