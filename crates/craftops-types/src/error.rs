use std::fmt;

/// A single node in a structured failure report.
///
/// Leaves carry raw diagnostic text (remote stderr, a bad payload); interior
/// nodes carry the failures of the nested calls behind them. A node is built
/// at the point of failure, wrapped by each caller on the way up, and rendered
/// once at the top for the operational log. Nodes are never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNode {
    origin: String,
    message: String,
    detail: Detail,
}

/// Payload of an [`ErrorNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// Raw diagnostic text. May be empty when the message says it all.
    Text(String),
    /// Failures of the nested calls that caused this one. Never empty.
    Nested(Vec<ErrorNode>),
}

impl ErrorNode {
    /// A leaf failure with raw diagnostic text.
    pub fn leaf(
        origin: impl Into<String>,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            message: message.into(),
            detail: Detail::Text(detail.into()),
        }
    }

    /// A failure caused by one or more nested failures.
    ///
    /// `children` must be non-empty: an interior node without causes is a
    /// leaf and should be built with [`ErrorNode::leaf`].
    pub fn nested(
        origin: impl Into<String>,
        message: impl Into<String>,
        children: Vec<ErrorNode>,
    ) -> Self {
        debug_assert!(!children.is_empty(), "nested ErrorNode requires children");
        Self {
            origin: origin.into(),
            message: message.into(),
            detail: Detail::Nested(children),
        }
    }

    /// Wrap this node under a new origin/message, one level deeper.
    pub fn wrap(self, origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::nested(origin, message, vec![self])
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    /// Render the whole tree, one line per node, one tab per nesting level.
    ///
    /// Each node renders as `origin: "message"`; a non-empty text detail or
    /// the children follow at the next indent level. Pure and idempotent.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, indent: usize) {
        for _ in 0..indent {
            out.push('\t');
        }
        out.push_str(&self.origin);
        out.push_str(": \"");
        out.push_str(&self.message);
        out.push_str("\"\n");
        match &self.detail {
            Detail::Text(text) => {
                if !text.is_empty() {
                    for _ in 0..indent + 1 {
                        out.push('\t');
                    }
                    out.push_str(text);
                    out.push('\n');
                }
            }
            Detail::Nested(children) => {
                for child in children {
                    child.render_into(out, indent + 1);
                }
            }
        }
    }
}

impl fmt::Display for ErrorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().trim_end())
    }
}

impl std::error::Error for ErrorNode {}
