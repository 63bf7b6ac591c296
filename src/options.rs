//! Configuration options for RJSON serialization.
//!
//! ## Examples
//!
//! ```rust
//! use serde_rjson::{marshal_with_options, RjsonOptions, Value};
//!
//! let mut doc = Value::object();
//! doc.set("a", Value::True);
//!
//! let options = RjsonOptions::new().with_indent(4);
//! assert_eq!(marshal_with_options(&doc, options).unwrap(), "{\n    \"a\": true\n}\n");
//! ```

/// Frame budget used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 8096;

/// Spaces per nesting level used when none is configured.
pub const DEFAULT_INDENT: usize = 2;

/// Configuration options for RJSON serialization.
///
/// `max_depth` bounds how many containers may be open at once, counting the
/// root. Exceeding it fails with [`Error::DepthExceeded`](crate::Error::DepthExceeded)
/// instead of growing without limit.
///
/// # Examples
///
/// ```rust
/// use serde_rjson::RjsonOptions;
///
/// let options = RjsonOptions::new().with_max_depth(64);
/// assert_eq!(options.indent, 2);
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RjsonOptions {
    pub indent: usize,
    pub max_depth: usize,
}

impl Default for RjsonOptions {
    fn default() -> Self {
        RjsonOptions {
            indent: DEFAULT_INDENT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RjsonOptions {
    /// Creates default options (2-space indent, 8096 frames).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the maximum number of simultaneously open frames.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
