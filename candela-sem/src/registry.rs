//! Ordered collection of test cases.
//!
//! Test cases declared with `#[case]` are submitted to a process-wide
//! collection before `main` starts (through `inventory`), and
//! [Registry::declared] gathers them. A [Registry] can also be filled
//! by hand through [Registry::register].

use std::fmt;

use crate::check::FailureCallback;

/// Body of a test case.
pub type Body = Box<dyn Fn(&dyn FailureCallback)>;

/// Static declaration of a test case, as emitted by `#[case]`.
#[derive(Debug, Clone, Copy)]
pub struct Declaration {
    /// Name of the function.
    pub name: &'static str,
    /// File of the declaration.
    pub file: &'static str,
    /// Line of the declaration.
    pub line: u32,
    /// The test case itself.
    pub body: fn(&dyn FailureCallback),
}

impl Declaration {
    /// Usable in a `static`, which is where `inventory` stores it.
    #[must_use]
    pub const fn new(
        name: &'static str,
        file: &'static str,
        line: u32,
        body: fn(&dyn FailureCallback),
    ) -> Self {
        Self {
            name,
            file,
            line,
            body,
        }
    }
}

inventory::collect!(Declaration);

/// One registered test case.
pub struct Entry {
    /// Not necessarily unique.
    name: String,
    /// Callable that runs every assertion of the case.
    body: Body,
}

impl Entry {
    /// Name under which the case was registered.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the case, reporting failures to `fail`.
    pub fn invoke(&self, fail: &dyn FailureCallback) {
        (self.body)(fail);
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("name", &self.name).finish()
    }
}

/// Test cases in execution order.
///
/// Entries are only ever appended: there is no removal, and duplicate
/// names are kept (both run).
#[derive(Debug, Default)]
pub struct Registry {
    /// In insertion order.
    entries: Vec<Entry>,
}

impl Registry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a test case.
    pub fn register<F>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn(&dyn FailureCallback) + 'static,
    {
        self.entries.push(Entry {
            name: name.into(),
            body: Box::new(body),
        });
    }

    /// Every test case declared with `#[case]` in this program.
    ///
    /// The order is source order: by file path, then by line.
    /// The order in which `inventory` hands out declarations is unspecified,
    /// so it is never relied upon.
    #[must_use]
    pub fn declared() -> Self {
        let mut decls: Vec<&Declaration> = Vec::new();
        for decl in inventory::iter::<Declaration> {
            decls.push(decl);
        }
        decls.sort_by_key(|decl| (decl.file, decl.line));
        let mut registry = Self::new();
        for decl in decls {
            registry.register(decl.name, decl.body);
        }
        tracing::debug!(count = registry.len(), "collected declared test cases");
        registry
    }

    /// Number of test cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no test cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
