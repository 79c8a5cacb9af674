/// A single `Allow` or `Disallow` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    path: String,
    allow: bool,
}

impl Rule {
    pub fn new(path: impl Into<String>, allow: bool) -> Self {
        Self {
            path: path.into(),
            allow,
        }
    }

    pub fn allow(path: impl Into<String>) -> Self {
        Self::new(path, true)
    }

    pub fn disallow(path: impl Into<String>) -> Self {
        Self::new(path, false)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_allow(&self) -> bool {
        self.allow
    }

    /// Literal prefix test, no `*` or `$` pattern syntax.
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(self.path.as_str())
    }
}
