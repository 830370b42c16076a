/// Detailed cause of a [`BuildError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// A scheme outside the set of well-known schemes.
    InvalidScheme,
    /// A host that is empty or contains no `.`.
    InvalidHost,
    /// A port whose decimal representation is not four digits long.
    InvalidPort,
    /// A build attempted while no host is set.
    MissingHost,
}

/// An error occurred when validating or serializing builder state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildError {
    pub(crate) kind: BuildErrorKind,
}

impl BuildError {
    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> BuildErrorKind {
        self.kind
    }
}

impl std::error::Error for BuildError {}
