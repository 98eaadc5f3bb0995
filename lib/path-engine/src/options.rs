/// Safety ceiling applied when [`FindPathsOptions::max_path_length`] is
/// `None`, so an "unlimited" search still terminates on a pathological
/// input.
pub const DEFAULT_SAFETY_DEPTH: usize = 10_000;

/// Configuration for [`crate::find_paths`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FindPathsOptions {
    /// Cap on predicate count per witness. `None` means "unlimited", but
    /// is still bounded in practice by [`DEFAULT_SAFETY_DEPTH`].
    pub max_path_length: Option<usize>,
    /// Whether paths terminating at a literal object are retained.
    /// Default `false`: literals close a path branch but are not, by
    /// default, reported as destinations.
    pub include_literal_endpoints: bool,
}

impl FindPathsOptions {
    #[inline]
    pub(crate) fn effective_max_path_length(&self) -> usize {
        self.max_path_length.unwrap_or(DEFAULT_SAFETY_DEPTH)
    }
}

impl Default for FindPathsOptions {
    fn default() -> Self {
        Self { max_path_length: None, include_literal_endpoints: false }
    }
}
