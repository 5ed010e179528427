use thiserror::Error;

/// Errors returned by [`crate::try_sort_with_buffer`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SortError {
    #[error("scratch buffer holds {actual} elements, sort needs {needed}")]
    ScratchTooSmall { needed: usize, actual: usize },
}
