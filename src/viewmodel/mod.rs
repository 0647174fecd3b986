mod details;
mod search;

pub use details::{DetailsUiState, DetailsViewModel};
pub use search::{SearchUiState, SearchViewModel};

/// A view-model holding an error message that the screen shows once.
pub trait TransientError {
    /// Return the pending error message and clear it.
    fn take_error(&self) -> Option<String>;

    /// Clear the pending error message without reading it.
    fn remove_error(&self) {
        let _ = self.take_error();
    }
}
