//! File-based persistence for the wizard draft.

mod draft;

pub use draft::DraftStore;
