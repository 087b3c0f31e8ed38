mod view_model;

pub use view_model::{TranscriptViewModel, display_line};
