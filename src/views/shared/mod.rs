pub mod dialog;
pub mod fields;

pub use dialog::render_dialog;
pub use fields::{button, select_field, text_field, SelectOption};
