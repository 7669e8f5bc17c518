pub mod page;
pub mod filter_bar;
pub mod table;
pub mod form;

pub use page::render_trabajos_page;
pub use form::render_trabajo_dialog;
