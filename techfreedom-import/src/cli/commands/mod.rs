pub mod export;
pub mod import;

pub use export::handle_export_command;
pub use import::handle_import_command;
