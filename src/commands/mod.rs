pub mod dialogs;
pub mod documents;
