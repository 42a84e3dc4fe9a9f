pub mod compose;
pub mod dictionary;
pub mod language;
pub mod matcher;
pub mod preprocess;
pub mod state;
pub mod types;
