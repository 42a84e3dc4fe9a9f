pub mod dictionary;
pub mod loader;
pub mod processor;

pub use dictionary::LibrasDictionary;
pub use loader::LibrasLoader;
pub use processor::{LibrasProcessor, PRIMARY_LANGUAGE};
