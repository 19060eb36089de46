pub mod dictionary;
pub mod inflection;
pub mod loader;
pub mod processor;

pub use dictionary::AlabamaDictionary;
pub use inflection::{InflectedForm, Person};
pub use loader::AlabamaLoader;
pub use processor::AlabamaProcessor;
