//! Struct `Record` represents one movie the tree can guess.

// Provides record struct and its serde representation.
pub(crate) mod record_struct;

// Provides a struct that reads a JSON file.
pub(crate) mod record_reader;


pub use record_struct::Record;
pub use record_reader::RecordReader;
