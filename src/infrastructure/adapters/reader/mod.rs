//! Document Reader Adapters

mod fs_reader;

pub use fs_reader::{decode_text, FsDocumentReader};
