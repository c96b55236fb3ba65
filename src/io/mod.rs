pub mod paths;

pub use paths::{resolve_data_file, BookshelfPaths};
