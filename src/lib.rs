pub mod catalog;
pub mod cli;
pub mod error;
pub mod io;
pub mod store;

pub use catalog::{Catalog, CheckoutOutcome, DeleteOutcome, Record, ReturnOutcome};
pub use error::{BookshelfError, Result};
