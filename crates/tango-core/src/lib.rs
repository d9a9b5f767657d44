pub mod backup;
pub mod columns;
pub mod dedup;
pub mod difficulty;
pub mod error;
pub mod fix;
pub mod passage;
pub mod preprocess;
pub mod taxonomy;
pub mod validate;
pub mod vocab;

pub use error::{Result, TangoError};
pub use fix::{Fix, FixReport};
