//! Filename and date reconciliation.
//!
//! Pure parsers with no filesystem or tool access:
//! - `path`: inbound path grammar → `ParsedPath`
//! - `date`: OCR text → matched date expression → `NormalizedDate`
//! - `outcome`: `ParsedPath` + date resolution → `RenameOutcome`

pub mod path;
pub mod date;
pub mod outcome;

pub use path::*;
pub use date::*;
pub use outcome::*;
