pub mod naming; // Path grammar, date normalisation, naming policy
pub mod tools; // ocrmypdf / pdftotext / rsync behind traits
pub mod recovery; // Interim files left by interrupted runs
pub mod driver;

pub use driver::*;
