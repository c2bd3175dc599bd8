pub mod fields;

pub use fields::{NewSubmission, ValidSubmission};
