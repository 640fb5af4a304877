pub mod domain;
pub mod dto;
pub mod error;
pub mod records;

pub use domain::*;
pub use dto::*;
pub use error::{RecordError, ValidationError, ValidationErrorKind};
pub use records::{load_records, parse_records, render_report, sort_records, InputFormat, Record};
