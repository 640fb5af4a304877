use crate::records::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    pub name: String,
    pub number: String,
    pub digits: String,
}

impl From<&Record> for RecordDto {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            number: record.number.to_string(),
            digits: record.number.digits().to_string(),
        }
    }
}
