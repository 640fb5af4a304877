use crate::domain::{validate, PhoneNumber};
use crate::error::{RecordError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// One `name<TAB>number` pair per line.
    #[default]
    Tsv,
    /// An array of `{"name": ..., "number": ...}` objects.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub number: PhoneNumber,
}

impl Record {
    pub fn report_line(&self) -> String {
        format!("{}\t{}", self.number, self.name)
    }
}

/// Reads every record from `path`, drops the ones whose number does not
/// validate, and returns the rest in ascending number order.
///
/// Only failures to read the file, or a JSON document that is not an array,
/// are reported. A bad line never fails the load.
pub fn load_records(path: &Path, format: InputFormat) -> Result<Vec<Record>> {
    let data = fs::read_to_string(path).map_err(|source| RecordError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut records = parse_records(&data, format)?;
    sort_records(&mut records);
    Ok(records)
}

pub fn parse_records(data: &str, format: InputFormat) -> Result<Vec<Record>> {
    match format {
        InputFormat::Tsv => Ok(parse_tsv(data)),
        InputFormat::Json => parse_json(data),
    }
}

/// Lines end at `\n`, `\r\n`, or a lone `\r`.
pub fn parse_tsv(data: &str) -> Vec<Record> {
    data.split(['\n', '\r']).filter_map(parse_tsv_line).collect()
}

fn parse_tsv_line(line: &str) -> Option<Record> {
    let mut fields = line.trim().split('\t');
    let name = fields.next()?;
    let raw = fields.next()?;
    let number = validate(raw).ok()?;
    Some(Record {
        name: name.to_string(),
        number,
    })
}

pub fn parse_json(data: &str) -> Result<Vec<Record>> {
    let document: Value =
        serde_json::from_str(data).map_err(|err| RecordError::Parse(err.to_string()))?;
    let Value::Array(entries) = document else {
        return Err(RecordError::Parse(
            "expected a JSON array of records".to_string(),
        ));
    };
    Ok(entries.into_iter().filter_map(parse_json_entry).collect())
}

fn parse_json_entry(entry: Value) -> Option<Record> {
    let Value::Object(mut fields) = entry else {
        return None;
    };
    let Value::String(name) = fields.remove("name")? else {
        return None;
    };
    let raw = fields.remove("number").unwrap_or(Value::Null);
    let number = validate(raw).ok()?;
    Some(Record { name, number })
}

/// Stable: records sharing a number keep their input order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| a.number.cmp(&b.number));
}

pub fn render_report(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.report_line());
        out.push('\n');
    }
    out
}
