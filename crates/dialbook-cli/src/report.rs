use anyhow::Result;
use dialbook_core::{render_report, Record, RecordDto};
use serde::Serialize;
use std::io::{self, Write};

pub fn print_text_report(records: &[Record]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_report(records).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

pub fn print_json_report(records: &[Record]) -> Result<()> {
    let items: Vec<RecordDto> = records.iter().map(RecordDto::from).collect();
    print_json(&items)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
