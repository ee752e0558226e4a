use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::parse::parse_record;
use crate::store::RecordStore;
use tracing::warn;

/// Validates one input line and appends it to the surname's file.
///
/// Nothing is written unless every field is valid.
pub fn run<S: RecordStore>(store: &mut S, line: &str) -> Result<CmdResult> {
    let record = parse_record(line).inspect_err(|e| warn!(error = %e, "rejected input line"))?;
    let path = store.append(&record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(record.to_line()));
    result.add_message(CmdMessage::success(format!(
        "Данные записаны в файл {}",
        path.display()
    )));
    Ok(result.with_record(record, path))
}
