//! # Storage Layer
//!
//! Records are persisted through the [`RecordStore`] trait so the ingestion logic
//! never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - One plain-text file per surname: `<dir>/<surname><ext>`
//!   - Opened in append mode for every record, created when missing
//!   - The handle is closed as soon as the line is written
//!
//! - [`memory::InMemoryStore`]: storage for tests
//!   - Keeps the appended lines per file name
//!   - Can be switched into a failing mode to exercise I/O error paths
//!
//! ## Storage Format
//!
//! ```text
//! <dir>/
//! ├── Иванов.txt      # Иванов Иван Иванович 01.01.1990 1234567890 м
//! └── Smith.txt       # Smith John Doe 01.01.1990 123 м
//! ```
//!
//! There is no header, index or record count. Concurrent writers to the same file
//! get no interleaving guarantee.

use crate::error::Result;
use crate::model::PersonRecord;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub const DEFAULT_FILE_EXT: &str = ".txt";

/// Abstract interface for record persistence.
pub trait RecordStore {
    /// Append one formatted line for `record`, returning where it went.
    fn append(&mut self, record: &PersonRecord) -> Result<PathBuf>;
}

/// Normalizes an extension so it always starts with a dot.
pub fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

/// Name of the file that holds every record for `surname`.
pub fn record_file_name(surname: &str, file_ext: &str) -> String {
    format!("{}{}", surname, file_ext)
}
