use super::{normalize_ext, record_file_name, RecordStore, DEFAULT_FILE_EXT};
use crate::error::{IngestError, Result};
use crate::model::PersonRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: DEFAULT_FILE_EXT.to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        self.file_ext = normalize_ext(ext);
        self
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    pub fn record_path(&self, surname: &str) -> PathBuf {
        self.root.join(record_file_name(surname, &self.file_ext))
    }
}

impl RecordStore for FileStore {
    fn append(&mut self, record: &PersonRecord) -> Result<PathBuf> {
        let path = self.record_path(&record.surname);
        let line = format!("{}{}", record.to_line(), LINE_ENDING);
        debug!(path = %path.display(), "appending record");

        let io_err = |source: std::io::Error| IngestError::Io {
            path: path.clone(),
            source,
        };

        // The handle lives only for this block and is closed on every exit path.
        {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(io_err)?;
            file.write_all(line.as_bytes()).map_err(io_err)?;
            file.flush().map_err(io_err)?;
        }

        info!(path = %path.display(), "record appended");
        Ok(path)
    }
}
