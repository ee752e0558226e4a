use crate::model::Field;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a single ingestion can fail. Exactly one of these is reported per
/// rejected line, and none of them leaves anything on disk.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Необходимо ввести ровно 6 элементов!")]
    MalformedInput,

    #[error("{0} не может быть пустым.")]
    EmptyField(Field),

    #[error("Неверная дата рождения '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Неверный номер телефона '{input}': {reason}")]
    InvalidPhoneNumber { input: String, reason: String },

    #[error("Пол должен быть либо 'м'/'ж' или 'm'/'f'")]
    InvalidGender(String),

    #[error("Не удалось записать файл {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
