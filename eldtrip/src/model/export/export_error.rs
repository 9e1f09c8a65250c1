use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failure writing CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failure writing output: {0}")]
    Io(#[from] std::io::Error),
    #[error("exported text is not valid UTF-8: {0}")]
    Encoding(String),
}
