use thiserror::Error;

#[derive(Debug, Error)]
pub enum IlrError {
    #[error("invalid academic year code: {code}")]
    InvalidAcademicYear { code: String },
}

pub type Result<T> = std::result::Result<T, IlrError>;
