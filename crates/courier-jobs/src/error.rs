use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("job sheet parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type JobResult<T> = Result<T, JobError>;
