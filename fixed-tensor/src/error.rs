use fixed_storage::StorageError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TensorError {
    #[error("Out of Range: {0}")]
    OutOfRange(String),
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("Logic Error: {0}")]
    Logic(String),
    #[error("Unsupported Operation: {0}")]
    UnsupportedOperation(String),
    #[error("Storage Error: {0}")]
    Storage(#[from] StorageError),
}
