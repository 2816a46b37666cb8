use thiserror::Error;

use crate::registry::RegistryError;

#[derive(Debug, Error)]
pub enum SkypickError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
