use revolve_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("Invalid carousel configuration: {0}")]
    Config(#[from] ModelError),

    #[error("Carousel has no attached host")]
    NotAttached,

    #[error("Carousel is already attached to a host")]
    AlreadyAttached,

    #[error("Items can only be registered before the carousel is attached")]
    ItemsFrozen,

    #[error("No carousel item at index {0}")]
    UnknownItem(usize),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
