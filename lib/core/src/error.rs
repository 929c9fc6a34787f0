use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Title not found: {0}")]
    TitleNotFound(String),

    #[error("Invalid catalog: {0}")]
    Catalog(String),
}
