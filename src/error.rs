/// Engine-level errors
///
/// The harmony and scoring functions are total and infallible; errors only
/// arise at the orchestration boundary (empty wardrobe, bad request
/// parameters, or a failing wardrobe collaborator).
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not enough items: {0}")]
    NotEnoughItems(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Wardrobe error: {0}")]
    Wardrobe(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;
