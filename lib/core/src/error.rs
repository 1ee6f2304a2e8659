use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid rating {rating} for user {user}, item {item}: ratings must be finite")]
    InvalidRating { user: String, item: String, rating: f64 },
}
