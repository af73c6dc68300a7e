#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    /// Message meant to be shown back to the user as-is.
    #[error("{0}")]
    User(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

impl Error {
    /// Text that can be shown back to the user, if the error is theirs.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::User(message) => Some(message.to_owned()),
            Self::Validate(errors) => Some(
                errors
                    .field_errors()
                    .values()
                    .flat_map(|errors| errors.iter())
                    .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| errors.to_string()),
            ),
            Self::Unknown(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<sqlx_migrator::Error> for Error {
    fn from(value: sqlx_migrator::Error) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! user {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::User(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::User(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::User(format!($fmt, $($arg)*)))
    };
}
