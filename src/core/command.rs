use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    Access {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Unavailable {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Access { message, .. } => message,
            CommandError::DuplicateKey { message } => message,
            CommandError::NotFound { message } => message,
            CommandError::Unavailable { message, .. } => message,
            CommandError::Runtime { message, .. } => message,
            CommandError::Serialization { message } => message,
            CommandError::Validation { message, .. } => message,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::CurrentlyUnavailable { message, reason_code } => {
                CommandError::Unavailable { message, reason_code }
            }
            LibraryError::NotGranted { message, reason_code } => {
                CommandError::Access { message, reason_code }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_map_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::not_found("x")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::unavailable("x", None)), CommandError::Unavailable { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_granted("x", None)), CommandError::Access { .. }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("x")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("x", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("x")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("x", None)), CommandError::Runtime { .. }));
    }

    #[test]
    fn test_should_keep_message() {
        let err = CommandError::from(LibraryError::not_found("Invalid member or book ID."));
        assert_eq!("Invalid member or book ID.", err.message());
        assert_eq!("Invalid member or book ID.", err.to_string());
    }
}
