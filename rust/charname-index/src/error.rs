use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn duplicate_codepoint(codepoint: u32) -> Error {
        Error(ErrorKind::DuplicateCodepoint { codepoint }.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid dataset format for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("codepoint U+{codepoint:04X} appears more than once in the dataset")]
    DuplicateCodepoint { codepoint: u32 },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Returns an [`ErrorKind::InvalidFormat`] error from the enclosing function
/// when the dataset condition does not hold.
#[macro_export]
macro_rules! verify_data {
    ($element:expr, $cond:expr) => {
        if !$cond {
            return Err($crate::error::Error::invalid_format(
                $element,
                concat!("expected ", stringify!($cond)),
            ));
        }
    };
}

/// Returns an [`ErrorKind::InvalidArgument`] error from the enclosing function
/// when the argument condition does not hold.
#[macro_export]
macro_rules! verify_arg {
    ($name:ident, $cond:expr) => {
        if !$cond {
            return Err($crate::error::Error::invalid_arg(
                stringify!($name),
                concat!("expected ", stringify!($cond)),
            ));
        }
    };
}
