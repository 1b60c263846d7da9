use std::fmt;

pub type ReturnerResult<T> = Result<T, ReturnerError>;

#[derive(Debug)]
pub enum ReturnerError {
    Message(String),
    IOError(std::io::Error),
    Chain(String, Box<Self>),
    Syslog(syslog::Error),
    Json(serde_json::Error),
}

impl ReturnerError {
    pub fn msg<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Message(msg.into())
    }

    pub fn wrap<S>(msg: S, chained: Self) -> Self
    where
        S: Into<String>,
    {
        Self::Chain(msg.into(), Box::new(chained))
    }
}

pub trait ReturnerWrap<T, E> {
    /// Wrap the error value with additional context.
    fn wrap<C>(self, context: C) -> ReturnerResult<T>
    where
        C: Into<String>,
        E: Into<ReturnerError>;
}

impl<T, E> ReturnerWrap<T, E> for Result<T, E>
where
    E: Into<ReturnerError>,
{
    fn wrap<C>(self, msg: C) -> ReturnerResult<T>
    where
        C: Into<String>,
        E: Into<ReturnerError>,
    {
        match self {
            Ok(ok) => Ok(ok),
            Err(error) => Err(ReturnerError::wrap(msg, error.into())),
        }
    }
}

impl fmt::Display for ReturnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(s) => write!(f, "{s}"),
            Self::Chain(s, e) => write!(f, "{s}: {e}"),
            Self::IOError(e) => write!(f, "IO error: {e}"),
            Self::Syslog(e) => write!(f, "syslog error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ReturnerError {}

impl From<std::io::Error> for ReturnerError {
    fn from(err: std::io::Error) -> Self {
        Self::IOError(err)
    }
}

impl From<syslog::Error> for ReturnerError {
    fn from(err: syslog::Error) -> Self {
        Self::Syslog(err)
    }
}

impl From<serde_json::Error> for ReturnerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
