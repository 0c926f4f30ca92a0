use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn empty_seq() -> Error {
        Error(ErrorKind::EmptySeq.into())
    }

    pub fn halted(source: impl Into<StdErrorBoxed>) -> Error {
        Error(
            ErrorKind::Halted {
                source: source.into(),
            }
            .into(),
        )
    }

    pub fn is_empty_seq(&self) -> bool {
        matches!(self.kind(), ErrorKind::EmptySeq)
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.kind(), ErrorKind::Halted { .. })
    }

    /// Returns the application error that halted the iteration, or `None`
    /// for any other kind of error.
    pub fn into_halted(self) -> Option<StdErrorBoxed> {
        match self.into_kind() {
            ErrorKind::Halted { source } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A terminal operation that needs at least one element found none.
    #[error("empty sequence")]
    EmptySeq,

    /// A callback aborted the traversal with an application error.
    #[error("iteration halted: {source}")]
    Halted { source: StdErrorBoxed },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
