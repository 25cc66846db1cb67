use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitcalError>;

#[derive(Error, Debug)]
pub enum GitcalError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Signature date error: {0}")]
    SignatureDate(#[from] Box<gix::date::parse::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Ignore pattern error: {0}")]
    Ignore(#[from] ignore::Error),
    #[error("Could not determine the home directory")]
    HomeDir,
    #[error("Registry error at {}: {message}", .path.display())]
    Registry { path: PathBuf, message: String },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl From<gix::open::Error> for GitcalError {
    fn from(err: gix::open::Error) -> Self {
        GitcalError::Git(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GitcalError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GitcalError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GitcalError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GitcalError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GitcalError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GitcalError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GitcalError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GitcalError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::date::parse::Error> for GitcalError {
    fn from(err: gix::date::parse::Error) -> Self {
        GitcalError::SignatureDate(Box::new(err))
    }
}
