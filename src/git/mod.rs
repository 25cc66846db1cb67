pub mod repo;

pub use repo::{CommitSource, GitRepo, GitHistory};
