use thiserror::Error;

use crate::ledger::StoreError;

/// Crate-wide error taxonomy.
///
/// `InvalidParameter` covers malformed caller input and is never retried.
/// `Store` wraps a failure of the ledger collaborator: award and read
/// operations propagate it to the caller unchanged, while milestone checking
/// catches it and degrades to a no-op (see
/// [`AwardCoordinator::check_and_award_streak_milestone`](crate::award::AwardCoordinator::check_and_award_streak_milestone)).
#[derive(Error, Debug)]
pub enum XpError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, XpError>;
