//! Error types for client operations.
//!
//! Caller-correctable validation errors (`TopicTooLong`, `ContentTooLong`)
//! surface immediately and are never retried here. `SlotAlreadyInitialized`
//! and `NotFound` are state errors: the caller must re-query before deciding
//! to retry. `UnauthorizedAuthor` is fatal to the call. No error is retried
//! internally; retry policy belongs to the transport behind the ledger.

use anchor_lang::prelude::Pubkey;
use microblog::TweetError;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Convenience alias used by every public client API.
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("topic exceeds 50 characters")]
    TopicTooLong,

    #[error("content exceeds 280 characters")]
    ContentTooLong,

    #[error("claimed author {0} is not the verified signer")]
    UnauthorizedAuthor(Pubkey),

    #[error("slot {0} already holds a record")]
    SlotAlreadyInitialized(Pubkey),

    #[error("slot {0} holds no record of this schema")]
    NotFound(Pubkey),

    #[error("record encoding failed: {0}")]
    Encode(String),

    #[error("record decoding failed: {0}")]
    Decode(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl From<TweetError> for ClientError {
    fn from(err: TweetError) -> Self {
        match err {
            TweetError::TopicTooLong => ClientError::TopicTooLong,
            TweetError::ContentTooLong => ClientError::ContentTooLong,
        }
    }
}
