//! # Module overview
//! Off-chain side of the microblog record store:
//! 1. ledger: the storage collaborator (allocate once, write once, scan by size)
//! 2. filter: byte-offset predicates over encoded records
//! 3. collab: identity verification and clock handles
//! 4. client: publish / fetch / query operations
//!
//! The record layout itself lives in the `microblog` program crate; this
//! crate reads and writes that layout through the account codec the program
//! exports, so the two sides stay byte-for-byte compatible.

pub mod client;
pub mod collab;
pub mod error;
pub mod filter;
pub mod ledger;

pub use client::MicroblogClient;
pub use collab::{AllowListVerifier, FixedClock, SignatureVerifier, SystemClock, UnixClock};
pub use error::{ClientError, Result};
pub use filter::AccountFilter;
pub use ledger::{Ledger, LedgerError, MemoryLedger, SlotId};

pub use microblog::{Tweet, TweetError};
