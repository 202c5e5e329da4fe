//! # Module overview
//! Append-only microblog records stored one per account:
//! 1. state: the Tweet record layout, its size and field-offset constants
//! 2. send: the create instruction (validate, allocate once, write once)
//!
//! # Instruction set
//! send_tweet: publish one immutable record into a freshly allocated account.
//!
//! Records are never updated or deleted by this program; read-side filtering
//! happens off-chain against the fixed byte offsets exported by `state`.

#![allow(unexpected_cfgs)] // Keep until Anchor's cfg layout is simplified

use anchor_lang::prelude::*;

mod send;
pub mod state;

// Program ID
declare_id!("H4FBVtcR7yKNWJWnwK6wwEtREYaF5Vi6w9R1uHZXRw7F");

// Re-exports
pub use send::SendTweet;
pub use state::{Tweet, TweetError};

// Anchor idl-build client account module names
pub mod __client_accounts_send_tweet {
    pub use crate::SendTweet;
}

#[program]
pub mod microblog {
    use super::*;

    /// Publishes one record: `author` must sign, `topic` is capped at 50
    /// characters, `content` at 280 characters.
    pub fn send_tweet(ctx: Context<SendTweet>, topic: String, content: String) -> Result<()> {
        send::handle_send_tweet(ctx, topic, content)
    }
}
