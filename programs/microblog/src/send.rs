//! The create instruction.
//!
//! SendTweet / handle_send_tweet: allocates a fresh Tweet account at the fixed
//! schema size and writes the record exactly once. `init` makes re-submission
//! against an existing account fail at the runtime level, so a slot is never
//! overwritten.

use anchor_lang::prelude::*;

use crate::state::Tweet;

/// Accounts for publishing one record.
#[derive(Accounts)]
pub struct SendTweet<'info> {
    #[account(init, payer = author, space = Tweet::MAX_SIZE)]
    pub tweet: Account<'info, Tweet>,

    #[account(mut)]
    pub author: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Validates the payload, stamps the record with the cluster clock and the
/// verified signer, and persists it. The account write is transactional:
/// either the whole record lands or the allocation is rolled back.
pub fn handle_send_tweet(ctx: Context<SendTweet>, topic: String, content: String) -> Result<()> {
    Tweet::validate(&topic, &content)?;

    let clock = Clock::get()?;
    let tweet = &mut ctx.accounts.tweet;
    tweet.author = ctx.accounts.author.key();
    tweet.timestamp = clock.unix_timestamp;
    tweet.topic = topic;
    tweet.content = content;
    Ok(())
}
