//! On-chain record layout and size rationale.
//!
//! Tweet: one immutable microblog record per account. Accounts are always
//! allocated at Tweet::MAX_SIZE so every record of the schema has identical
//! byte offsets for its fixed-position fields, which is what makes memcmp
//! filtering over raw account data possible without deserializing candidates.

use anchor_lang::prelude::*;

// Size constants
pub const DISC_SIZE: usize = 8; // Anchor account discriminator
pub const PUBKEY_SIZE: usize = 32;
pub const TIMESTAMP_SIZE: usize = 8;
pub const PREFIX_SIZE: usize = 4; // borsh String length prefix (u32 LE)

// Field bounds, counted in Unicode scalar values, not bytes.
pub const MAX_TOPIC_CHARS: usize = 50;
pub const MAX_CONTENT_CHARS: usize = 280;

// UTF-8 worst case is 4 bytes per scalar value.
pub const MAX_CHAR_BYTES: usize = 4;
pub const MAX_TOPIC_BYTES: usize = MAX_TOPIC_CHARS * MAX_CHAR_BYTES; // 200
pub const MAX_CONTENT_BYTES: usize = MAX_CONTENT_CHARS * MAX_CHAR_BYTES; // 1,120

/// One microblog record. Written exactly once by `send_tweet`, never mutated.
#[account]
pub struct Tweet {
    pub author: Pubkey,
    pub timestamp: i64,
    pub topic: String,
    pub content: String,
}

impl Tweet {
    /// Account space for every Tweet, independent of actual field content.
    /// Records shorter than the worst case leave zero padding after the
    /// content field; decoding tolerates the padding.
    pub const MAX_SIZE: usize = DISC_SIZE
        + PUBKEY_SIZE
        + TIMESTAMP_SIZE
        + PREFIX_SIZE
        + MAX_TOPIC_BYTES
        + PREFIX_SIZE
        + MAX_CONTENT_BYTES; // = 1,376

    // Byte offsets of the fixed-position fields within any encoded Tweet.
    // `content` has no fixed offset: it starts right after the variable-length
    // topic bytes, so it is not addressable by memcmp filters.
    pub const AUTHOR_OFFSET: usize = DISC_SIZE;
    pub const TIMESTAMP_OFFSET: usize = Self::AUTHOR_OFFSET + PUBKEY_SIZE;
    pub const TOPIC_LEN_OFFSET: usize = Self::TIMESTAMP_OFFSET + TIMESTAMP_SIZE;
    pub const TOPIC_OFFSET: usize = Self::TOPIC_LEN_OFFSET + PREFIX_SIZE;

    /// Bounds check for the variable fields. Runs before any serialization so
    /// an oversized field is rejected rather than truncated.
    pub fn validate(topic: &str, content: &str) -> std::result::Result<(), TweetError> {
        if topic.chars().count() > MAX_TOPIC_CHARS {
            return Err(TweetError::TopicTooLong);
        }
        if content.chars().count() > MAX_CONTENT_CHARS {
            return Err(TweetError::ContentTooLong);
        }
        Ok(())
    }
}

#[error_code]
pub enum TweetError {
    #[msg("topic exceeds 50 characters")]
    TopicTooLong,
    #[msg("content exceeds 280 characters")]
    ContentTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_space_is_a_schema_constant() {
        assert_eq!(Tweet::MAX_SIZE, 1_376);
        assert_eq!(Tweet::MAX_SIZE, 8 + 32 + 8 + (4 + 200) + (4 + 1_120));
    }

    #[test]
    fn fixed_field_offsets() {
        assert_eq!(Tweet::AUTHOR_OFFSET, 8);
        assert_eq!(Tweet::TIMESTAMP_OFFSET, 40);
        assert_eq!(Tweet::TOPIC_LEN_OFFSET, 48);
        assert_eq!(Tweet::TOPIC_OFFSET, 52);
    }

    #[test]
    fn validate_accepts_boundary_lengths() {
        let topic: String = "語".repeat(MAX_TOPIC_CHARS); // 50 chars, 150 bytes
        let content: String = "x".repeat(MAX_CONTENT_CHARS);
        assert!(Tweet::validate(&topic, &content).is_ok());
        assert!(Tweet::validate("", "").is_ok());
    }

    #[test]
    fn validate_rejects_one_past_boundary() {
        let topic: String = "a".repeat(MAX_TOPIC_CHARS + 1);
        assert!(matches!(
            Tweet::validate(&topic, "hi"),
            Err(TweetError::TopicTooLong)
        ));
        let content: String = "a".repeat(MAX_CONTENT_CHARS + 1);
        assert!(matches!(
            Tweet::validate("hi", &content),
            Err(TweetError::ContentTooLong)
        ));
    }
}
