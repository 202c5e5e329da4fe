//! Byte-offset predicates over encoded records.
//!
//! Filters compare raw slot bytes at fixed offsets, so candidates are
//! selected without deserializing them. The offsets come from the schema
//! constants on `Tweet`; no call site repeats the offset arithmetic.

use anchor_lang::prelude::Pubkey;
use microblog::Tweet;

/// One predicate over a slot's raw bytes. A query is the conjunction of its
/// filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountFilter {
    /// Matches slots of exactly this size. Used to exclude unrelated storage
    /// before any offset predicate runs.
    DataSize(usize),
    /// Matches when `bytes` equals the slot contents starting at `offset`.
    Memcmp { offset: usize, bytes: Vec<u8> },
}

impl AccountFilter {
    /// Slots of the Tweet schema's exact allocation size.
    pub fn tweet_sized() -> Self {
        AccountFilter::DataSize(Tweet::MAX_SIZE)
    }

    /// Records whose author field equals the given identity.
    pub fn by_author(author: &Pubkey) -> Self {
        AccountFilter::Memcmp {
            offset: Tweet::AUTHOR_OFFSET,
            bytes: author.to_bytes().to_vec(),
        }
    }

    /// Records whose topic begins with the given text. The comparison starts
    /// right after the 4-byte topic length prefix, so it is a byte-prefix
    /// match on the topic's UTF-8 bytes.
    pub fn by_topic(topic: &str) -> Self {
        AccountFilter::Memcmp {
            offset: Tweet::TOPIC_OFFSET,
            bytes: topic.as_bytes().to_vec(),
        }
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            AccountFilter::DataSize(size) => data.len() == *size,
            AccountFilter::Memcmp { offset, bytes } => data
                .get(*offset..*offset + bytes.len())
                .map_or(false, |window| window == &bytes[..]),
        }
    }
}
