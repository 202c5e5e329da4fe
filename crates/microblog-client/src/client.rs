//! Caller-facing operations: publish one record, fetch one record, query by
//! byte-offset predicates.

use anchor_lang::prelude::Pubkey;
use anchor_lang::{AccountDeserialize, AccountSerialize};
use microblog::Tweet;
use tracing::debug;

use crate::collab::{SignatureVerifier, UnixClock};
use crate::error::{ClientError, Result};
use crate::filter::AccountFilter;
use crate::ledger::{Ledger, LedgerError, SlotId};

/// Client over a ledger, an identity verifier, and a clock. Holds no other
/// state; every call is one atomic round trip against the ledger.
pub struct MicroblogClient<L, V, C> {
    ledger: L,
    verifier: V,
    clock: C,
}

impl<L, V, C> MicroblogClient<L, V, C>
where
    L: Ledger,
    V: SignatureVerifier,
    C: UnixClock,
{
    pub fn new(ledger: L, verifier: V, clock: C) -> Self {
        Self {
            ledger,
            verifier,
            clock,
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Publishes one record into a freshly chosen slot.
    pub fn send_tweet(&self, author: Pubkey, topic: &str, content: &str) -> Result<SlotId> {
        self.send_tweet_to(SlotId::new_unique(), author, topic, content)
    }

    /// Publishes one record into a caller-chosen slot. Checks run in order:
    /// topic bound, content bound, author authorization; only then is the
    /// slot allocated and written, so a rejected call leaves the slot
    /// untouched. Not idempotent: a second call against the same slot fails
    /// with `SlotAlreadyInitialized` and the stored record is unchanged.
    pub fn send_tweet_to(
        &self,
        slot: SlotId,
        author: Pubkey,
        topic: &str,
        content: &str,
    ) -> Result<SlotId> {
        Tweet::validate(topic, content)?;

        // Authorization payload: topic length prefix, topic bytes, content bytes.
        let mut payload = Vec::with_capacity(4 + topic.len() + content.len());
        payload.extend_from_slice(&(topic.len() as u32).to_le_bytes());
        payload.extend_from_slice(topic.as_bytes());
        payload.extend_from_slice(content.as_bytes());
        if !self.verifier.verify_signature(&author, &payload) {
            return Err(ClientError::UnauthorizedAuthor(author));
        }

        let tweet = Tweet {
            author,
            timestamp: self.clock.current_time(),
            topic: topic.to_owned(),
            content: content.to_owned(),
        };
        let mut encoded = Vec::with_capacity(Tweet::MAX_SIZE);
        tweet
            .try_serialize(&mut encoded)
            .map_err(|err| ClientError::Encode(err.to_string()))?;

        self.ledger
            .allocate_slot(slot, Tweet::MAX_SIZE, author)
            .map_err(|err| match err {
                LedgerError::AlreadyAllocated(s) => ClientError::SlotAlreadyInitialized(s),
                other => ClientError::Ledger(other),
            })?;
        self.ledger.write_slot(slot, &encoded)?;
        Ok(slot)
    }

    /// Direct decode of one known slot. Absent, uninitialized, and
    /// wrong-schema slots all surface as `NotFound`.
    pub fn get_tweet(&self, slot: SlotId) -> Result<Tweet> {
        let data = self
            .ledger
            .read_slot(slot)
            .ok_or(ClientError::NotFound(slot))?;
        decode_tweet(slot, &data).ok_or(ClientError::NotFound(slot))
    }

    /// Records matching every given filter, decoded lazily. The exact-size
    /// predicate always applies first, so slots of other schemas are excluded
    /// before any offset comparison. Slots whose bytes fail the tag or bounds
    /// checks are skipped; the scan never aborts on them.
    pub fn query_tweets<'a>(
        &'a self,
        filters: &'a [AccountFilter],
    ) -> impl Iterator<Item = (SlotId, Tweet)> + 'a {
        self.ledger
            .scan_slots(Some(Tweet::MAX_SIZE))
            .into_iter()
            .filter(|(_, data)| filters.iter().all(|f| f.matches(data)))
            .filter_map(|(slot, data)| decode_tweet(slot, &data).map(|tweet| (slot, tweet)))
    }
}

/// Schema-checked decode. `None` means the slot holds no record of this
/// schema (bad tag, truncated field, or never written).
fn decode_tweet(slot: SlotId, data: &[u8]) -> Option<Tweet> {
    match Tweet::try_deserialize(&mut &data[..]) {
        Ok(tweet) => Some(tweet),
        Err(err) => {
            debug!(%slot, %err, "skipping slot: not a record of this schema");
            None
        }
    }
}
