use crate::model::CaseId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Issues identifiers that are unique for the lifetime of one allocator.
///
/// Ids look like `tc-<unix-millis>-<seq>`. The sequence number alone
/// guarantees uniqueness within an instance; the millisecond prefix keeps
/// ids recognizable across sessions. If the clock reports a pre-epoch time
/// or the sequence is exhausted, a random v4 UUID id is issued instead.
#[derive(Debug, Default)]
pub struct IdAllocator {
    seq: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> CaseId {
        let n = self.seq.fetch_add(1, Ordering::Relaxed);
        if n == u64::MAX {
            return random_id();
        }
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => CaseId::new(format!("tc-{}-{}", elapsed.as_millis(), n)),
            Err(_) => random_id(),
        }
    }

    /// Raises the sequence floor past an already-issued id, so a store
    /// rehydrated from persisted records never re-issues a live id.
    pub fn seed_past(&self, existing: &CaseId) {
        if let Some(seq) = trailing_seq(existing.as_str()) {
            self.seq.fetch_max(seq.saturating_add(1), Ordering::Relaxed);
        }
    }
}

fn trailing_seq(raw: &str) -> Option<u64> {
    let (prefix, seq) = raw.rsplit_once('-')?;
    if !prefix.starts_with("tc-") {
        return None;
    }
    seq.parse().ok()
}

fn random_id() -> CaseId {
    CaseId::new(format!("tc-{}", uuid::Uuid::new_v4()))
}
