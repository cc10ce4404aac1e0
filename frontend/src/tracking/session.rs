use crate::config;
use crate::storage::{KeyValueStore, StorageError};

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Nine base36 digits taken from the fractional part of `entropy` (expected in `[0, 1)`).
fn base36_suffix(entropy: f64) -> String {
    let mut fraction = entropy.fract().abs();
    let mut suffix = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        fraction *= 36.0;
        let digit = (fraction.floor() as usize).min(35);
        suffix.push(BASE36[digit] as char);
        fraction -= digit as f64;
    }
    suffix
}

pub fn mint_session_id(epoch_ms: i64, entropy: f64) -> String {
    format!("session_{}_{}", epoch_ms, base36_suffix(entropy))
}

/// Returns the session id already held by `store`, or mints one and stores it.
///
/// If the store cannot be written the minted id is still returned; it just
/// won't survive a reload.
pub fn resolve_session_id<S: KeyValueStore + ?Sized>(
    store: &S,
    epoch_ms: i64,
    entropy: f64,
) -> Result<String, StorageError> {
    if let Some(existing) = store.get(config::SESSION_ID_KEY)?.filter(|id| !id.is_empty()) {
        return Ok(existing);
    }

    let minted = mint_session_id(epoch_ms, entropy);
    if let Err(e) = store.set(config::SESSION_ID_KEY, &minted) {
        log::warn!("Session id not persisted: {}", e);
    }
    Ok(minted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn minted_id_has_expected_shape() {
        let id = mint_session_id(1_700_000_000_123, 0.123_456_789);
        let rest = id.strip_prefix("session_1700000000123_").unwrap();
        assert_eq!(rest.len(), 9);
        assert!(rest.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn suffix_depends_on_entropy() {
        assert_ne!(base36_suffix(0.25), base36_suffix(0.75));
        assert_eq!(base36_suffix(0.0), "000000000");
    }

    #[test]
    fn id_is_reused_within_a_session() {
        let store = MemoryStore::default();
        let first = resolve_session_id(&store, 1, 0.5).unwrap();
        let second = resolve_session_id(&store, 2, 0.9).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.raw(config::SESSION_ID_KEY), Some(first));
    }

    #[test]
    fn unwritable_store_still_yields_an_id() {
        let store = MemoryStore::rejecting_writes();
        let id = resolve_session_id(&store, 42, 0.5).unwrap();
        assert!(id.starts_with("session_42_"));
    }
}
