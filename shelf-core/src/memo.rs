//! Result caching for pure functions

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::Serialize;
use tracing::debug;

use crate::Result;

/// Caches the results of a pure function.
///
/// Results are keyed by the JSON serialization of the argument, so two
/// structurally equal arguments share one cache slot.
pub struct Memoize<A, R, F>
where
    A: Serialize + ?Sized,
    R: Clone,
    F: Fn(&A) -> R,
{
    func: F,
    cache: HashMap<String, R>,
    _arg: PhantomData<fn(&A)>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Serialize + ?Sized,
    R: Clone,
    F: Fn(&A) -> R,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: HashMap::new(),
            _arg: PhantomData,
        }
    }

    /// Return the cached result for `arg`, computing it on first use.
    ///
    /// Fails only if `arg` cannot be serialized into a cache key.
    pub fn call(&mut self, arg: &A) -> Result<R> {
        let key = serde_json::to_string(arg)?;

        if let Some(result) = self.cache.get(&key) {
            debug!(key = %key, "Returning cached result");
            return Ok(result.clone());
        }

        debug!(key = %key, "Computing new result");
        let result = (self.func)(arg);
        self.cache.insert(key, result.clone());
        Ok(result)
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{search, SearchCriteria};
    use crate::store::demo_records;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn test_second_call_hits_cache() {
        let calls = Cell::new(0);
        let mut square = Memoize::new(|n: &i64| {
            calls.set(calls.get() + 1);
            n * n
        });

        assert_eq!(square.call(&4).unwrap(), 16);
        assert_eq!(square.call(&4).unwrap(), 16);
        assert_eq!(calls.get(), 1);

        assert_eq!(square.call(&5).unwrap(), 25);
        assert_eq!(calls.get(), 2);
        assert_eq!(square.len(), 2);

        square.clear();
        assert!(square.is_empty());
        assert_eq!(square.call(&4).unwrap(), 16);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_memoized_search_counts() {
        let records = demo_records();
        let mut count_matches =
            Memoize::new(|criteria: &SearchCriteria| search(&records, criteria, false).len());

        let clean = SearchCriteria::new().title("clean");
        assert_eq!(count_matches.call(&clean).unwrap(), 2);
        assert_eq!(count_matches.call(&clean.clone()).unwrap(), 2);
        assert_eq!(count_matches.len(), 1);

        let martin = SearchCriteria::new().author("Martin");
        assert_eq!(count_matches.call(&martin).unwrap(), 2);
        assert_eq!(count_matches.len(), 2);
    }
}
