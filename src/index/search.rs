use crate::domain::error::DomainError;
use crate::index::store::VectorStore;

/// Squared Euclidean distance, accumulated in f64 so the result ordering
/// stays stable for long vectors.
fn squared_l2(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = *x as f64 - *y as f64;
            d * d
        })
        .sum()
}

/// Exact k-nearest-neighbor scan over the whole store.
///
/// Results are sorted ascending by distance, ties broken by ascending slot,
/// so ordering is deterministic. When `exclude` is set we scan for `k + 1`
/// candidates, drop the excluded slot, then truncate to `k`.
pub fn nearest(
    store: &VectorStore,
    query: &[f32],
    k: usize,
    exclude: Option<usize>,
) -> Result<Vec<(usize, f64)>, DomainError> {
    if k == 0 {
        return Err(DomainError::InvalidInput("k must be positive".into()));
    }
    if query.len() != store.dim() {
        return Err(DomainError::InvalidInput(format!(
            "query has dimension {}, index expects {}",
            query.len(),
            store.dim()
        )));
    }

    let fetch = match exclude {
        Some(_) => k.saturating_add(1),
        None => k,
    };

    let mut scored: Vec<(usize, f64)> = store
        .iter()
        .map(|(slot, v)| (slot, squared_l2(query, v)))
        .collect();
    scored.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scored.truncate(fetch);

    if let Some(skip) = exclude {
        scored.retain(|(slot, _)| *slot != skip);
    }
    scored.truncate(k);
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(vectors: &[&[f32]]) -> VectorStore {
        let mut store = VectorStore::new(vectors[0].len());
        for v in vectors {
            store.append(v).unwrap();
        }
        store
    }

    #[test]
    fn orders_by_distance_then_slot() {
        // Distances from [1,0]: slot 1 -> 2.0, slot 2 -> 1.0
        let store = store_with(&[&[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0]]);
        let hits = nearest(&store, &[1.0, 0.0], 2, Some(0)).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, 2);
        assert_eq!(hits[1].0, 1);
        assert_eq!(hits[0].1, 1.0);
        assert_eq!(hits[1].1, 2.0);
    }

    #[test]
    fn equal_distances_break_ties_by_slot() {
        let store = store_with(&[&[0.0, 1.0], &[1.0, 0.0], &[-1.0, 0.0]]);
        // Slots 1 and 2 are both at distance 1 from the origin's nearest axis
        let hits = nearest(&store, &[0.0, 0.0], 3, None).unwrap();
        let slots: Vec<usize> = hits.iter().map(|h| h.0).collect();
        assert_eq!(slots, vec![0, 1, 2]);
    }

    #[test]
    fn returns_fewer_when_store_is_small() {
        let store = store_with(&[&[1.0, 0.0], &[0.0, 1.0]]);
        let hits = nearest(&store, &[1.0, 0.0], 10, Some(0)).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 1);
    }

    #[test]
    fn max_k_with_exclusion_does_not_overflow() {
        let store = store_with(&[&[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0]]);
        let hits = nearest(&store, &[1.0, 0.0], usize::MAX, Some(0)).unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|(slot, _)| *slot != 0));
    }

    #[test]
    fn rejects_zero_k_and_bad_dimension() {
        let store = store_with(&[&[1.0, 0.0]]);
        assert!(nearest(&store, &[1.0, 0.0], 0, None).is_err());
        assert!(nearest(&store, &[1.0], 1, None).is_err());
    }

    #[test]
    fn empty_store_yields_no_hits() {
        let store = VectorStore::new(2);
        let hits = nearest(&store, &[0.0, 0.0], 5, None).unwrap();
        assert!(hits.is_empty());
    }
}
