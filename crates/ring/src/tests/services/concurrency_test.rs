#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::task::JoinSet;

    use crate::{
        Ring,
        tests::test_utils::{assert_sorted, init_tracing, sample_keys},
    };

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn ring_is_send_and_sync() {
        assert_send_sync::<Ring>();
        assert_send_sync::<Arc<dyn crate::ConsistentHasherService>>();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn readers_run_alongside_membership_churn() {
        init_tracing();
        let ring = Ring::new_shared();
        for id in ["node1", "node2", "node3"] {
            ring.add_node(id);
        }

        let mut set = JoinSet::new();

        for _ in 0..4 {
            let ring = ring.clone();
            set.spawn_blocking(move || {
                let keys = sample_keys(500);
                for _ in 0..20 {
                    for key in &keys {
                        // base nodes never leave, so lookups cannot fail
                        let owner = ring.get(key).expect("ring has base nodes");
                        assert!(!owner.is_empty());
                    }
                    assert_sorted(&ring);
                }
            });
        }

        for worker in 0..2 {
            let ring = ring.clone();
            set.spawn_blocking(move || {
                for i in 0..200 {
                    let id = format!("churn-{worker}-{i}");
                    assert!(ring.add_node(&id));
                    assert_sorted(&ring);
                    ring.remove_node(&id).expect("just added");
                }
            });
        }

        while let Some(joined) = set.join_next().await {
            joined.expect("task panicked");
        }

        assert_eq!(ring.len(), 3);
        assert_sorted(&ring);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_are_all_kept() {
        let ring = Ring::new_shared();
        let mut set = JoinSet::new();

        for worker in 0..8 {
            let ring = ring.clone();
            set.spawn_blocking(move || {
                for i in 0..50 {
                    ring.add_node(&format!("w{worker}-n{i}"));
                }
            });
        }

        while let Some(joined) = set.join_next().await {
            joined.expect("task panicked");
        }

        assert_eq!(ring.len(), 400);
        assert_sorted(&ring);
        assert!(ring.contains("w7-n49"));
    }
}
