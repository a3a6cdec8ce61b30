use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dispatch_reflection::testing::{FakeNode, RecordBuilder, reflection_data};
use dispatch_reflection::{RawValue, list_all};

/// Raw data of a cache that has grown to `n` instances.
fn cache_with(n: i64) -> RawValue {
    let mut record = RecordBuilder::new("doCached").active();
    for i in 0..n {
        record = record.instance([RawValue::from(i)]);
    }
    reflection_data([record.build(), RecordBuilder::new("doGeneric").build()])
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_snapshots_while_node_specializes() {
    let node = Arc::new(FakeNode::new(cache_with(0)));
    let done = Arc::new(AtomicBool::new(false));

    let writer = {
        let node = node.clone();
        let done = done.clone();
        tokio::spawn(async move {
            for n in 1..=200 {
                node.set_data(cache_with(n % 8));
                tokio::task::yield_now().await;
            }
            done.store(true, Ordering::Release);
        })
    };

    let mut readers = Vec::new();
    for _ in 0..3 {
        let node = node.clone();
        let done = done.clone();
        readers.push(tokio::spawn(async move {
            let mut taken = 0usize;
            while !done.load(Ordering::Acquire) || taken == 0 {
                let snapshot = list_all(&*node).unwrap();
                assert_eq!(snapshot.len(), 2);
                let cached = &snapshot[0];
                assert!(cached.is_active());
                assert!(cached.instances() >= 1);
                for (i, values) in cached.cached_instances().enumerate() {
                    if !values.is_empty() {
                        assert_eq!(values, [RawValue::from(i as i64)]);
                    }
                }
                taken += 1;
                tokio::task::yield_now().await;
            }
            taken
        }));
    }

    writer.await.unwrap();
    for reader in readers {
        assert!(reader.await.unwrap() > 0);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_snapshot_is_shareable_across_tasks() {
    let node = FakeNode::new(cache_with(3));
    let snapshot = list_all(&node).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let snapshot = snapshot.clone();
            tokio::spawn(async move { snapshot[0].instances() })
        })
        .collect();

    node.set_data(cache_with(5));

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 3);
    }
    assert_eq!(list_all(&node).unwrap()[0].instances(), 5);
}
