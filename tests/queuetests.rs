use FifoQueueMini::core::config::CompactionPolicy;
use FifoQueueMini::core::queue::FifoQueue;
use FifoQueueMini::core::ticket::{Priority, Ticket};

fn sample_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new("Wireframe Tinder for dogs", Priority::Low),
        Ticket::new("Set up 45 monitor", Priority::Medium),
        Ticket::new("There is smoke coming out of my computer", Priority::High),
        Ticket::new("Put googly eyes on roomba", Priority::Low),
    ]
}

#[test]
fn test_dequeue_preserves_fifo_order() {
    let mut queue = FifoQueue::new();
    for i in 0..10 {
        queue.enqueue(i);
    }
    for i in 0..4 {
        assert_eq!(queue.dequeue(), Some(i));
    }
    queue.enqueue(10);
    queue.enqueue(11);
    let rest: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(rest, (4..12).collect::<Vec<_>>());
}

#[test]
fn test_count_tracks_enqueues_minus_successful_dequeues() {
    let mut queue = FifoQueue::new();
    let mut expected = 0usize;
    for round in 0..200u32 {
        if round % 3 == 2 {
            if queue.dequeue().is_some() {
                expected -= 1;
            }
        } else {
            queue.enqueue(round);
            expected += 1;
        }
        assert_eq!(queue.len(), expected);
        assert_eq!(queue.is_empty(), expected == 0);
    }
}

#[test]
fn test_dequeue_on_empty_returns_none() {
    let mut queue: FifoQueue<String> = FifoQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.len(), 0);

    queue.enqueue("only".to_string());
    assert_eq!(queue.dequeue().as_deref(), Some("only"));
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.len(), 0);
    assert!(queue.peek().is_none());
}

#[test]
fn test_tickets_dequeue_in_arrival_order_regardless_of_priority() {
    let mut queue: FifoQueue<Ticket> = sample_tickets().into_iter().collect();

    let priorities: Vec<Priority> = std::iter::from_fn(|| queue.dequeue())
        .map(|t| t.priority)
        .collect();
    assert_eq!(
        priorities,
        vec![Priority::Low, Priority::Medium, Priority::High, Priority::Low]
    );
}

#[test]
fn test_sorting_by_descending_priority_is_stable() {
    let queue: FifoQueue<Ticket> = sample_tickets().into_iter().collect();

    let sorted = queue.sorted_by(Ticket::by_descending_priority);
    let descriptions: Vec<&str> = sorted.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "There is smoke coming out of my computer",
            "Set up 45 monitor",
            "Wireframe Tinder for dogs",
            "Put googly eyes on roomba",
        ]
    );

    // Sorting works on a snapshot; the queue keeps its order
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.peek().map(|t| t.priority), Some(Priority::Low));
}

#[test]
fn test_sixty_in_twenty_out_compacts() {
    let mut queue = FifoQueue::new();
    for i in 0..60 {
        queue.enqueue(i);
    }
    for i in 0..15 {
        assert_eq!(queue.dequeue(), Some(i));
    }
    // 15/60 is exactly a quarter, not above it
    assert_eq!(queue.compactions(), 0);
    assert_eq!(queue.storage_len(), 60);

    assert_eq!(queue.dequeue(), Some(15));
    assert_eq!(queue.compactions(), 1);
    assert_eq!(queue.storage_len(), 44);

    for i in 16..20 {
        assert_eq!(queue.dequeue(), Some(i));
    }
    assert_eq!(queue.len(), 40);
    assert_eq!(queue.storage_len(), 44);
    let remaining: Vec<i32> = queue.iter().copied().collect();
    assert_eq!(remaining, (20..60).collect::<Vec<_>>());
}

#[test]
fn test_small_queue_never_compacts() {
    let mut queue = FifoQueue::new();
    for i in 0..50 {
        queue.enqueue(i);
    }
    for _ in 0..49 {
        queue.dequeue();
    }
    assert_eq!(queue.compactions(), 0);
    assert_eq!(queue.storage_len(), 50);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.dequeue(), Some(49));
}

#[test]
fn test_compaction_is_invisible_to_order_and_count() {
    let mut queue = FifoQueue::new();
    let mut next_out = 0u64;
    let mut next_in = 0u64;
    for _ in 0..20 {
        for _ in 0..30 {
            queue.enqueue(next_in);
            next_in += 1;
        }
        for _ in 0..25 {
            assert_eq!(queue.dequeue(), Some(next_out));
            next_out += 1;
        }
        assert_eq!(queue.len() as u64, next_in - next_out);
        // Tombstones stay bounded once storage passes the minimum
        let waste = queue.storage_len() - queue.len();
        assert!(queue.storage_len() <= 50 || waste * 4 <= queue.storage_len());
    }
    assert!(queue.compactions() > 0);
    let rest: Vec<u64> = queue.into_iter().collect();
    assert_eq!(rest, (next_out..next_in).collect::<Vec<_>>());
}

#[test]
fn test_iteration_is_restartable_and_skips_removed_items() {
    let mut queue = FifoQueue::new();
    for word in ["a", "b", "c", "d"] {
        queue.enqueue(word);
    }
    queue.dequeue();

    let first: Vec<&str> = queue.iter().copied().collect();
    let second: Vec<&str> = (&queue).into_iter().copied().collect();
    assert_eq!(first, vec!["b", "c", "d"]);
    assert_eq!(first, second);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_custom_policy_changes_threshold() {
    let policy = CompactionPolicy::new(4, 0.5).expect("valid policy");
    let mut queue = FifoQueue::with_policy(policy);
    queue.extend(0..6);

    assert_eq!(queue.dequeue(), Some(0));
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.compactions(), 0);
    // 4 of 6 slots are tombstones
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.compactions(), 1);
    assert_eq!(queue.storage_len(), 2);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![4, 5]);
}

#[test]
fn test_iter_reports_exact_length_and_runs_backwards() {
    let mut queue: FifoQueue<u32> = (0..70).collect();
    for _ in 0..30 {
        queue.dequeue();
    }
    assert!(queue.compactions() > 0);

    let mut iter = queue.iter();
    assert_eq!(iter.len(), 40);
    assert_eq!(iter.size_hint(), (40, Some(40)));
    assert_eq!(iter.next(), Some(&30));
    assert_eq!(iter.next_back(), Some(&69));
    assert_eq!(iter.len(), 38);

    let backwards: Vec<u32> = queue.iter().rev().copied().collect();
    assert_eq!(backwards, (30..70).rev().collect::<Vec<_>>());
}
