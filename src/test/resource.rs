use crate::sim::{Acquire, ProcessId, Resource, ResourceId, SimError};

const RID: ResourceId = ResourceId(0);

#[test]
fn zero_capacity_is_rejected() {
    assert!(matches!(Resource::new(0), Err(SimError::ZeroCapacity)));
}

#[test]
fn grants_until_full_then_queues_in_arrival_order() {
    let mut r = Resource::new(1).expect("resource");
    assert_eq!(r.acquire(ProcessId(1)), Acquire::Granted);
    assert!(r.is_full());
    assert_eq!(r.acquire(ProcessId(2)), Acquire::Enqueued);
    assert_eq!(r.acquire(ProcessId(3)), Acquire::Enqueued);

    assert_eq!(r.in_use(), 1);
    assert_eq!(r.queue_len(), 2);
    assert_eq!(
        r.waiters().collect::<Vec<_>>(),
        vec![ProcessId(2), ProcessId(3)]
    );
}

#[test]
fn release_hands_capacity_to_queue_head() {
    let mut r = Resource::new(1).expect("resource");
    r.acquire(ProcessId(1));
    r.acquire(ProcessId(2));
    r.acquire(ProcessId(3));

    assert_eq!(r.release(RID, ProcessId(1)), Ok(Some(ProcessId(2))));
    assert!(r.holds(ProcessId(2)));
    assert_eq!(r.in_use(), 1);

    assert_eq!(r.release(RID, ProcessId(2)), Ok(Some(ProcessId(3))));
    assert_eq!(r.release(RID, ProcessId(3)), Ok(None));
    assert_eq!(r.in_use(), 0);
    assert_eq!(r.queue_len(), 0);
}

#[test]
fn release_by_non_holder_is_rejected_and_leaves_state_intact() {
    let mut r = Resource::new(1).expect("resource");
    r.acquire(ProcessId(1));
    r.acquire(ProcessId(2));

    assert_eq!(
        r.release(RID, ProcessId(2)),
        Err(SimError::NotHolder {
            pid: ProcessId(2),
            rid: RID
        })
    );
    assert!(r.holds(ProcessId(1)));
    assert_eq!(r.queue_len(), 1);
}

#[test]
fn larger_capacity_admits_several_holders() {
    let mut r = Resource::new(2).expect("resource");
    assert_eq!(r.acquire(ProcessId(1)), Acquire::Granted);
    assert_eq!(r.acquire(ProcessId(2)), Acquire::Granted);
    assert_eq!(r.acquire(ProcessId(3)), Acquire::Enqueued);
    assert_eq!(r.capacity(), 2);
    assert_eq!(r.release(RID, ProcessId(2)), Ok(Some(ProcessId(3))));
    assert!(r.holds(ProcessId(1)) && r.holds(ProcessId(3)));
}
