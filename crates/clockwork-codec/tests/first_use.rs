//! Concurrent first use of the shared move table.
//!
//! Kept in its own test binary so no other test touches the table first: the
//! threads below are the first callers in the process.

use std::sync::Barrier;
use std::thread;

use clockwork_codec::MoveTable;

const THREADS: usize = 8;

/// All threads are released together into an unbuilt table. Every caller
/// must get the same `&'static` table, fully populated and equal to a fresh
/// generation. That the generator body runs once is the `OnceLock` contract;
/// this checks what callers can observe of it: one address, no partial
/// table.
#[test]
fn racing_first_callers_share_one_complete_table() {
    let barrier = Barrier::new(THREADS);
    let seen: Vec<(usize, usize)> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    let table = MoveTable::global();
                    (table as *const MoveTable as usize, table.len())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let (address, len) = seen[0];
    for &(other, other_len) in &seen {
        assert_eq!(other, address, "threads saw different tables");
        assert_eq!(other_len, 1924, "a thread saw a partial table");
    }
    assert_eq!(len, 1924);
    assert!(std::ptr::eq(MoveTable::global(), MoveTable::build()));
    assert_eq!(*MoveTable::global(), MoveTable::generate());
}
