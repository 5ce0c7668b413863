/// Benchmark for credential store throughput
///
/// Measures save/load/clear cycles against the session (memory) and
/// persistent (sled) storage areas.

use placement::{CredentialStore, Role, SessionProvider, StorageScope, UserRecord};
use serde_json::json;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const ITERATIONS: usize = 2000;

struct Timings {
    save: Duration,
    load: Duration,
    clear: Duration,
}

fn run(store: &CredentialStore) -> Timings {
    let user = UserRecord::new(json!({"name": "Bench User", "email": "bench@college.test"}));

    let start = Instant::now();
    for i in 0..ITERATIONS {
        let role = Role::ALL[i % Role::ALL.len()];
        store
            .save(role, &format!("token-{}", i), &user)
            .expect("Failed to save session");
    }
    let save = start.elapsed();

    let start = Instant::now();
    for i in 0..ITERATIONS {
        let role = Role::ALL[i % Role::ALL.len()];
        let _session = store.load(role);
    }
    let load = start.elapsed();

    let start = Instant::now();
    for i in 0..ITERATIONS {
        store.clear(Role::ALL[i % Role::ALL.len()]);
    }
    let clear = start.elapsed();

    Timings { save, load, clear }
}

fn report(label: &str, timings: &Timings) {
    let rate = |d: Duration| ITERATIONS as f64 / d.as_secs_f64();
    println!("📊 {}:", label);
    println!("  save:  {:?} ({:.0} ops/sec)", timings.save, rate(timings.save));
    println!("  load:  {:?} ({:.0} ops/sec)", timings.load, rate(timings.load));
    println!("  clear: {:?} ({:.0} ops/sec)", timings.clear, rate(timings.clear));
    println!();
}

fn main() {
    println!("=== Credential Store Throughput Benchmark ===\n");

    let memory = CredentialStore::in_memory();
    report("Session storage (memory)", &run(&memory));

    let temp_dir = tempdir().unwrap();
    let persistent = CredentialStore::open(Some(temp_dir.path()), |_| StorageScope::Persistent)
        .expect("Failed to open persistent store");
    report("Persistent storage (sled)", &run(&persistent));
}
