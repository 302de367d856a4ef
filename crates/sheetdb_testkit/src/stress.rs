//! Stress helpers for SheetDB.
//!
//! These run many creates against one store, sequentially or from several
//! threads, and report what came back.

use crate::fixtures::sample_student;
use sheetdb_core::student::Student;
use sheetdb_core::{EntityId, Repository, Store};
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Ids returned by successful creates, in completion order per thread.
    pub ids: Vec<EntityId>,
    /// Failed operations.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
}

impl StressTestResult {
    /// Returns the returned ids sorted ascending.
    pub fn sorted_ids(&self) -> Vec<EntityId> {
        let mut ids = self.ids.clone();
        ids.sort_unstable();
        ids
    }

    /// Operations per second.
    pub fn ops_per_second(&self) -> f64 {
        let total = (self.ids.len() + self.failed_ops) as f64;
        if self.duration.as_secs_f64() > 0.0 {
            total / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Prints a summary of the test.
    pub fn print_summary(&self, name: &str) {
        println!("\n=== {} ===", name);
        println!("Successful: {}", self.ids.len());
        println!("Failed: {}", self.failed_ops);
        println!("Duration: {:?}", self.duration);
        println!("Throughput: {:.2} ops/sec", self.ops_per_second());
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Creates per thread.
    pub operations: usize,
    /// Number of concurrent threads.
    pub threads: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            operations: 25,
            threads: 4,
        }
    }
}

/// Runs `config.operations` creates on the calling thread.
pub fn stress_sequential_creates(store: &Store<Student>, config: &StressConfig) -> StressTestResult {
    let start = Instant::now();
    let mut ids = Vec::with_capacity(config.operations);
    let mut failed_ops = 0;

    for i in 0..config.operations {
        match store.create(sample_student(&format!("Seq{i}"), 1)) {
            Ok(created) => ids.push(created.meta.id),
            Err(_) => failed_ops += 1,
        }
    }

    StressTestResult {
        ids,
        failed_ops,
        duration: start.elapsed(),
    }
}

/// Runs `config.operations` creates on each of `config.threads` threads.
pub fn stress_concurrent_creates(store: &Store<Student>, config: &StressConfig) -> StressTestResult {
    let start = Instant::now();

    let per_thread: Vec<(Vec<EntityId>, usize)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..config.threads)
            .map(|t| {
                scope.spawn(move || {
                    let mut ids = Vec::with_capacity(config.operations);
                    let mut failed = 0;
                    for i in 0..config.operations {
                        match store.create(sample_student(&format!("T{t}S{i}"), t as i64 + 1)) {
                            Ok(created) => ids.push(created.meta.id),
                            Err(_) => failed += 1,
                        }
                    }
                    (ids, failed)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| worker_outcome(h.join(), config.operations))
            .collect()
    });

    let mut ids = Vec::new();
    let mut failed_ops = 0;
    for (thread_ids, failed) in per_thread {
        ids.extend(thread_ids);
        failed_ops += failed;
    }

    StressTestResult {
        ids,
        failed_ops,
        duration: start.elapsed(),
    }
}

/// Ids and failure count of one worker. A worker that panicked counts all
/// of its operations as failed.
fn worker_outcome(
    joined: thread::Result<(Vec<EntityId>, usize)>,
    operations: usize,
) -> (Vec<EntityId>, usize) {
    joined.unwrap_or_else(|_| (Vec::new(), operations))
}
