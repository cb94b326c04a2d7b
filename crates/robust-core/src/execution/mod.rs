//! Execution engines for controlling computation strategy
//!
//! Multi-band statistics are embarrassingly parallel: every band is
//! evaluated independently and contributes one entry to the result. The
//! engines in this module decide whether those evaluations run on the
//! current thread or on a Rayon pool. Results are returned in input order
//! under every engine.

#[cfg(feature = "parallel")]
use crate::Result;

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process items in parallel
    Parallel,
}

/// Trait for execution engines that control how batches are evaluated
pub trait ExecutionEngine: Clone + Send + Sync {
    /// Run `f(i)` for every `i` in `0..count`, collecting results in order
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations sequentially in the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    /// Create a new sequential engine
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionEngine for SequentialEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Uses the global Rayon pool unless a dedicated pool is supplied.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, Default)]
pub struct ParallelEngine {
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Create a new parallel engine on the global thread pool
    pub fn new() -> Self {
        Self { thread_pool: None }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            thread_pool: Some(pool),
        }
    }

    /// Create with a specific number of threads
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        if let Some(pool) = &self.thread_pool {
            pool.install(|| (0..count).into_par_iter().map(f).collect())
        } else {
            (0..count).into_par_iter().map(f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Sequential engine
pub fn sequential() -> SequentialEngine {
    SequentialEngine::new()
}

/// Parallel engine on the global Rayon pool
#[cfg(feature = "parallel")]
pub fn parallel() -> ParallelEngine {
    ParallelEngine::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_engine() {
        let engine = sequential();

        let squares = engine.execute_batch(5, |i| i * i);
        assert_eq!(squares, vec![0, 1, 4, 9, 16]);

        assert_eq!(engine.strategy(), ExecutionStrategy::Sequential);
        assert_eq!(engine.num_threads(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let out: Vec<usize> = sequential().execute_batch(0, |i| i);
        assert!(out.is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine_preserves_order() {
        let engine = parallel();

        let out = engine.execute_batch(1000, |i| i as u64 * 2);
        let expected: Vec<u64> = (0..1000).map(|i| i * 2).collect();
        assert_eq!(out, expected);

        assert_eq!(engine.strategy(), ExecutionStrategy::Parallel);
        assert!(engine.num_threads() > 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine_with_dedicated_pool() {
        let engine = ParallelEngine::with_num_threads(2).unwrap();
        assert_eq!(engine.num_threads(), 2);
        assert_eq!(engine.execute_batch(3, |i| i + 1), vec![1, 2, 3]);
    }
}
