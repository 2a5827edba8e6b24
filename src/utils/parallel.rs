use std::sync::atomic::{AtomicUsize, Ordering};
use log::info;
use rayon::prelude::*;

pub trait ParallelProcessor {
    fn init_parallel_processing() {
        // build_global fails if a pool already exists, which is fine
        if rayon::ThreadPoolBuilder::new()
            .num_threads(num_cpus::get())
            .build_global()
            .is_ok()
        {
            info!("Using {} CPU threads for processing", rayon::current_num_threads());
        }
    }

    fn get_progress_counter() -> AtomicUsize {
        AtomicUsize::new(0)
    }

    /// Map `items` in parallel, keeping their order and logging progress
    /// every 100 items.
    fn parallel_map<T, F, R>(items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        let progress = Self::get_progress_counter();
        let total = items.len();

        items
            .par_iter()
            .map(|item| {
                let result = f(item);
                let processed = progress.fetch_add(1, Ordering::SeqCst) + 1;
                if processed % 100 == 0 || processed == total {
                    info!(
                        "Progress: {}/{} files ({:.1}%)",
                        processed,
                        total,
                        (processed as f64 / total as f64) * 100.0
                    );
                }
                result
            })
            .collect()
    }
}
