//! # Concurrency Tests using Loom
//!
//! This module uses loom to check that concurrent suite resolutions over one
//! shared, read-only index observe identical results.

mod common;

#[cfg(test)]
mod tests {
    use super::common::*;
    use categorized_suite::models::SuiteDescriptor;
    use categorized_suite::{MarkerRegistry, SuiteAssembler, SymbolIndex};
    use loom::sync::Arc;
    use loom::sync::atomic::{AtomicUsize, Ordering};
    use loom::thread;

    fn shared_assembler() -> SuiteAssembler {
        let index = SymbolIndex::from_catalogs(
            vec![catalog(
                vec![category_marker("C1")],
                vec![
                    unit("A", &["C1", "Numbered"], &[]),
                    unit("B", &["C1"], &[]),
                    suite_unit("Nested", &["C1"]),
                ],
            )],
            &MarkerRegistry::with_defaults(),
        );
        SuiteAssembler::new(std::sync::Arc::new(index))
    }

    /// Two threads resolve the same descriptor through clones of one assembler
    /// while a counter records every completed resolution. Whatever the
    /// interleaving, both see the same single-unit suite.
    #[test]
    fn test_concurrent_resolutions_share_the_index() {
        loom::model(|| {
            const NUM_TASKS: usize = 2;
            let assembler = shared_assembler();
            let completed = Arc::new(AtomicUsize::new(0));
            let descriptor = SuiteDescriptor::new("c1").with_marker("C1").skipping("Numbered");

            let handles: Vec<_> = (0..NUM_TASKS)
                .map(|_| {
                    let assembler = assembler.clone();
                    let completed = completed.clone();
                    let descriptor = descriptor.clone();
                    thread::spawn(move || {
                        let suite = assembler.resolve_suite(&descriptor).unwrap();
                        completed.fetch_add(1, Ordering::Relaxed);
                        suite
                    })
                })
                .collect();

            let suites: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

            assert_eq!(completed.load(Ordering::Relaxed), NUM_TASKS);
            assert_eq!(suites[0], suites[1]);
            assert_eq!(suites[0].len(), 1);
        });
    }
}
