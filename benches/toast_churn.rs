// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast and modal churn.
//!
//! Measures the performance of:
//! - Showing many toasts and letting them expire
//! - Replacing an open modal repeatedly

use criterion::{criterion_group, criterion_main, Criterion};
use iced_feedback::modal::{ModalController, ModalOptions};
use iced_feedback::toast::{ToastManager, ToastOptions};
use iced_feedback::ui::scene::Scene;
use std::hint::black_box;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// Shows a burst of toasts and ticks frames until every one is removed.
fn bench_toast_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_churn");

    for count in [10usize, 100] {
        group.bench_function(format!("burst_{count}"), |b| {
            b.iter(|| {
                let mut scene = Scene::new();
                let mut toasts = ToastManager::new();
                for i in 0..count {
                    toasts.show(
                        &mut scene,
                        ToastOptions::info(format!("toast {i}"))
                            .duration_ms(500)
                            .show_progress(i % 2 == 0),
                    );
                }
                while !toasts.is_empty() {
                    scene.advance(FRAME);
                    toasts.advance(&mut scene, FRAME);
                }
                black_box(scene.len());
            });
        });
    }

    group.finish();
}

/// Opens modals back to back so evicted sessions pile up mid-exit.
fn bench_modal_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("modal_churn");

    group.bench_function("replace_50", |b| {
        b.iter(|| {
            let mut scene = Scene::new();
            let mut modal = ModalController::new(&mut scene);
            for i in 0..50 {
                modal.open(&mut scene, ModalOptions::new().title(format!("modal {i}")));
                scene.advance(FRAME);
                modal.advance(&mut scene, FRAME);
            }
            black_box(modal.session());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_toast_burst, bench_modal_replace);
criterion_main!(benches);
