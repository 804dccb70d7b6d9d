// SPDX-License-Identifier: MPL-2.0
//! End-to-end toast and modal lifecycles against the retained scene.

use iced_feedback::config::{self, Config};
use iced_feedback::domain::lifecycle::VisualState;
use iced_feedback::i18n::I18n;
use iced_feedback::modal::{Key, ModalController, ModalEvent, ModalOptions};
use iced_feedback::surface::{Element, Surface};
use iced_feedback::toast::{ToastManager, ToastOptions, CONTAINER_KEY};
use iced_feedback::ui::scene::Scene;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Advances the scene and both controllers together, like the demo's tick.
fn step(scene: &mut Scene, toasts: &mut ToastManager, modal: &mut ModalController, delta: Duration) {
    scene.advance(delta);
    toasts.advance(scene, delta);
    modal.advance(scene, delta);
}

#[test]
fn saved_toast_scenario() {
    let mut scene = Scene::new();
    let mut toasts = ToastManager::new();

    let id = toasts.show(
        &mut scene,
        ToastOptions::success("Your changes were saved.")
            .title("Saved")
            .duration_ms(1000),
    );
    let node = toasts.node(id).expect("toast node");
    let container = scene.find(CONTAINER_KEY).expect("container");
    assert_eq!(scene.children(container), &[node]);
    match scene.element(node) {
        Some(Element::Toast(view)) => {
            assert_eq!(view.title.as_deref(), Some("Saved"));
            assert_eq!(view.message, "Your changes were saved.");
        }
        other => panic!("expected toast, got {other:?}"),
    }

    toasts.advance(&mut scene, ms(1000));
    assert_eq!(toasts.state(id), Some(VisualState::Exiting));
    assert_eq!(scene.state(node), Some(VisualState::Exiting));

    toasts.advance(&mut scene, ms(300));
    assert!(scene.children(container).is_empty());
    assert!(scene.is_attached(container));
}

#[test]
fn zero_duration_toast_waits_for_close() {
    let mut scene = Scene::new();
    let mut toasts = ToastManager::new();
    let id = toasts.show(&mut scene, ToastOptions::info("stays").duration_ms(0));

    toasts.advance(&mut scene, Duration::from_secs(60));
    assert_eq!(toasts.state(id), Some(VisualState::Active));

    assert!(toasts.dismiss(&mut scene, id));
    toasts.advance(&mut scene, ms(300));
    assert_eq!(toasts.state(id), None);
}

#[test]
fn close_during_auto_dismiss_window_removes_once() {
    let mut scene = Scene::new();
    let mut toasts = ToastManager::new();
    let id = toasts.show(&mut scene, ToastOptions::info("race").duration_ms(1000));

    toasts.advance(&mut scene, ms(900));
    assert!(toasts.dismiss(&mut scene, id));
    toasts.advance(&mut scene, ms(100));
    assert!(toasts.is_exiting(id));

    toasts.advance(&mut scene, ms(200));
    assert!(toasts.is_empty());
    assert_eq!(toasts.pending_timers(), 0);
}

#[test]
fn confirm_modal_scenario() {
    let mut scene = Scene::new();
    let mut toasts = ToastManager::new();
    let mut modal = ModalController::new(&mut scene);
    let confirmed = Rc::new(Cell::new(0));
    let cancelled = Rc::new(Cell::new(0));

    let on_confirm = Rc::clone(&confirmed);
    let on_cancel = Rc::clone(&cancelled);
    modal.open(
        &mut scene,
        ModalOptions::new()
            .title("Delete file?")
            .content("This cannot be undone.")
            .show_cancel(true)
            .confirm_text("Delete")
            .on_confirm(move || on_confirm.set(on_confirm.get() + 1))
            .on_cancel(move || on_cancel.set(on_cancel.get() + 1)),
    );
    let (backdrop, _) = modal.nodes().expect("open");

    modal.handle(&mut scene, ModalEvent::Confirm);
    modal.handle(&mut scene, ModalEvent::Confirm);
    modal.handle(&mut scene, ModalEvent::Key(Key::Escape));
    assert_eq!(confirmed.get(), 1);
    assert_eq!(cancelled.get(), 0);

    step(&mut scene, &mut toasts, &mut modal, ms(199));
    assert!(scene.is_attached(backdrop));
    step(&mut scene, &mut toasts, &mut modal, ms(1));
    assert!(!scene.is_attached(backdrop));
    assert!(!modal.is_open());
}

#[test]
fn reopening_replaces_modal_without_cancel() {
    let mut scene = Scene::new();
    let mut toasts = ToastManager::new();
    let mut modal = ModalController::new(&mut scene);
    let cancelled = Rc::new(Cell::new(0));
    let on_cancel = Rc::clone(&cancelled);

    modal.open(
        &mut scene,
        ModalOptions::new()
            .title("A")
            .on_cancel(move || on_cancel.set(on_cancel.get() + 1)),
    );
    let b = modal.open(&mut scene, ModalOptions::new().title("B"));

    step(&mut scene, &mut toasts, &mut modal, ms(500));
    assert_eq!(cancelled.get(), 0);
    assert_eq!(modal.session(), Some(b));
    assert_eq!(scene.root_children().len(), 1);
}

#[test]
fn toasts_and_modal_share_one_scene() {
    let mut scene = Scene::new();
    let mut toasts = ToastManager::new();
    let mut modal = ModalController::new(&mut scene);

    toasts.show(&mut scene, ToastOptions::warning("low disk").duration_ms(500));
    modal.open(&mut scene, ModalOptions::new());
    assert_eq!(scene.root_children().len(), 2);

    modal.handle(&mut scene, ModalEvent::Backdrop { on_card: false });
    step(&mut scene, &mut toasts, &mut modal, ms(800));
    assert!(toasts.is_empty());
    assert!(!modal.is_open());
    // Only the persistent toast container is left.
    assert_eq!(scene.root_children(), &[toasts.container().expect("container")]);
}

#[test]
fn settings_drive_defaults_and_labels() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut settings = Config::default();
    settings.general.language = Some("id".to_string());
    settings.toast.default_duration_ms = Some(0);
    settings.modal.dismiss_on_escape = Some(false);
    config::save_with_override(&settings, Some(dir.path().to_path_buf())).expect("save");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "id");

    let mut scene = Scene::new();
    let mut toasts = ToastManager::with_defaults(loaded.toast_defaults());
    let id = toasts.show(&mut scene, ToastOptions::info("stays"));
    toasts.advance(&mut scene, Duration::from_secs(10));
    assert_eq!(toasts.state(id), Some(VisualState::Active));

    let mut modal =
        ModalController::with_settings(&mut scene, i18n.modal_labels(), loaded.modal_behavior());
    modal.open(&mut scene, ModalOptions::new());
    modal.handle(&mut scene, ModalEvent::Key(Key::Escape));
    assert_eq!(modal.state(), Some(VisualState::Active));
    assert_eq!(modal.labels().confirm, "Konfirmasi");
}
