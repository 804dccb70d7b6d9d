// SPDX-License-Identifier: MPL-2.0
//! Demo application showing every toast kind and modal flavor.
//!
//! The `App` owns one [`Scene`] that both the [`ToastManager`] and the
//! [`ModalController`] draw into. A frame tick moves the scene clock and
//! both timelines by the same delta; the view re-samples the scene.
//!
//! Modal callbacks run inside the controller and cannot reach the app, so
//! they report what happened over a channel that is drained after every
//! update.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, ThemeMode};
use crate::i18n::I18n;
use crate::modal::{Key, ModalController, ModalEvent, ModalOptions};
use crate::surface::{Element as Node, NodeId, Surface, TextInputView};
use crate::toast::{ToastKind, ToastManager, ToastOptions};
use crate::ui::overlay;
use crate::ui::scene::Scene;
use iced::widget::operation;
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Longest step applied from a single frame, so a stalled window does not
/// skip whole animations at once.
const MAX_FRAME_STEP: Duration = Duration::from_millis(250);

/// What a modal callback reports back to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Confirmed,
    Cancelled,
    Renamed(String),
    RenameRejected,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    scene: Scene,
    toasts: ToastManager,
    modal: ModalController,
    last_tick: Option<Instant>,
    outcomes: Receiver<Outcome>,
    reporter: Sender<Outcome>,
    /// Input of the rename modal and the text typed into it.
    rename: Option<(NodeId, Rc<RefCell<String>>)>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("modal", &self.modal.session())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        (App::new(flags), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and localization, then wires the overlays to a fresh
    /// scene.
    pub fn new(flags: Flags) -> Self {
        let (config, config_warning) = config::load_with_override(flags.config_dir);
        let i18n = I18n::new(flags.lang, &config);

        let mut scene = Scene::new();
        let toasts = ToastManager::with_defaults(config.toast_defaults());
        let modal =
            ModalController::with_settings(&mut scene, i18n.modal_labels(), config.modal_behavior());
        let (reporter, outcomes) = mpsc::channel();

        let mut app = Self {
            i18n,
            theme_mode: config.general.theme_mode,
            scene,
            toasts,
            modal,
            last_tick: None,
            outcomes,
            reporter,
            rename: None,
        };

        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.toasts
                .show(&mut app.scene, ToastOptions::warning(message).persistent());
        }

        app
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.is_animating()),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Whether any overlay is on screen or waiting on a timer.
    fn is_animating(&self) -> bool {
        !self.toasts.is_empty()
            || self.toasts.pending_timers() > 0
            || self.modal.is_open()
            || self.modal.pending_timers() > 0
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let focused_before = self.scene.focused();
        match message {
            Message::ShowToast(kind) => self.show_sample_toast(kind),
            Message::ShowPersistentToast => {
                let message = self.i18n.tr("demo-toast-persistent-message");
                self.toasts
                    .show(&mut self.scene, ToastOptions::info(message).persistent());
            }
            Message::ShowProgressToast => {
                let message = self.i18n.tr("demo-toast-progress-message");
                self.toasts.show(
                    &mut self.scene,
                    ToastOptions::warning(message)
                        .duration_ms(5000)
                        .show_progress(true),
                );
            }
            Message::DismissAllToasts => {
                self.toasts.dismiss_all(&mut self.scene);
            }
            Message::OpenInfoModal => self.open_info_modal(),
            Message::OpenConfirmModal => self.open_confirm_modal(),
            Message::OpenRenameModal => self.open_rename_modal(),
            Message::Overlay(overlay::Message::DismissToast(id)) => {
                self.toasts.dismiss(&mut self.scene, id);
            }
            Message::Overlay(overlay::Message::Modal(event)) => {
                self.modal.handle(&mut self.scene, event);
            }
            Message::Overlay(overlay::Message::Input(node, value)) => {
                if let Some((input, draft)) = &self.rename {
                    if *input == node {
                        draft.replace(value.clone());
                    }
                }
                self.scene.set_input_value(node, value);
            }
            Message::Key(Key::Enter)
                if self.modal.is_open()
                    && self.scene.focused().is_some()
                    && self.scene.focused() == self.modal.confirm_button() =>
            {
                self.modal.handle(&mut self.scene, ModalEvent::Confirm);
            }
            Message::Key(key) => {
                self.modal.handle(&mut self.scene, ModalEvent::Key(key));
            }
            Message::Tick(now) => self.tick(now),
        }

        self.report_outcomes();
        if !self.modal.is_open() {
            self.rename = None;
        }

        match self.focus_target(focused_before) {
            Some(input) => operation::focus(overlay::input_id(input)),
            None => Task::none(),
        }
    }

    /// Input node that just received scene focus and needs keyboard focus.
    fn focus_target(&self, before: Option<NodeId>) -> Option<NodeId> {
        let focused = self.scene.focused().filter(|&node| Some(node) != before)?;
        matches!(self.scene.element(focused), Some(Node::TextInput(_))).then_some(focused)
    }

    fn tick(&mut self, now: Instant) {
        let delta = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last))
            .min(MAX_FRAME_STEP);

        self.scene.advance(delta);
        self.toasts.advance(&mut self.scene, delta);
        self.modal.advance(&mut self.scene, delta);

        self.last_tick = self.is_animating().then_some(now);
    }

    fn show_sample_toast(&mut self, kind: ToastKind) {
        let mut options = match kind {
            ToastKind::Success => ToastOptions::success(self.i18n.tr("demo-toast-success-message"))
                .title(self.i18n.tr("demo-toast-success-title")),
            ToastKind::Error => ToastOptions::error(self.i18n.tr("demo-toast-error-message")),
            ToastKind::Warning => ToastOptions::warning(self.i18n.tr("demo-toast-warning-message")),
            ToastKind::Info => ToastOptions::info(self.i18n.tr("demo-toast-info-message")),
        };
        if kind == ToastKind::Error {
            options = options.duration_ms(6000);
        }
        self.toasts.show(&mut self.scene, options);
    }

    fn open_info_modal(&mut self) {
        let options = ModalOptions::new().content(crate::modal::Content::Text(
            self.i18n.tr("demo-modal-info-body"),
        ));
        self.modal.open(&mut self.scene, options);
    }

    fn open_confirm_modal(&mut self) {
        let on_confirm = self.reporter.clone();
        let on_cancel = self.reporter.clone();
        let options = ModalOptions::new()
            .title(self.i18n.tr("demo-modal-confirm-title"))
            .content(crate::modal::Content::Text(
                self.i18n.tr("demo-modal-confirm-body"),
            ))
            .show_cancel(true)
            .confirm_text(self.i18n.tr("demo-modal-confirm-button"))
            .on_confirm(move || {
                if let Err(err) = on_confirm.send(Outcome::Confirmed) {
                    tracing::debug!(%err, "confirm outcome dropped");
                }
            })
            .try_on_cancel(move || on_cancel.send(Outcome::Cancelled));
        self.modal.open(&mut self.scene, options);
    }

    fn open_rename_modal(&mut self) {
        let input = self.scene.create(Node::TextInput(TextInputView::new(
            self.i18n.tr("demo-modal-validate-placeholder"),
        )));
        let draft = Rc::new(RefCell::new(String::new()));

        let typed = Rc::clone(&draft);
        let reporter = self.reporter.clone();
        let options = ModalOptions::new()
            .title(self.i18n.tr("demo-modal-validate-title"))
            .content(input)
            .show_cancel(true)
            .on_confirm(move || {
                let name = typed.borrow().trim().to_owned();
                let accepted = !name.is_empty();
                let outcome = if accepted {
                    Outcome::Renamed(name)
                } else {
                    Outcome::RenameRejected
                };
                if let Err(err) = reporter.send(outcome) {
                    tracing::debug!(%err, "rename outcome dropped");
                }
                accepted
            });

        self.modal.open(&mut self.scene, options);
        self.rename = Some((input, draft));
    }

    /// Turns callback reports into toasts.
    fn report_outcomes(&mut self) {
        let outcomes: Vec<Outcome> = self.outcomes.try_iter().collect();
        for outcome in outcomes {
            tracing::debug!(?outcome, "modal outcome");
            let options = match outcome {
                Outcome::Confirmed => ToastOptions::success(self.i18n.tr("demo-confirmed")),
                Outcome::Cancelled => ToastOptions::info(self.i18n.tr("demo-cancelled")),
                Outcome::Renamed(name) => {
                    ToastOptions::success(name).title(self.i18n.tr("demo-renamed"))
                }
                Outcome::RenameRejected => {
                    ToastOptions::error(self.i18n.tr("demo-modal-validate-empty"))
                }
            };
            self.toasts.show(&mut self.scene, options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lifecycle::VisualState;
    use crate::surface::Element as Node;
    use tempfile::tempdir;

    fn app() -> (App, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create temp dir");
        let app = App::new(Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.path().to_path_buf()),
        });
        (app, dir)
    }

    fn toast_messages(app: &App) -> Vec<String> {
        app.toasts
            .visible()
            .filter_map(|id| app.toasts.node(id))
            .filter_map(|node| match app.scene.element(node) {
                Some(Node::Toast(view)) => Some(view.message.clone()),
                _ => None,
            })
            .collect()
    }

    fn run_for(app: &mut App, start: Instant, total: Duration) -> Instant {
        let mut now = start;
        let _ = app.update(Message::Tick(now));
        let end = start + total;
        while now < end {
            now += subscription::FRAME_INTERVAL;
            let _ = app.update(Message::Tick(now));
        }
        now
    }

    #[test]
    fn title_is_localized() {
        let (app, _dir) = app();
        assert_eq!(app.title(), "Iced Feedback");
    }

    #[test]
    fn unreadable_settings_raise_a_persistent_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("settings.toml"), "[toast\n").expect("write");
        let app = App::new(Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.path().to_path_buf()),
        });
        assert_eq!(
            toast_messages(&app),
            vec!["Settings could not be read; defaults are in use.".to_string()]
        );
    }

    #[test]
    fn sample_toast_leaves_after_its_duration() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::ShowToast(ToastKind::Info));
        assert!(app.is_animating());

        run_for(&mut app, Instant::now(), Duration::from_millis(3400));
        assert!(app.toasts.is_empty());
        assert!(!app.is_animating());
    }

    #[test]
    fn confirm_modal_reports_back_with_a_toast() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::OpenConfirmModal);
        let _ = app.update(Message::Overlay(overlay::Message::Modal(ModalEvent::Confirm)));

        assert_eq!(toast_messages(&app), vec!["Confirmed.".to_string()]);
        assert_eq!(app.modal.state(), Some(VisualState::Exiting));
    }

    #[test]
    fn escape_cancels_confirm_modal() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::OpenConfirmModal);
        let _ = app.update(Message::Key(Key::Escape));
        assert_eq!(toast_messages(&app), vec!["Cancelled.".to_string()]);

        run_for(&mut app, Instant::now(), Duration::from_millis(250));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn enter_on_focused_confirm_button_confirms() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::OpenConfirmModal);
        let _ = app.update(Message::Key(Key::Enter));
        assert_eq!(toast_messages(&app), vec!["Confirmed.".to_string()]);
    }

    #[test]
    fn rename_modal_stays_open_until_a_name_is_typed() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::OpenRenameModal);
        let (input, _) = app.rename.clone().expect("rename input");
        assert_eq!(app.scene.focused(), Some(input));

        let _ = app.update(Message::Overlay(overlay::Message::Modal(ModalEvent::Confirm)));
        assert_eq!(app.modal.state(), Some(VisualState::Active));
        assert_eq!(toast_messages(&app), vec!["Name must not be empty.".to_string()]);

        let _ = app.update(Message::Overlay(overlay::Message::Input(
            input,
            "report.pdf".to_string(),
        )));
        let _ = app.update(Message::Overlay(overlay::Message::Modal(ModalEvent::Confirm)));
        assert_eq!(app.modal.state(), Some(VisualState::Exiting));
        assert!(toast_messages(&app).contains(&"report.pdf".to_string()));
    }

    #[test]
    fn rename_modal_requests_keyboard_focus_for_its_input() {
        let (mut app, _dir) = app();
        let task = app.update(Message::OpenRenameModal);
        assert_eq!(task.units(), 1);

        let (input, _) = app.rename.clone().expect("rename input");
        assert_eq!(app.focus_target(None), Some(input));
        assert_eq!(app.focus_target(Some(input)), None);

        let task = app.update(Message::Overlay(overlay::Message::Input(
            input,
            "a".to_string(),
        )));
        assert_eq!(task.units(), 0);
    }

    #[test]
    fn confirm_modal_issues_no_input_focus() {
        let (mut app, _dir) = app();
        let task = app.update(Message::OpenConfirmModal);
        assert_eq!(task.units(), 0);
    }

    #[test]
    fn dismiss_all_clears_persistent_toasts() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::ShowPersistentToast);
        let _ = app.update(Message::ShowProgressToast);
        let _ = app.update(Message::DismissAllToasts);

        run_for(&mut app, Instant::now(), Duration::from_millis(350));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn indonesian_labels_reach_the_modal() {
        let dir = tempdir().expect("failed to create temp dir");
        let app = App::new(Flags {
            lang: Some("id".to_string()),
            config_dir: Some(dir.path().to_path_buf()),
        });
        assert_eq!(app.modal.labels().confirm, "Konfirmasi");
        assert_eq!(app.modal.labels().cancel, "Batal");
    }
}
