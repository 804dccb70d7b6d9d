// SPDX-License-Identifier: MPL-2.0
//! Demo window: a panel of triggers with the overlays stacked on top.

use super::{App, Message};
use crate::toast::ToastKind;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::overlay;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let tr = |key: &str| app.i18n.tr(key);

    let toast_buttons = Row::new()
        .spacing(spacing::XS)
        .push(trigger(tr("demo-toast-success"), Message::ShowToast(ToastKind::Success)))
        .push(trigger(tr("demo-toast-error"), Message::ShowToast(ToastKind::Error)))
        .push(trigger(tr("demo-toast-warning"), Message::ShowToast(ToastKind::Warning)))
        .push(trigger(tr("demo-toast-info"), Message::ShowToast(ToastKind::Info)));

    let toast_extras = Row::new()
        .spacing(spacing::XS)
        .push(trigger(tr("demo-toast-persistent"), Message::ShowPersistentToast))
        .push(trigger(tr("demo-toast-progress"), Message::ShowProgressToast))
        .push(trigger(tr("demo-toast-dismiss-all"), Message::DismissAllToasts));

    let modal_buttons = Row::new()
        .spacing(spacing::XS)
        .push(trigger(tr("demo-modal-info"), Message::OpenInfoModal))
        .push(trigger(tr("demo-modal-confirm"), Message::OpenConfirmModal))
        .push(trigger(tr("demo-modal-validate"), Message::OpenRenameModal));

    let panel = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(tr("demo-section-toasts")).size(typography::TITLE_SM))
        .push(toast_buttons)
        .push(toast_extras)
        .push(Text::new(tr("demo-section-modals")).size(typography::TITLE_SM))
        .push(modal_buttons);

    let base = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top);

    overlay::layers(&app.scene)
        .into_iter()
        .fold(Stack::new().push(base), |stack, layer| {
            stack.push(layer.map(Message::Overlay))
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn trigger<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .into()
}
