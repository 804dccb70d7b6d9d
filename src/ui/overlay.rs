// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the [`Scene`].
//!
//! The view is a pure function of the scene: every frame it samples each
//! node's presence and progress and turns them into alpha, slide offsets and
//! bar fill. Toasts stack in the top-right corner; each modal backdrop is a
//! full-window layer with its card centered on top.

use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use super::scene::Scene;
use crate::domain::lifecycle::VisualState;
use crate::modal::ModalEvent;
use crate::surface::{ButtonRole, Element as Node, NodeId, Surface, ToastView};
use crate::toast::{ToastId, ToastKind, CONTAINER_KEY};
use iced::widget::{
    button, mouse_area, opaque, text, text_input, tooltip, Column, Container, Id, Row, Space, Text,
};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Interactions produced by the overlays.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Close button of a toast.
    DismissToast(ToastId),
    /// Anything that happens inside a modal.
    Modal(ModalEvent),
    /// Text typed into an input node.
    Input(NodeId, String),
}

/// Accent color of a toast kind.
#[must_use]
pub fn accent(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => palette::SUCCESS_500,
        ToastKind::Error => palette::ERROR_500,
        ToastKind::Warning => palette::WARNING_500,
        ToastKind::Info => palette::INFO_500,
    }
}

fn glyph(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "✕",
        ToastKind::Warning => "!",
        ToastKind::Info => "i",
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// One full-window overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// A modal backdrop and its card.
    Modal(NodeId),
    /// The toast container.
    Toasts(NodeId),
}

/// Overlay layers, bottom to top: one per modal backdrop still in the tree,
/// then the toast stack so toasts stay readable above a dimmed backdrop.
#[must_use]
pub fn layer_order(scene: &Scene) -> Vec<Layer> {
    let mut order: Vec<Layer> = scene
        .root_children()
        .iter()
        .filter(|&&node| matches!(scene.element(node), Some(Node::Backdrop)))
        .map(|&backdrop| Layer::Modal(backdrop))
        .collect();
    if let Some(container) = scene.find(CONTAINER_KEY) {
        if !scene.children(container).is_empty() {
            order.push(Layer::Toasts(container));
        }
    }
    order
}

/// Renders [`layer_order`].
pub fn layers(scene: &Scene) -> Vec<Element<'_, Message>> {
    layer_order(scene)
        .into_iter()
        .map(|layer| match layer {
            Layer::Modal(backdrop) => modal_layer(scene, backdrop),
            Layer::Toasts(container) => toast_stack(scene, container),
        })
        .collect()
}

/// Widget id of the `text_input` drawn for an input node.
#[must_use]
pub fn input_id(node: NodeId) -> Id {
    Id::from(format!("overlay-input-{}", node.raw()))
}

// =============================================================================
// Toasts
// =============================================================================

fn toast_stack(scene: &Scene, container: NodeId) -> Element<'_, Message> {
    let toasts = scene
        .children(container)
        .iter()
        .filter_map(|&node| match scene.element(node) {
            Some(Node::Toast(view)) => Some(toast_view(scene, node, view)),
            _ => None,
        });

    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
}

fn toast_view<'a>(scene: &'a Scene, node: NodeId, view: &'a ToastView) -> Element<'a, Message> {
    let presence = scene.presence(node);
    let alpha = presence.clamp(0.0, 1.0);
    let accent_color = accent(view.kind);

    let icon = Text::new(glyph(view.kind))
        .size(typography::TITLE_SM)
        .color(with_alpha(accent_color, alpha));

    let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
    match &view.title {
        Some(title) => {
            body = body
                .push(themed_text(title, typography::BODY, alpha).font(bold()))
                .push(themed_text(&view.message, typography::BODY, alpha));
        }
        None => {
            body = body.push(themed_text(&view.message, typography::BODY, alpha).font(bold()));
        }
    }

    let dismiss = button(themed_text("×", typography::BODY, alpha))
        .on_press(Message::DismissToast(view.id))
        .padding(spacing::XXS)
        .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Top)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(body)
        .push(dismiss);

    let mut card = Column::new().push(Container::new(content).padding(spacing::SM));
    if let Some(&bar) = scene
        .children(node)
        .iter()
        .find(|&&child| matches!(scene.element(child), Some(Node::Progress(_))))
    {
        let fill = scene.progress(bar).unwrap_or(1.0);
        card = card.push(progress_strip(fill, accent_color, alpha));
    }

    let toast = Container::new(card)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha));

    // Slides in from the right; springy curves may overshoot to the left.
    let offset = ((1.0 - presence) * sizing::TOAST_SLIDE).max(0.0);
    Container::new(toast)
        .padding(Padding {
            left: offset,
            ..Padding::ZERO
        })
        .into()
}

fn progress_strip<'a>(fill: f32, color: Color, alpha: f32) -> Element<'a, Message> {
    const STEPS: f32 = 1000.0;
    let filled = (fill.clamp(0.0, 1.0) * STEPS).round() as u16;
    let empty = STEPS as u16 - filled;
    let color = with_alpha(color, alpha);

    let mut strip = Row::new().height(Length::Fixed(sizing::PROGRESS_HEIGHT));
    if filled > 0 {
        strip = strip.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(move |_theme: &Theme| iced::widget::container::Style {
                    background: Some(iced::Background::Color(color)),
                    ..Default::default()
                }),
        );
    }
    if empty > 0 {
        strip = strip.push(Space::new().width(Length::FillPortion(empty)));
    }
    strip.into()
}

// =============================================================================
// Modals
// =============================================================================

fn modal_layer(scene: &Scene, backdrop: NodeId) -> Element<'_, Message> {
    let alpha = scene.opacity(backdrop);
    let interactive = scene.state(backdrop) == Some(VisualState::Active);

    let cards = scene
        .children(backdrop)
        .iter()
        .filter(|&&node| matches!(scene.element(node), Some(Node::Card(_))))
        .map(|&card| opaque(card_view(scene, card)));

    let centered = Container::new(Column::with_children(cards))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| backdrop_style(alpha));

    let area = mouse_area(centered);
    if interactive {
        area.on_press(Message::Modal(ModalEvent::Backdrop { on_card: false }))
            .into()
    } else {
        area.into()
    }
}

fn card_view(scene: &Scene, card: NodeId) -> Element<'_, Message> {
    let presence = scene.presence(card);
    let alpha = presence.clamp(0.0, 1.0);
    let focused = scene.focused();

    let title = match scene.element(card) {
        Some(Node::Card(view)) => view.title.as_str(),
        _ => "",
    };

    let mut header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(themed_text(title, typography::TITLE_SM, alpha).font(bold()))
        .push(Space::new().width(Length::Fill));
    let mut body = Column::new().spacing(spacing::SM);
    let mut footer = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill));

    for &child in scene.children(card) {
        match scene.element(child) {
            Some(Node::Button(ButtonRole::Close, label)) => {
                let close = button(themed_text("×", typography::TITLE_SM, alpha))
                    .on_press(Message::Modal(ModalEvent::CloseButton))
                    .padding(spacing::XXS)
                    .style(move |theme: &Theme, status| {
                        dismiss_button_style(theme, status, alpha)
                    });
                header = header.push(tooltip(
                    close,
                    Text::new(label.as_str()).size(typography::CAPTION),
                    tooltip::Position::Bottom,
                ));
            }
            Some(Node::Button(role, label)) => {
                let event = match role {
                    ButtonRole::Confirm => ModalEvent::Confirm,
                    _ => ModalEvent::Cancel,
                };
                let primary = *role == ButtonRole::Confirm;
                let is_focused = focused == Some(child);
                footer = footer.push(
                    button(Text::new(label.as_str()).size(typography::BODY))
                        .on_press(Message::Modal(event))
                        .padding([spacing::XS, spacing::MD])
                        .style(move |theme: &Theme, status| {
                            footer_button_style(theme, status, primary, is_focused, alpha)
                        }),
                );
            }
            Some(_) => body = body.push(node_view(scene, child, alpha)),
            None => {}
        }
    }

    let card_box = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(body)
            .push(footer),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::LG)
    .style(move |theme: &Theme| card_style(theme, alpha));

    // Drops into place while growing in; leaves the same way.
    let drop = ((1.0 - presence) * sizing::CARD_DROP).max(0.0);
    Container::new(card_box)
        .padding(Padding {
            top: drop,
            ..Padding::ZERO
        })
        .into()
}

/// Body content: text, markup (shown verbatim), inputs, or nested groups.
fn node_view(scene: &Scene, node: NodeId, alpha: f32) -> Element<'_, Message> {
    match scene.element(node) {
        Some(Node::Text(content) | Node::Markup(content)) => {
            themed_text(content, typography::BODY, alpha).into()
        }
        Some(Node::TextInput(input)) => text_input(&input.placeholder, &input.value)
            .id(input_id(node))
            .on_input(move |value| Message::Input(node, value))
            .on_submit(Message::Modal(ModalEvent::Confirm))
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fill)
            .into(),
        Some(_) => Column::with_children(
            scene
                .children(node)
                .iter()
                .map(|&child| node_view(scene, child, alpha)),
        )
        .spacing(spacing::XS)
        .into(),
        None => Space::new().into(),
    }
}

// =============================================================================
// Styles
// =============================================================================

fn bold() -> iced::Font {
    iced::Font {
        weight: iced::font::Weight::Bold,
        ..iced::Font::DEFAULT
    }
}

fn themed_text(content: &str, size: f32, alpha: f32) -> Text<'_> {
    Text::new(content)
        .size(size)
        .style(move |theme: &Theme| text::Style {
            color: Some(with_alpha(theme.palette().text, alpha)),
        })
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> iced::widget::container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    iced::widget::container::Style {
        background: Some(iced::Background::Color(with_alpha(bg_color, alpha))),
        border: iced::Border {
            color: with_alpha(accent_color, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn backdrop_style(alpha: f32) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::BACKDROP * alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

fn card_style(theme: &Theme, alpha: f32) -> iced::widget::container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    iced::widget::container::Style {
        background: Some(iced::Background::Color(with_alpha(bg_color, alpha))),
        border: iced::Border {
            color: with_alpha(palette::GRAY_400, alpha * opacity::OVERLAY_MEDIUM),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::LG.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::LG
        },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the toast and modal close buttons.
fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = with_alpha(theme.extended_palette().background.base.text, alpha);
    let hover = |level: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: level * alpha,
            ..palette::GRAY_400
        })),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

fn footer_button_style(
    theme: &Theme,
    status: button::Status,
    primary: bool,
    focused: bool,
    alpha: f32,
) -> button::Style {
    let extended = theme.extended_palette();
    let (base, text_color) = if primary {
        (palette::PRIMARY_500, palette::WHITE)
    } else {
        (extended.background.weak.color, extended.background.weak.text)
    };
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OPAQUE - opacity::OVERLAY_SUBTLE,
            ..base
        },
        button::Status::Pressed => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base
        },
        button::Status::Active | button::Status::Disabled => base,
    };

    button::Style {
        background: Some(iced::Background::Color(with_alpha(background, alpha))),
        text_color: with_alpha(text_color, alpha),
        border: iced::Border {
            color: if focused {
                with_alpha(extended.primary.strong.color, alpha)
            } else {
                Color::TRANSPARENT
            },
            width: if focused { border::WIDTH_MD } else { 0.0 },
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
