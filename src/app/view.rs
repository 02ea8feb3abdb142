// SPDX-License-Identifier: MPL-2.0
//! View rendering for the main window.

use super::{AppContext, Message};
use iced::{
    widget::{button, column, container, text},
    Alignment, Element, Length,
};

const HEADING_SIZE: f32 = 28.0;
const SPACING: f32 = 16.0;
const PADDING: f32 = 24.0;

/// Renders the main window.
pub fn view(context: &AppContext) -> Element<'_, Message> {
    let i18n = context.i18n();

    let content = column![
        text(i18n.tr("main-heading")).size(HEADING_SIZE),
        text(i18n.tr("main-hint")),
        text(language_line(context)),
        button(text(i18n.tr("quit-button"))).on_press(Message::Quit),
    ]
    .spacing(SPACING)
    .align_x(Alignment::Center);

    container(content)
        .padding(PADDING)
        .center(Length::Fill)
        .into()
}

/// Describes the interface language currently in use.
fn language_line(context: &AppContext) -> String {
    let i18n = context.i18n();
    let lang = match i18n.translator() {
        Some(translator) => translator.language().to_string(),
        None => i18n.tr("language-builtin"),
    };
    i18n.tr_with_args("language-label", &[("lang", lang.as_str())])
}
