//! Custom embeds composed through the embed builder modal.

use serenity::all::{
    ChannelId, CreateActionRow, CreateEmbed, CreateEmbedFooter, CreateInputText, CreateMessage,
    CreateModal, InputTextStyle, MessageId,
};

use crate::{
    error::AppError,
    model::{
        action::ComponentAction,
        embed::{parse_hex_color, EmbedDraft},
    },
    state::AppState,
};

const DEFAULT_COLOR: u32 = 0x5865f2;

pub const TITLE_FIELD: &str = "title";
pub const DESCRIPTION_FIELD: &str = "description";
pub const COLOR_FIELD: &str = "color";
pub const IMAGE_FIELD: &str = "image";
pub const FOOTER_FIELD: &str = "footer";

/// Modal collecting the parts of a custom embed. Every field is optional, the draft is
/// validated by `build_embed` on submit.
pub fn embed_modal() -> CreateModal {
    let input = |style, label: &str, id: &str, max: u16| {
        CreateInputText::new(style, label, id)
            .max_length(max)
            .required(false)
    };

    CreateModal::new(ComponentAction::SubmitEmbed.custom_id(), "Build an embed").components(vec![
        CreateActionRow::InputText(input(InputTextStyle::Short, "Title", TITLE_FIELD, 256)),
        CreateActionRow::InputText(input(
            InputTextStyle::Paragraph,
            "Description",
            DESCRIPTION_FIELD,
            4000,
        )),
        CreateActionRow::InputText(
            input(InputTextStyle::Short, "Color", COLOR_FIELD, 8).placeholder("#5865F2"),
        ),
        CreateActionRow::InputText(
            input(InputTextStyle::Short, "Image URL", IMAGE_FIELD, 512)
                .placeholder("https://..."),
        ),
        CreateActionRow::InputText(input(InputTextStyle::Short, "Footer", FOOTER_FIELD, 2048)),
    ])
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Converts a submitted draft into an embed.
///
/// # Returns
/// - `Ok(CreateEmbed)` - The embed to post
/// - `Err(AppError::BadRequest)` - Neither title nor description, a malformed color or a
///   non http(s) image URL
pub fn build_embed(draft: &EmbedDraft) -> Result<CreateEmbed, AppError> {
    let title = present(&draft.title);
    let description = present(&draft.description);
    if title.is_none() && description.is_none() {
        return Err(AppError::BadRequest(
            "An embed needs a title or a description.".to_string(),
        ));
    }

    let color = match present(&draft.color) {
        Some(raw) => parse_hex_color(raw).ok_or_else(|| {
            AppError::BadRequest(format!("'{}' is not a hex color such as #5865F2.", raw))
        })?,
        None => DEFAULT_COLOR,
    };

    let mut embed = CreateEmbed::new().color(color);
    if let Some(title) = title {
        embed = embed.title(title);
    }
    if let Some(description) = description {
        embed = embed.description(description);
    }
    if let Some(image) = present(&draft.image_url) {
        if !(image.starts_with("https://") || image.starts_with("http://")) {
            return Err(AppError::BadRequest(
                "The image must be an http(s) URL.".to_string(),
            ));
        }
        embed = embed.image(image);
    }
    if let Some(footer) = present(&draft.footer) {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    Ok(embed)
}

pub struct EmbedService<'a> {
    state: &'a AppState,
}

impl<'a> EmbedService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Builds the draft and posts it into `channel_id`.
    pub async fn post(&self, channel_id: ChannelId, draft: &EmbedDraft) -> Result<MessageId, AppError> {
        let embed = build_embed(draft)?;

        let message_id = self
            .state
            .messenger
            .send_message(channel_id, CreateMessage::new().embed(embed))
            .await?;

        tracing::info!("Custom embed posted in {}", channel_id);

        Ok(message_id)
    }
}
