//! Marker tokens and patterns of the DiscordChatExporter HTML export.
//!
//! The export is never parsed as a DOM. Each semantic element is recognized
//! by a fixed substring (a *marker*) and, where a value has to be pulled out,
//! a small regex pattern. Presence markers end on a quote or `>` because those
//! characters are always escaped inside message text, so a message talking
//! about "markdown" or "timestamps" cannot trigger them.

/// Line carries the author's display name.
pub const AUTHOR_MARKER: &str = "author-name\"";

/// Line carries the message group timestamp.
pub const TIMESTAMP_MARKER: &str = "timestamp\">";

/// Line opens a message body.
pub const MESSAGE_MARKER: &str = "markdown\">";

/// Message body that is a single link element.
pub const MESSAGE_LINK_MARKER: &str = "markdown\"><a href=";

/// Absolute link anywhere in the message markup.
pub const RAW_LINK_MARKER: &str = "<a href=\"http";

/// Embed preview element (title, description, fields). Never a real message.
pub const EMBED_MARKER: &str = "chatlog__embed-";

/// Attachment container, emitted as an image record.
pub const IMAGE_MARKER: &str = "chatlog__attachment\"";

/// Physical line end that closes an element.
pub const LINE_CLOSE: &str = ">";

/// Emphasis close tag, a false positive for [`LINE_CLOSE`].
pub const EMPHASIS_CLOSE: &str = "</em>";

/// Separator inserted between joined physical lines.
pub const LINE_JOIN: &str = ". ";

/// Prefix stripped from a matched message span.
pub const MESSAGE_PREFIX: &str = "markdown\">";

/// Suffix stripped from a matched message span.
pub const MESSAGE_SUFFIX: &str = "</div";

// Sentinels

/// Body of a record produced by an attachment.
pub const IMAGE_SENTINEL: &str = "$IMAGE$";

/// Body of a link-only message.
pub const LINK_SENTINEL: &str = "$LINK$";

/// Replacement for each emoji image, padded so it never fuses with text.
pub const EMOJI_SENTINEL: &str = " $EMOJI$ ";

// Patterns

/// `author-name" title="<name>#<discriminator>`
pub const AUTHOR_PATTERN: &str = r#"author-name" title="(.*?)#\d{4}"#;

/// `timestamp">...</span`
pub const TIMESTAMP_PATTERN: &str = r#"timestamp">(.*?)</span"#;

/// `markdown">...</div`, matched as a whole span.
pub const MESSAGE_PATTERN: &str = r#"markdown">.*?</div"#;

/// Standard and custom emoji images.
pub const EMOJI_PATTERN: &str = r#"<img[^>]*class="emoji[^"]*"[^>]*>"#;

/// Mention span; the display name is captured without the `@` wrapper.
pub const MENTION_PATTERN: &str =
    r#"<span class="mention"[^>]*>@(?:<span[^>]*>)?(.*?)(?:</span>)?</span>"#;

/// Any remaining span open or close tag.
pub const SPAN_TAG_PATTERN: &str = r"<span(?:\s[^>]*)?>|</span>";
