//! HTML rendering for embed pages and the landing page.
//!
//! All rendering uses maud; every dynamic value is escaped by the template
//! engine, so user-supplied fields can never inject markup.

pub mod index;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{EmbedRecord, DEFAULT_COLOR};

/// Twitter card style announced by every embed page.
pub const TWITTER_CARD: &str = "summary_large_image";

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid regex")
});

/// Whether `color` is safe to drop into a CSS declaration.
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// Render the full embed page for `record`.
///
/// The `<head>` carries the Open Graph, Twitter Card and `theme-color` tags
/// that link unfurlers read; the body mimics a dark chat embed card so the
/// page also reads well when opened directly.
pub fn embed_page(record: &EmbedRecord) -> Markup {
    // theme-color keeps the raw value; only the visual accent is restricted.
    let accent = if is_hex_color(&record.color) {
        record.color.as_str()
    } else {
        DEFAULT_COLOR
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";

                meta property="og:title" content=(record.title);
                meta property="og:description" content=(record.description);
                meta property="og:image" content=(record.image_url);
                meta property="og:url" content=(record.url);
                meta property="og:type" content=(record.og_type);
                meta property="og:site_name" content=(record.site_name);

                meta name="twitter:card" content=(TWITTER_CARD);
                meta name="twitter:title" content=(record.title);
                meta name="twitter:description" content=(record.description);
                meta name="twitter:image" content=(record.image_url);

                meta name="theme-color" content=(record.color);

                title { (record.title) }
                style { (PreEscaped(EMBED_CSS)) }
            }
            body {
                div class="embed-container" style={ "border-left-color:" (accent) } {
                    img class="embed-thumbnail" src=(record.image_url) alt="Thumbnail";
                    div class="embed-site" { (record.site_name) }
                    div class="embed-title" { (record.title) }
                    div class="embed-description" { (record.description) }
                    div class="embed-footer" {
                        time datetime=(record.created_at.to_rfc3339()) {
                            (record.created_display())
                        }
                    }
                }
            }
        }
    }
}

const EMBED_CSS: &str = r#"
body{font-family:'Whitney','Helvetica Neue',Helvetica,Arial,sans-serif;background:#36393f;margin:0;padding:20px;color:#dcddde;min-height:100vh}
.embed-container{max-width:520px;margin:0 auto;background:#2f3136;border-left:4px solid #0099ff;border-radius:4px;padding:16px;box-shadow:0 2px 10px rgba(0,0,0,.2);overflow:hidden}
.embed-site{font-size:12px;color:#b9bbbe;margin-bottom:6px}
.embed-title{font-size:16px;font-weight:600;color:#00aff4;margin-bottom:8px;line-height:1.375}
.embed-description{font-size:14px;line-height:1.375;color:#dcddde;margin-bottom:16px;white-space:pre-line}
.embed-thumbnail{float:right;width:80px;height:80px;border-radius:6px;object-fit:cover;margin-left:12px}
.embed-footer{clear:both;font-size:12px;color:#72767d;margin-top:8px;padding-top:8px;border-top:1px solid #40444b}
"#;
