//! Landing page: live embed count plus a short API reference.

use maud::{html, Markup, PreEscaped, DOCTYPE};

const CREATE_EXAMPLE: &str = r##"{
  "title": "Your Embed Title",
  "description": "Your embed description",
  "image_url": "https://example.com/image.png",
  "color": "#0099ff",
  "og_type": "website",
  "site_name": "Your Site Name"
}"##;

pub fn index_page(active_embeds: usize) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Cryzen Custom Discord Embeds" }
                style { (PreEscaped(INDEX_CSS)) }
            }
            body {
                main class="home" {
                    h1 { "Cryzen Custom Discord Embeds" }
                    p { "This server creates custom Discord embeds using Open Graph meta tags." }
                    p { strong { "Active embeds: " } span class="embed-count" { (active_embeds) } }
                    p { strong { "Status: " } "Server is running!" }

                    h2 { "API Documentation" }
                    div class="endpoint" {
                        h3 { "POST /create" }
                        p { "Create a new Discord embed. All fields are optional." }
                        pre { (CREATE_EXAMPLE) }
                    }
                    div class="endpoint" {
                        h3 { "GET /embed/{id}" }
                        p { "View an embed page with its Open Graph tags" }
                    }
                    div class="endpoint" {
                        h3 { "GET /list" }
                        p { "List all active embeds" }
                    }
                    div class="endpoint" {
                        h3 { "GET /health" }
                        p { "Health check endpoint" }
                    }
                    p {
                        "Machine-readable spec: "
                        a href="/openapi.json" { "/openapi.json" }
                    }

                    p class="footer" {
                        strong { "Powered by Cryzen Self-Bot" }
                        br;
                        "Advanced Discord embed control system"
                    }
                }
            }
        }
    }
}

const INDEX_CSS: &str = r#"
body{font-family:Arial,sans-serif;margin:0;padding:0;background:#fff}
.home{max-width:800px;margin:50px auto;padding:20px;background:#f5f5f5;border-radius:10px}
.endpoint{background:#fff;padding:15px;border-radius:5px;margin:10px 0}
.endpoint pre{background:#f0f0f0;padding:10px;border-radius:3px;overflow-x:auto}
.footer{margin-top:30px;color:#666}
"#;
