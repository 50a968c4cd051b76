use std::fmt::Write as _;

use blink::{ActionMetadata, LandingState, MetadataState, WalletLinks, MISSING_INPUT_MESSAGE};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#1f2937}\
main{display:flex;flex-direction:column;align-items:center;gap:2rem;max-width:28rem;margin:0 auto;padding:2rem}\
h1{font-size:1.5rem;text-align:center;margin:0}\
.description{text-align:center;color:#4b5563;margin-top:.5rem}\
.icon{display:block;width:4rem;height:4rem;border-radius:.5rem;margin:1rem auto 0}\
.wallets{display:flex;flex-direction:column;gap:1rem;width:100%}\
.wallet{display:flex;align-items:center;justify-content:center;gap:.75rem;padding:1rem 1.5rem;\
border:1px solid #e5e7eb;border-radius:.5rem;background:#fff;color:#000;text-decoration:none;font-weight:500}\
.notice{padding:.75rem 1rem;border-radius:.5rem;text-align:center}\
.error{color:#ef4444;background:#fef2f2;border:1px solid #fee2e2}\
.info{color:#3b82f6;background:#eff6ff;border:1px solid #dbeafe}";

/// Full HTML document for a terminal page state.
pub fn render_page(state: &LandingState, page_url: &str) -> String {
    let meta = state.head_metadata();

    let body = match state {
        LandingState::MissingInput => {
            format!(r#"<p class="notice error">{}</p>"#, text(MISSING_INPUT_MESSAGE))
        }
        LandingState::Redirecting { location } => format!(
            r#"<p class="notice info">Redirecting to dial.to...</p><a href="{}">Continue</a>"#,
            attr(location)
        ),
        LandingState::WalletPicker {
            links, metadata, ..
        } => {
            let mut out = String::new();
            if let MetadataState::Ready(m) = metadata {
                out.push_str(&metadata_header(m));
            }
            out.push_str("<h1>Open with...</h1>");
            out.push_str(&wallet_buttons(links));
            out
        }
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}</head>\n<body>\n<main>{body}</main>\n</body>\n</html>\n",
        head = head_tags(&meta, page_url) + &refresh_tag(state),
    )
}

fn refresh_tag(state: &LandingState) -> String {
    match state {
        LandingState::Redirecting { location } => format!(
            "<meta http-equiv=\"refresh\" content=\"0;url={}\">\n",
            attr(location)
        ),
        _ => String::new(),
    }
}

/// `<title>` plus description, Open Graph and Twitter tags.
pub fn head_tags(meta: &ActionMetadata, page_url: &str) -> String {
    let mut out = String::new();
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", text(&meta.title));
    let _ = writeln!(out, "<style>{STYLE}</style>");

    let named = [("title", meta.title.as_str()), ("description", meta.description.as_str())];
    for (name, content) in named {
        let _ = writeln!(out, r#"<meta name="{name}" content="{}">"#, attr(content));
    }

    let properties = [
        ("og:type", "website"),
        ("og:url", page_url),
        ("og:title", meta.title.as_str()),
        ("og:description", meta.description.as_str()),
        ("og:image", meta.image.as_str()),
        ("og:site_name", meta.site_name.as_str()),
        ("twitter:card", "summary_large_image"),
        ("twitter:url", page_url),
        ("twitter:title", meta.title.as_str()),
        ("twitter:description", meta.description.as_str()),
        ("twitter:image", meta.image.as_str()),
    ];
    for (property, content) in properties {
        let _ = writeln!(out, r#"<meta property="{property}" content="{}">"#, attr(content));
    }
    out
}

fn metadata_header(meta: &ActionMetadata) -> String {
    let mut out = String::from(r#"<header class="metadata">"#);
    let _ = write!(out, "<h1>{}</h1>", text(&meta.title));
    if !meta.description.is_empty() {
        let _ = write!(out, r#"<p class="description">{}</p>"#, text(&meta.description));
    }
    if !meta.image.is_empty() {
        let _ = write!(out, r#"<img class="icon" src="{}" alt="Blink icon">"#, attr(&meta.image));
    }
    out.push_str("</header>");
    out
}

fn wallet_buttons(links: &WalletLinks) -> String {
    let mut out = String::from(r#"<div class="wallets">"#);
    for link in links.iter() {
        let name = link.wallet.display_name();
        let _ = write!(
            out,
            r#"<a class="wallet" data-wallet="{id}" href="{href}"><img src="{logo}" alt="{name} logo" width="24" height="24"><span>{name}</span></a>"#,
            id = link.wallet,
            href = attr(&link.url),
            logo = attr(link.wallet.logo_url()),
            name = text(name),
        );
    }
    out.push_str("</div>");
    out
}
