//! Fetch a remote page and keep only its visible text.
//!
//! The HTML handling is a naive strip: drop script/style blocks, drop tags,
//! decode a handful of common entities, collapse whitespace. It stands in
//! for a real extraction pipeline and is good enough for plain pages.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use regex::Regex;
use std::sync::OnceLock;

fn script_style_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<(script|style)\b.*?</(script|style)>").expect("static regex")
    })
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("static regex"))
}

/// Visible text of an HTML document, whitespace-collapsed
fn visible_text(html: &str) -> String {
    let without_blocks = script_style_re().replace_all(html, " ");
    let without_tags = tag_re().replace_all(&without_blocks, " ");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub async fn scrape_text(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let url = params.require("url")?;
    anyhow::ensure!(
        url.starts_with("http://") || url.starts_with("https://"),
        "not an http(s) URL: {url:?}"
    );

    let body = ctx
        .client()
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()
        .with_context(|| format!("{url} returned an error status"))?
        .text()
        .await
        .context("failed to read response body")?;

    let text = visible_text(&body);
    let output = ctx.data_path(params.require("output")?);
    tokio::fs::write(&output, text)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok("Website text extracted successfully".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing;

    #[test]
    fn test_visible_text_drops_tags_and_scripts() {
        let html = r#"<html><head><style>body { color: red; }</style>
            <script type="text/javascript">var x = 1 < 2;</script></head>
            <body><h1>Hello</h1><p>world &amp; friends</p></body></html>"#;
        assert_eq!(visible_text(html), "Hello world & friends");
    }

    #[test]
    fn test_visible_text_decodes_common_entities() {
        assert_eq!(visible_text("a&nbsp;&lt;b&gt;&#39;c&#39;"), "a <b>'c'");
    }

    #[tokio::test]
    async fn test_non_http_url_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = testing::ctx(dir.path());
        let params = testing::params(&[("url", "ftp://example.com"), ("output", "webpage.txt")]);
        let err = scrape_text(&ctx, &params).await.unwrap_err();
        assert!(format!("{err:#}").contains("not an http(s) URL"));
    }
}
