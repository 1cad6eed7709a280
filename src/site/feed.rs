//! RSS feed of published answers

use super::{AnswerRecord, PuzzleDate};
use std::fmt::{self, Write};

/// Channel-level settings for the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedChannel {
    pub site_url: String,
    pub title: String,
    pub description: String,
    pub language: String,
}

impl Default for FeedChannel {
    fn default() -> Self {
        Self {
            site_url: "https://spellbee.me/".to_string(),
            title: "SpellBeeMe - Daily Spelling Bee Answers".to_string(),
            description: "Daily answers for the NY Times Spelling Bee puzzle".to_string(),
            language: "en-us".to_string(),
        }
    }
}

impl FeedChannel {
    /// Replace the site URL, keeping the other channel defaults
    #[must_use]
    pub fn with_site(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    /// Site URL with exactly one trailing slash
    fn base(&self) -> String {
        format!("{}/", self.site_url.trim_end_matches('/'))
    }
}

/// Escape text for use in XML character data and attributes
#[must_use]
pub fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

fn item_description(record: &AnswerRecord, link: &str) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<p><strong>Date:</strong> {}</p>\n",
        record.date.format_long()
    ));
    html.push_str(&format!(
        "<p><strong>Pangrams:</strong> {}</p>\n",
        record.pangrams.len()
    ));
    if !record.pangrams.is_empty() {
        html.push_str("<p><strong>Found Pangrams:</strong></p>\n<ul>\n");
        for pangram in &record.pangrams {
            html.push_str(&format!("  <li>{}</li>\n", xml_escape(pangram)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str(&format!(
        "<p><a href=\"{}\">View full answer</a></p>",
        xml_escape(link)
    ));
    html
}

/// Write an RSS 2.0 document for the given records
///
/// Items are emitted newest first. The channel's build date is the newest record's
/// date, or the Unix epoch when there are no records.
///
/// # Errors
/// Propagates errors from the underlying writer.
pub fn write_feed<W: Write>(
    out: &mut W,
    channel: &FeedChannel,
    records: &[AnswerRecord],
) -> fmt::Result {
    let mut sorted: Vec<&AnswerRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let base = channel.base();
    let latest = sorted.first().map_or(PuzzleDate::EPOCH, |record| record.date);

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:atom="http://www.w3.org/2005/Atom">"#
    )?;
    writeln!(out, "  <channel>")?;
    writeln!(out, "    <title>{}</title>", xml_escape(&channel.title))?;
    writeln!(out, "    <link>{}</link>", xml_escape(&base))?;
    writeln!(
        out,
        r#"    <atom:link href="{}rss.xml" rel="self" type="application/rss+xml" />"#,
        xml_escape(&base)
    )?;
    writeln!(
        out,
        "    <description>{}</description>",
        xml_escape(&channel.description)
    )?;
    writeln!(out, "    <language>{}</language>", xml_escape(&channel.language))?;
    writeln!(out, "    <lastBuildDate>{}</lastBuildDate>", latest.to_rfc822())?;

    for record in sorted {
        let link = format!("{base}answers/{}", record.slug());
        writeln!(out, "    <item>")?;
        writeln!(
            out,
            "      <title>Spelling Bee Answer - {}</title>",
            record.date.format_long()
        )?;
        writeln!(out, "      <link>{}</link>", xml_escape(&link))?;
        writeln!(out, "      <guid>{}</guid>", xml_escape(&link))?;
        writeln!(out, "      <pubDate>{}</pubDate>", record.date.to_rfc822())?;
        writeln!(
            out,
            "      <description>{}</description>",
            cdata(&item_description(record, &link))
        )?;
        writeln!(out, "    </item>")?;
    }

    writeln!(out, "  </channel>")?;
    writeln!(out, "</rss>")
}

/// Render the feed to a string
///
/// # Panics
/// Will not panic - writing to a `String` cannot fail.
#[must_use]
pub fn render_feed(channel: &FeedChannel, records: &[AnswerRecord]) -> String {
    let mut out = String::new();
    write_feed(&mut out, channel, records).expect("writing to a String is infallible");
    out
}
