//! RSS/Atom feed source
//!
//! Each configured feed is fetched and parsed independently. Failures are
//! logged and yield no sentences so one broken feed never empties the pool.

use async_trait::async_trait;
use chrono::Utc;
use feed_rs::model::{Entry, FeedType};
use reqwest::Client;
use tracing::{debug, warn};

use super::SentenceSource;
use super::extract::extract_sentences;
use crate::core::models::{CandidateSentence, Category, FeedSource};
use crate::errors::EisakuError;

/// Only the newest items of each feed are considered.
pub const ITEMS_PER_FEED: usize = 10;

// Wide enough that html2text never wraps a paragraph mid-sentence.
const HTML_RENDER_WIDTH: usize = 10_000;

pub static RSS_FEEDS: &[FeedSource] = &[
    FeedSource {
        url: "https://gigazine.net/news/rss_2.0/",
        source: "GIGAZINE",
        category: Category::Tech,
    },
    FeedSource {
        url: "https://rss.itmedia.co.jp/rss/2.0/itmedia_all.xml",
        source: "ITmedia",
        category: Category::Tech,
    },
    FeedSource {
        url: "https://natalie.mu/music/feed/news",
        source: "音楽ナタリー",
        category: Category::Culture,
    },
    FeedSource {
        url: "https://natalie.mu/eiga/feed/news",
        source: "映画ナタリー",
        category: Category::Culture,
    },
    FeedSource {
        url: "https://www.cinra.net/feed/reader",
        source: "CINRA",
        category: Category::Culture,
    },
    FeedSource {
        url: "https://www.gnavi.co.jp/dressing/feed/",
        source: "dressing",
        category: Category::Food,
    },
    FeedSource {
        url: "https://macaro-ni.jp/feed",
        source: "macaroni",
        category: Category::Food,
    },
    FeedSource {
        url: "https://www.wwdjapan.com/feed",
        source: "WWD JAPAN",
        category: Category::Fashion,
    },
    FeedSource {
        url: "https://www.fashionsnap.com/feed/",
        source: "FASHIONSNAP",
        category: Category::Fashion,
    },
    FeedSource {
        url: "https://www.bbc.com/japanese/index.xml",
        source: "BBC Japan",
        category: Category::World,
    },
    FeedSource {
        url: "https://www.cnn.co.jp/rss/index.rdf",
        source: "CNN Japan",
        category: Category::World,
    },
];

pub struct RssFeedSource {
    http: Client,
    feed: FeedSource,
}

impl RssFeedSource {
    #[must_use]
    pub fn new(http: Client, feed: FeedSource) -> Self {
        Self { http, feed }
    }

    async fn fetch(&self) -> Result<Vec<CandidateSentence>, EisakuError> {
        let resp = self.http.get(self.feed.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(EisakuError::FeedError(format!("HTTP {status}")));
        }
        let bytes = resp.bytes().await?;
        sentences_from_feed(&bytes, &self.feed)
    }
}

#[async_trait]
impl SentenceSource for RssFeedSource {
    fn name(&self) -> &str {
        self.feed.source
    }

    async fn sentences(&self) -> Vec<CandidateSentence> {
        match self.fetch().await {
            Ok(sentences) => {
                debug!(
                    source = self.feed.source,
                    count = sentences.len(),
                    "Extracted sentences from feed"
                );
                sentences
            }
            Err(e) => {
                warn!(source = self.feed.source, url = self.feed.url, "RSS fetch error: {}", e);
                Vec::new()
            }
        }
    }
}

/// Parse a raw feed document and extract sentences from its first items.
pub fn sentences_from_feed(
    document: &[u8],
    feed: &FeedSource,
) -> Result<Vec<CandidateSentence>, EisakuError> {
    let parsed = feed_rs::parser::parse(document)
        .map_err(|e| EisakuError::FeedError(format!("parse error: {e}")))?;

    let sentences = parsed
        .entries
        .iter()
        .take(ITEMS_PER_FEED)
        .flat_map(|entry| {
            let text = entry_text(entry, &parsed.feed_type);
            let published_at = entry_published_at(entry);
            extract_sentences(&text, feed.source, feed.category, &published_at)
        })
        .collect();

    Ok(sentences)
}

/// Text an item contributes sentences from.
///
/// RSS and RDF items are read from `<description>` only; a full
/// `<content:encoded>` body is ignored. Atom and JSON entries prefer their
/// content over the summary. In both cases the HTML-stripped snippet comes
/// first, then the raw text.
#[must_use]
pub fn entry_text(entry: &Entry, feed_type: &FeedType) -> String {
    let summary = entry
        .summary
        .as_ref()
        .map(|t| t.content.as_str())
        .filter(|s| !s.trim().is_empty());
    let content = match feed_type {
        FeedType::RSS0 | FeedType::RSS1 | FeedType::RSS2 => None,
        FeedType::Atom | FeedType::JSON => entry
            .content
            .as_ref()
            .and_then(|c| c.body.as_deref())
            .filter(|s| !s.trim().is_empty()),
    };

    let snippet = content.or(summary).map(html_to_snippet).unwrap_or_default();

    [Some(snippet.as_str()), content, summary]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or_default()
        .to_string()
}

fn entry_published_at(entry: &Entry) -> String {
    entry
        .published
        .or(entry.updated)
        .unwrap_or_else(Utc::now)
        .to_rfc3339()
}

/// Render HTML to plain text on a single line.
#[must_use]
pub fn html_to_snippet(html: &str) -> String {
    let rendered = html2text::config::plain_no_decorate()
        .string_from_read(html.as_bytes(), HTML_RENDER_WIDTH)
        .unwrap_or_else(|_| html.to_string());
    rendered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: FeedSource = FeedSource {
        url: "https://example.com/feed",
        source: "Example",
        category: Category::Culture,
    };

    fn rss_with_items(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>Example</title><link>https://example.com</link>
<description>test</description>{items}</channel></rss>"#
        )
    }

    #[test]
    fn extracts_from_rss_description() {
        let xml = rss_with_items(
            r"<item><title>t</title>
<description>新しい映画が来月公開される予定です。短い。</description>
<pubDate>Mon, 06 May 2024 09:00:00 GMT</pubDate></item>",
        );
        let out = sentences_from_feed(xml.as_bytes(), &FEED).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].sentence, "新しい映画が来月公開される予定です。");
        assert_eq!(out[0].source, "Example");
        assert_eq!(out[0].category, Category::Culture);
        assert_eq!(out[0].published_at, "2024-05-06T09:00:00+00:00");
    }

    #[test]
    fn strips_html_from_item_content() {
        let xml = rss_with_items(
            r"<item><title>t</title>
<description>&lt;p&gt;&lt;b&gt;人気のカフェ&lt;/b&gt;が新しいメニューを発表しました。&lt;/p&gt;</description></item>",
        );
        let out = sentences_from_feed(xml.as_bytes(), &FEED).unwrap();

        assert_eq!(out.len(), 1);
        assert!(!out[0].sentence.contains('<'), "{}", out[0].sentence);
        assert!(out[0].sentence.starts_with("人気のカフェ"));
        assert!(out[0].sentence.ends_with("新しいメニューを発表しました。"));
    }

    #[test]
    fn rss_description_wins_over_encoded_content() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel><title>Example</title><link>https://example.com</link><description>test</description>
<item><title>t</title>
<description>説明文として配信された要約の文章です。</description>
<content:encoded><![CDATA[<p>記事本文の一段落目がここにあります。</p><p>記事本文の二段落目もここにあります。</p>]]></content:encoded>
</item></channel></rss>"#;
        let out = sentences_from_feed(xml.as_bytes(), &FEED).unwrap();

        let sentences: Vec<&str> = out.iter().map(|s| s.sentence.as_str()).collect();
        assert_eq!(sentences, vec!["説明文として配信された要約の文章です。"]);
    }

    #[test]
    fn atom_content_wins_over_summary() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
<title>Example</title><id>urn:example</id><updated>2024-03-01T12:00:00Z</updated>
<entry><title>t</title><id>urn:example:1</id><updated>2024-03-01T12:00:00Z</updated>
<summary>要約として配信された短い説明の文章です。</summary>
<content type="html">&lt;p&gt;本文として配信された記事の最初の文章です。&lt;/p&gt;</content>
</entry></feed>"#;
        let out = sentences_from_feed(xml.as_bytes(), &FEED).unwrap();

        let sentences: Vec<&str> = out.iter().map(|s| s.sentence.as_str()).collect();
        assert_eq!(sentences, vec!["本文として配信された記事の最初の文章です。"]);
    }

    #[test]
    fn only_first_ten_items_are_used() {
        let items: String = (0..15)
            .map(|i| {
                format!(
                    "<item><title>{i}</title><description>記事番号{i}の内容をお知らせします。</description></item>"
                )
            })
            .collect();
        let out = sentences_from_feed(rss_with_items(&items).as_bytes(), &FEED).unwrap();

        assert_eq!(out.len(), ITEMS_PER_FEED);
        assert!(out.iter().all(|s| !s.sentence.contains("記事番号10")));
    }

    #[test]
    fn missing_date_falls_back_to_now() {
        let xml = rss_with_items(
            "<item><title>t</title><description>日付のない記事の本文がここにあります。</description></item>",
        );
        let out = sentences_from_feed(xml.as_bytes(), &FEED).unwrap();

        assert_eq!(out.len(), 1);
        assert!(chrono::DateTime::parse_from_rfc3339(&out[0].published_at).is_ok());
    }

    #[test]
    fn invalid_document_is_an_error() {
        let err = sentences_from_feed(b"not a feed", &FEED).unwrap_err();
        assert!(matches!(err, EisakuError::FeedError(_)));
    }

    #[test]
    fn feed_table_covers_every_rss_category() {
        assert_eq!(RSS_FEEDS.len(), 11);
        for category in [
            Category::Tech,
            Category::Culture,
            Category::Food,
            Category::Fashion,
            Category::World,
        ] {
            assert!(RSS_FEEDS.iter().any(|f| f.category == category));
        }
        assert!(RSS_FEEDS.iter().all(|f| f.category != Category::News));
    }

    #[test]
    fn snippet_collapses_whitespace() {
        assert_eq!(html_to_snippet("<p>一行目\n\n二行目</p>"), "一行目 二行目");
    }
}
