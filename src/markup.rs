//! Markup-to-text conversion for EPUB content documents.
//!
//! A single forward pass over the document collects the text that sits
//! between tags. Nothing is rendered: block structure, tag names and
//! attributes are discarded, and each run of text between two tags becomes
//! one trimmed chunk. Chunks are joined with single spaces.
//!
//! ```text
//! <p>Hola <b>mundo</b>!</p>   ──▶   "Hola mundo !"
//! ```
//!
//! `script` and `style` bodies are raw text: they are captured like any
//! other text, verbatim and without entity decoding, up to the matching
//! close tag.

use std::borrow::Cow;

/// Elements whose content is raw text rather than markup.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// Decode bytes as UTF-8, dropping invalid sequences instead of failing.
///
/// A leading byte-order mark is dropped as well. Valid input is returned
/// borrowed.
pub fn decode_lenient(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    if let Ok(s) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    Cow::Owned(out)
}

/// Strip markup from `markup`, returning the trimmed text runs joined by
/// single spaces. Returns an empty string when the document holds no text.
pub fn html_to_text(markup: &str) -> String {
    text_chunks(markup).join(" ")
}

/// Collect the trimmed, non-empty text runs of `markup` in document order.
pub fn text_chunks(markup: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = markup;

    while !rest.is_empty() {
        let Some(lt) = find_tag_start(rest) else {
            push_chunk(&mut chunks, &decode_entities(rest));
            break;
        };

        push_chunk(&mut chunks, &decode_entities(&rest[..lt]));
        rest = &rest[lt..];

        match scan_markup(rest) {
            Markup::Start { name, len } => {
                rest = &rest[len..];
                if let Some(raw) = RAW_TEXT_ELEMENTS.iter().find(|e| **e == name) {
                    let end = find_close_tag(rest, raw).unwrap_or(rest.len());
                    push_chunk(&mut chunks, &rest[..end]);
                    rest = &rest[end..];
                }
            }
            Markup::Skip { len } => rest = &rest[len..],
            Markup::Unterminated => break,
        }
    }

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

enum Markup {
    /// An opening tag that is not self-closing. `name` is lowercased.
    Start { name: String, len: usize },
    /// Anything else that produces no text: end tags, self-closing tags,
    /// comments, declarations, processing instructions, CDATA.
    Skip { len: usize },
    /// Input ended inside the construct.
    Unterminated,
}

/// Byte offset of the next `<` that opens a markup construct. A `<` that is
/// followed by anything other than a letter, `/`, `!` or `?` is plain text.
fn find_tag_start(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut from = 0;
    while let Some(pos) = s[from..].find('<') {
        let at = from + pos;
        match bytes.get(at + 1) {
            Some(b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?') => {
                return Some(at)
            }
            _ => from = at + 1,
        }
    }
    None
}

/// Classify the construct at the start of `s` (which begins with `<`).
fn scan_markup(s: &str) -> Markup {
    if s.starts_with("<!--") {
        return skip_past(s, 4, "-->");
    }
    if s.starts_with("<![CDATA[") {
        return skip_past(s, 9, "]]>");
    }
    if s.starts_with("<!") {
        return skip_past(s, 2, ">");
    }
    if s.starts_with("<?") {
        return skip_past(s, 2, ">");
    }

    let Some(len) = tag_end(s) else {
        return Markup::Unterminated;
    };

    if s.as_bytes()[1] == b'/' {
        return Markup::Skip { len };
    }

    let name: String = s[1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        .collect::<String>()
        .to_ascii_lowercase();

    if s[..len].trim_end_matches('>').ends_with('/') {
        Markup::Skip { len }
    } else {
        Markup::Start { name, len }
    }
}

fn skip_past(s: &str, from: usize, terminator: &str) -> Markup {
    match s[from..].find(terminator) {
        Some(pos) => Markup::Skip {
            len: from + pos + terminator.len(),
        },
        None => Markup::Unterminated,
    }
}

/// Length of the tag at the start of `s`, including the closing `>`.
/// Quoted attribute values may contain `>`.
fn tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in s.as_bytes().iter().enumerate().skip(1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return Some(i + 1),
                _ => {}
            },
        }
    }
    None
}

/// Offset of the `</name` that closes a raw-text element, matched
/// case-insensitively.
fn find_close_tag(s: &str, name: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut from = 0;
    while let Some(pos) = s[from..].find("</") {
        let at = from + pos;
        let candidate = &bytes[at + 2..];
        if candidate.len() >= name.len()
            && candidate[..name.len()].eq_ignore_ascii_case(name.as_bytes())
        {
            let after = candidate.get(name.len()).copied();
            if after.is_none_or(|b| b == b'>' || b == b'/' || b.is_ascii_whitespace()) {
                return Some(at);
            }
        }
        from = at + 2;
    }
    None
}

/// Replace character references with the characters they denote.
///
/// Uses the full HTML5 named-reference table, including the legacy names
/// that may appear without a trailing `;` (`&copy 2020`). Unknown or
/// malformed references are kept as written.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    htmlize::unescape(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_text_between_tags() {
        let html = "<html><body><h1>Título</h1><p>Hola mundo</p></body></html>";
        assert_eq!(html_to_text(html), "Título Hola mundo");
    }

    #[test]
    fn inline_tags_split_runs() {
        assert_eq!(html_to_text("<p>Hello <b>World</b>!</p>"), "Hello World !");
    }

    #[test]
    fn skips_prolog_doctype_and_comments() {
        let html = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml">
<!-- chapter marker -->
<body><p>Capítulo uno</p><![CDATA[ ignored ]]></body></html>"#;
        assert_eq!(html_to_text(html), "Capítulo uno");
    }

    #[test]
    fn attribute_values_may_contain_gt() {
        let html = r#"<p title="a > b" class='x'>visible</p>"#;
        assert_eq!(html_to_text(html), "visible");
    }

    #[test]
    fn script_and_style_content_is_raw_text() {
        let html = "<style>p { color: red }</style><p>Text</p><SCRIPT>if (a < b) { x = '&amp;'; }</script>";
        assert_eq!(
            text_chunks(html),
            vec!["p { color: red }", "Text", "if (a < b) { x = '&amp;'; }"]
        );
    }

    #[test]
    fn self_closing_script_does_not_swallow_document() {
        let html = r#"<script src="x.js"/><p>after</p>"#;
        assert_eq!(html_to_text(html), "after");
    }

    #[test]
    fn lone_lt_is_text() {
        assert_eq!(html_to_text("<p>1 < 2</p>"), "1 < 2");
    }

    #[test]
    fn unterminated_tag_contributes_nothing() {
        assert_eq!(html_to_text("<p>fin</p><span class=\"x"), "fin");
    }

    #[test]
    fn whitespace_only_document_is_empty() {
        assert_eq!(html_to_text("<html>\n  <body>\n\t</body>\n</html>"), "");
    }

    #[test]
    fn decodes_named_and_numeric_references() {
        assert_eq!(
            decode_entities("Caf&eacute; &amp; t&#233; &#xE9; &lt;b&gt;"),
            "Café & té é <b>"
        );
    }

    #[test]
    fn unknown_references_are_kept() {
        assert_eq!(decode_entities("AT&T &bogus; & more"), "AT&T &bogus; & more");
    }

    #[test]
    fn decodes_full_html5_table_and_legacy_references() {
        let html = "<p>Flecha &rarr; y &oelig;uvre &thinsp;x &copy 2020 &hellip;</p>";
        assert_eq!(html_to_text(html), "Flecha → y œuvre \u{2009}x © 2020 …");
    }

    #[test]
    fn raw_text_references_stay_encoded() {
        assert_eq!(html_to_text("<script>a &rarr; b</script>"), "a &rarr; b");
    }

    #[test]
    fn nbsp_is_trimmed_like_other_whitespace() {
        assert_eq!(html_to_text("<p>&nbsp;hola&nbsp;</p>"), "hola");
    }

    #[test]
    fn lenient_decode_drops_invalid_bytes() {
        let bytes = b"Hola \xFF\xFEmundo";
        assert_eq!(decode_lenient(bytes), "Hola mundo");
    }

    #[test]
    fn lenient_decode_strips_bom_and_borrows_valid_input() {
        let decoded = decode_lenient(b"\xEF\xBB\xBF<p>x</p>");
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "<p>x</p>");
    }
}
