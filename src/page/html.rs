//! Minimal HTML reduction: locate one element by tag and class and flatten
//! its text.
//!
//! The page is scanned as a flat stream of markup spans; no DOM is built.
//! Text follows `get_text(strip=True)` semantics: every text node is decoded
//! and trimmed, empty nodes are dropped, and the rest are concatenated with
//! no separator.

/// One `<...>` span (tag, comment, or declaration).
#[derive(Debug)]
struct Markup<'a> {
    start: usize,
    end: usize,
    tag: Option<Tag<'a>>,
}

#[derive(Debug)]
struct Tag<'a> {
    name: &'a str,
    attrs: &'a str,
    closing: bool,
    self_closing: bool,
}

impl Tag<'_> {
    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    fn is_raw_text(&self) -> bool {
        self.is("script") || self.is("style")
    }

    fn opens_raw_text(&self) -> bool {
        self.is_raw_text() && !self.closing && !self.self_closing
    }
}

struct MarkupIter<'a> {
    html: &'a str,
    pos: usize,
    /// Name of the script/style element whose content is being skipped.
    raw_text: Option<&'a str>,
}

impl<'a> MarkupIter<'a> {
    fn new(html: &'a str) -> Self {
        Self {
            html,
            pos: 0,
            raw_text: None,
        }
    }

    /// Start of the next `<` that opens a tag, comment, or declaration.
    ///
    /// A `<` not followed by a letter, `/`, `!` or `?` is plain text.
    fn next_markup_start(&self) -> Option<usize> {
        let bytes = self.html.as_bytes();
        let mut from = self.pos;
        loop {
            let at = from + self.html.get(from..)?.find('<')?;
            match bytes.get(at + 1) {
                Some(&next) if next.is_ascii_alphabetic() || matches!(next, b'/' | b'!' | b'?') => {
                    return Some(at);
                }
                _ => from = at + 1,
            }
        }
    }

    /// Start of the closing tag for raw-text element `name`.
    fn raw_text_end(&self, name: &str) -> Option<usize> {
        let rest = self.html.get(self.pos..)?.to_ascii_lowercase();
        let closing = format!("</{}", name.to_ascii_lowercase());
        rest.find(&closing).map(|rel| self.pos + rel)
    }
}

impl<'a> Iterator for MarkupIter<'a> {
    type Item = Markup<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let html = self.html;
        let start = match self.raw_text.take() {
            Some(name) => self.raw_text_end(name)?,
            None => self.next_markup_start()?,
        };

        if html[start..].starts_with("<!--") {
            let end = html[start..]
                .find("-->")
                .map_or(html.len(), |rel| start + rel + 3);
            self.pos = end;
            return Some(Markup { start, end, tag: None });
        }

        let end = html[start..].find('>').map_or(html.len(), |rel| start + rel + 1);
        self.pos = end;

        let inner = html[start + 1..end].trim_end_matches('>');
        let closing = inner.starts_with('/');
        let body = inner.trim_start_matches('/');
        let name_len = body
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(body.len());

        let tag = (name_len > 0).then(|| Tag {
            name: &body[..name_len],
            attrs: &body[name_len..],
            closing,
            self_closing: body.ends_with('/'),
        });

        if let Some(raw) = tag.as_ref().filter(|t| t.opens_raw_text()) {
            self.raw_text = Some(raw.name);
        }

        Some(Markup { start, end, tag })
    }
}

/// Value of the `class` attribute in a tag's attribute text.
fn class_attr(attrs: &str) -> Option<&str> {
    let lower = attrs.to_ascii_lowercase();
    let mut from = 0;
    while let Some(rel) = lower[from..].find("class") {
        let at = from + rel;
        from = at + "class".len();

        let standalone = at == 0 || lower.as_bytes()[at - 1].is_ascii_whitespace();
        if !standalone {
            continue;
        }
        let Some(value) = attrs[from..].trim_start().strip_prefix('=') else {
            continue;
        };
        let value = value.trim_start();
        return match value.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &value[1..];
                Some(body.find(quote).map_or(body, |close| &body[..close]))
            }
            Some(_) => {
                let len = value
                    .find(|c: char| c.is_whitespace() || c == '/')
                    .unwrap_or(value.len());
                Some(&value[..len])
            }
            None => None,
        };
    }
    None
}

fn has_class(tag: &Tag<'_>, class: &str) -> bool {
    class_attr(tag.attrs).is_some_and(|list| list.split_whitespace().any(|c| c == class))
}

/// Replace the handful of entities the status text actually uses.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

fn push_text(out: &mut String, raw: &str) {
    let decoded = decode_entities(raw);
    let trimmed = decoded.trim();
    if !trimmed.is_empty() {
        out.push_str(trimmed);
    }
}

/// Text of the first `tag_name` element whose class list contains `class`.
///
/// Returns `None` when no such element exists. An unclosed element runs to
/// the end of the document.
#[must_use]
pub fn element_text_by_class(html: &str, tag_name: &str, class: &str) -> Option<String> {
    let mut markups = MarkupIter::new(html);
    let open = markups.by_ref().find(|m| {
        m.tag
            .as_ref()
            .is_some_and(|t| !t.closing && t.is(tag_name) && has_class(t, class))
    })?;
    let open_tag = open.tag?;
    if open_tag.self_closing {
        return Some(String::new());
    }

    let mut text = String::new();
    let mut depth = 1usize;
    let mut cursor = open.end;
    let mut in_raw_text = false;

    for markup in markups {
        if !in_raw_text {
            push_text(&mut text, &html[cursor..markup.start]);
        }
        cursor = markup.end;

        let Some(tag) = markup.tag else {
            continue;
        };
        if tag.is_raw_text() {
            in_raw_text = tag.opens_raw_text();
        }
        if tag.is(open_tag.name) && !tag.self_closing {
            if tag.closing {
                depth -= 1;
                if depth == 0 {
                    return Some(text);
                }
            } else {
                depth += 1;
            }
        }
    }

    if !in_raw_text {
        push_text(&mut text, &html[cursor..]);
    }
    Some(text)
}
