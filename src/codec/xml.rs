//! Flat XML documents: one root element, one child element per field

use std::collections::HashMap;

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlDecodeError {
    #[error("XML body is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("XML not valid: {0}")]
    Syntax(#[from] quick_xml::Error),
    #[error("Expected <{expected}> element, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },
    #[error("Missing <{0}> element")]
    MissingRoot(String),
    #[error("Unexpected second root element <{0}>")]
    MultipleRoots(String),
}

/// Read the children of `<element>` into a name -> text map.
///
/// Text is unescaped, and fragments split by comments or CDATA sections are
/// joined before trimming. Children without text are left out, so an empty
/// `<summary/>` reads as absent. Deeper nesting is ignored.
pub fn parse_record(
    body: &[u8],
    element: &str,
) -> Result<HashMap<String, String>, XmlDecodeError> {
    let text = std::str::from_utf8(body)?;
    let mut reader = Reader::from_str(text);

    let mut fields = HashMap::new();
    let mut depth = 0usize;
    let mut current: Option<(String, String)> = None;
    let mut root_seen = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                depth += 1;
                match depth {
                    1 => open_root(element, &name, &mut root_seen)?,
                    2 => current = Some((name, String::new())),
                    _ => {}
                }
            }
            Event::Empty(e) if depth == 0 => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                open_root(element, &name, &mut root_seen)?;
            }
            Event::Text(t) if depth == 2 => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&t.unescape()?);
                }
            }
            Event::CData(c) if depth == 2 => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some((name, value)) = current.take() {
                        let value = value.trim();
                        if !value.is_empty() {
                            fields.insert(name, value.to_string());
                        }
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        return Err(XmlDecodeError::MissingRoot(element.to_string()));
    }
    Ok(fields)
}

fn open_root(expected: &str, found: &str, root_seen: &mut bool) -> Result<(), XmlDecodeError> {
    if *root_seen {
        return Err(XmlDecodeError::MultipleRoots(found.to_string()));
    }
    check_root(expected, found)?;
    *root_seen = true;
    Ok(())
}

fn check_root(expected: &str, found: &str) -> Result<(), XmlDecodeError> {
    if expected == found {
        Ok(())
    } else {
        Err(XmlDecodeError::UnexpectedRoot {
            expected: expected.to_string(),
            found: found.to_string(),
        })
    }
}

/// `<tag><name>value</name>...</tag>` with escaped text
pub fn element(tag: &str, fields: &[(&str, String)]) -> String {
    let inner: String = fields
        .iter()
        .map(|(name, value)| format!("<{name}>{}</{name}>", escape(value.as_str())))
        .collect();
    wrap(tag, &inner)
}

/// Wrap already-rendered markup in `<tag>`
pub fn wrap(tag: &str, inner: &str) -> String {
    format!("<{tag}>{inner}</{tag}>")
}
