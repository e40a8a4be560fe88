//! Conversion between [`Params`] and the gateway's flat XML wire format.
//!
//! Documents are always one level deep: an `<xml>` root with one child
//! element per field, each value wrapped in a CDATA section so it is passed
//! through verbatim, never entity-escaped.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::params::Params;

/// Serializes `params` to an XML document in map iteration order.
pub fn to_xml(params: &Params) -> String {
    let mut buf = String::from("<xml>");
    for (key, value) in params.iter() {
        buf.push('<');
        buf.push_str(key);
        buf.push_str("><![CDATA[");
        buf.push_str(value);
        buf.push_str("]]></");
        buf.push_str(key);
        buf.push('>');
    }
    buf.push_str("</xml>");
    buf
}

/// Parses an XML document back into a [`Params`] map.
///
/// A two-state streaming pass: a start tag other than the `xml` root arms the
/// current key, and the next text or CDATA token is assigned as its value.
/// Bare-newline text nodes from pretty-printed documents are dropped. Parsing
/// stops at end-of-document or at the first parse error, whichever comes
/// first; whatever was accumulated so far is returned, never an error.
pub fn from_xml(doc: &str) -> Params {
    let mut params = Params::new();
    let mut reader = Reader::from_str(doc);
    let mut current: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) => {
                let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
                current = (name != "xml").then_some(name);
            }
            Ok(Event::Text(text)) => {
                if let Some(key) = current.take() {
                    match text.unescape() {
                        Ok(value) if value != "\n" => {
                            params.set_string(key, value.into_owned());
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(key) = current.take() {
                    let value = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    if value != "\n" {
                        params.set_string(key, value);
                    }
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
    }

    params
}

/// Strips every newline and space character from the raw document text.
///
/// Some gateway responses arrive pretty-printed; this normalizes them before
/// decoding. It is a blunt textual strip, not an XML-aware minifier: a field
/// value containing a literal space or newline would lose it too. The live
/// integration depends on exactly this behavior, so it must not be replaced
/// with anything smarter without re-verifying the upstream response format.
pub fn compact(doc: &str) -> String {
    doc.replace('\n', "").replace(' ', "")
}
