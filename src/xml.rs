use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;

/// Deserializes `body` as a document rooted at `root`.
///
/// Returns `None` when the body is not XML, has a different root element, or
/// lacks the fields `T` requires.
pub(crate) fn parse_document<T: DeserializeOwned>(body: &str, root: &str) -> Option<T> {
    if root_name(body)? != root {
        return None;
    }
    quick_xml::de::from_str(body).ok()
}

fn root_name(body: &str) -> Option<String> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}
