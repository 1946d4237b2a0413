//! Helpers for the media references stored on service records.
//!
//! A service keeps a primary `image_path`, an optional `images` column that
//! holds a JSON array of image paths, and an optional `video_url` which is
//! either a path inside the upload store or an external embed URL.

use serde_json::Value;

use crate::error::CoreError;

/// Image shown for services that have neither an image nor a usable video
/// thumbnail. Shared by every such row, so it is never deleted.
pub const PLACEHOLDER_IMAGE: &str = "services/default-placeholder.jpg";

/// Whether a video reference points outside the upload store.
pub fn is_external_url(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// The stored video reference if it names a file in the upload store.
pub fn local_video(video_url: Option<&str>) -> Option<&str> {
    video_url.filter(|v| !v.is_empty() && !is_external_url(v))
}

/// Path carried by one entry of an image list: either a bare string or an
/// object with a `path` key.
fn entry_path(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("path").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Parse an image list strictly. Anything other than a JSON array is a
/// validation error.
pub fn parse_image_list(raw: &str) -> Result<Vec<Value>, CoreError> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|_| CoreError::Validation("Invalid JSON format for images".into()))?;
    match parsed {
        Value::Array(items) => Ok(items),
        _ => Err(CoreError::Validation(
            "images_json must be a JSON array".into(),
        )),
    }
}

/// First usable path of an image list, ignoring malformed input.
pub fn first_image_path(raw: &str) -> Option<String> {
    parse_image_list(raw)
        .ok()?
        .first()
        .and_then(entry_path)
        .filter(|p| !p.is_empty())
}

/// Put `path` at the front of the list unless it is already present.
///
/// A missing or unparseable list becomes a single-entry list.
pub fn prepend_image(raw: Option<&str>, path: &str) -> String {
    let mut items = raw
        .and_then(|r| parse_image_list(r).ok())
        .unwrap_or_default();
    let already_listed = items
        .iter()
        .any(|item| item.as_str() == Some(path));
    if !already_listed {
        items.insert(0, Value::String(path.to_string()));
    }
    Value::Array(items).to_string()
}

/// Swap every entry pointing at `old` for `new`, keeping object entries'
/// other keys. `None` when the list is missing, unparseable or never
/// mentions `old`.
pub fn replace_image(raw: Option<&str>, old: &str, new: &str) -> Option<String> {
    let mut items = parse_image_list(raw?).ok()?;
    let mut replaced = false;
    for item in &mut items {
        if entry_path(item).as_deref() != Some(old) {
            continue;
        }
        match item {
            Value::Object(map) => {
                map.insert("path".into(), Value::String(new.to_string()));
            }
            other => *other = Value::String(new.to_string()),
        }
        replaced = true;
    }
    replaced.then(|| Value::Array(items).to_string())
}

/// Image list containing exactly one path.
pub fn single_image_list(path: &str) -> String {
    Value::Array(vec![Value::String(path.to_string())]).to_string()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn external_urls_are_recognised() {
        assert!(is_external_url("https://www.youtube.com/embed/abc"));
        assert!(is_external_url("http://vimeo.com/1"));
        assert!(!is_external_url("services/videos/clip.mp4"));
    }

    #[test]
    fn local_video_skips_urls_and_empty_values() {
        assert_eq!(local_video(Some("services/videos/a.mp4")), Some("services/videos/a.mp4"));
        assert_eq!(local_video(Some("https://youtu.be/x")), None);
        assert_eq!(local_video(Some("")), None);
        assert_eq!(local_video(None), None);
    }

    #[test]
    fn first_image_accepts_strings_and_objects() {
        assert_eq!(
            first_image_path(r#"["services/a.jpg","services/b.jpg"]"#).as_deref(),
            Some("services/a.jpg")
        );
        assert_eq!(
            first_image_path(r#"[{"path":"services/c.jpg"}]"#).as_deref(),
            Some("services/c.jpg")
        );
    }

    #[test]
    fn first_image_ignores_bad_input() {
        assert_eq!(first_image_path("not json"), None);
        assert_eq!(first_image_path("[]"), None);
        assert_eq!(first_image_path(r#"{"path":"x"}"#), None);
    }

    #[test]
    fn strict_parse_rejects_non_arrays() {
        assert_matches!(parse_image_list("{}"), Err(CoreError::Validation(_)));
        assert_matches!(parse_image_list("oops"), Err(CoreError::Validation(_)));
        assert_eq!(parse_image_list(r#"["a"]"#).unwrap().len(), 1);
    }

    #[test]
    fn prepend_adds_to_front_once() {
        let list = prepend_image(Some(r#"["b.jpg"]"#), "a.jpg");
        assert_eq!(list, r#"["a.jpg","b.jpg"]"#);

        let again = prepend_image(Some(&list), "a.jpg");
        assert_eq!(again, list);
    }

    #[test]
    fn replace_swaps_strings_and_object_paths() {
        let list = replace_image(
            Some(r#"["services/old.jpg",{"path":"services/old.jpg","alt":"x"},"services/b.jpg"]"#),
            "services/old.jpg",
            "services/new.jpg",
        );
        assert_eq!(
            list.as_deref(),
            Some(r#"["services/new.jpg",{"alt":"x","path":"services/new.jpg"},"services/b.jpg"]"#)
        );
    }

    #[test]
    fn replace_leaves_unrelated_lists_alone() {
        assert_eq!(replace_image(Some(r#"["services/b.jpg"]"#), "services/a.jpg", "n.jpg"), None);
        assert_eq!(replace_image(Some("garbage"), "a.jpg", "n.jpg"), None);
        assert_eq!(replace_image(None, "a.jpg", "n.jpg"), None);
    }

    #[test]
    fn prepend_replaces_garbage_with_single_entry() {
        assert_eq!(prepend_image(Some("garbage"), "a.jpg"), r#"["a.jpg"]"#);
        assert_eq!(prepend_image(None, "a.jpg"), single_image_list("a.jpg"));
    }
}
