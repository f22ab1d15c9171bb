//! Field-level precedence rules shared by every supplier mapper.
//!
//! Incoming text is expected to be normalized already; an empty string
//! counts as "no information" exactly like `None`.

use hotelmerge_core::{ImageDetail, ImageSet};
use indexmap::IndexSet;

/// Stores `incoming` only if `current` holds nothing and `incoming` is
/// non-empty.
pub fn fill_if_empty(current: &mut Option<String>, incoming: Option<String>) {
    if is_blank(current.as_deref()) {
        if let Some(value) = incoming.filter(|v| !v.is_empty()) {
            *current = Some(value);
        }
    }
}

/// Stores `incoming` whenever it is non-empty, regardless of `current`.
pub fn overwrite_if_present(current: &mut Option<String>, incoming: Option<String>) {
    if let Some(value) = incoming.filter(|v| !v.is_empty()) {
        *current = Some(value);
    }
}

/// Coordinate variant of [`fill_if_empty`]: zero is a supplier sentinel for
/// "unknown" and never counts as a value on either side.
pub fn fill_coordinate(current: &mut Option<f64>, incoming: Option<f64>) {
    if is_null_or_zero(*current) && !is_null_or_zero(incoming) {
        *current = incoming;
    }
}

#[must_use]
pub fn is_null_or_zero(value: Option<f64>) -> bool {
    value.is_none_or(|v| v == 0.0)
}

/// Adds every normalized token to `set`, keeping first-seen order. Tokens
/// that normalize to an empty string are skipped.
pub fn union_tokens<'a, I, F>(set: &mut IndexSet<String>, tokens: I, normalize: F)
where
    I: IntoIterator<Item = &'a String>,
    F: Fn(&str) -> String,
{
    set.extend(
        tokens
            .into_iter()
            .map(|t| normalize(t))
            .filter(|t| !t.is_empty()),
    );
}

/// Adds every image whose link is not yet present.
pub fn union_images<I>(set: &mut ImageSet, images: I)
where
    I: IntoIterator<Item = ImageDetail>,
{
    set.extend(images);
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelmerge_core::normalize::beautify_lower;

    #[test]
    fn fill_if_empty_fills_absent_value() {
        let mut current = None;
        fill_if_empty(&mut current, Some("Beach Hotel".to_owned()));
        assert_eq!(current.as_deref(), Some("Beach Hotel"));
    }

    #[test]
    fn fill_if_empty_fills_empty_string() {
        let mut current = Some(String::new());
        fill_if_empty(&mut current, Some("Beach Hotel".to_owned()));
        assert_eq!(current.as_deref(), Some("Beach Hotel"));
    }

    #[test]
    fn fill_if_empty_never_downgrades() {
        let mut current = Some("Beach Hotel".to_owned());
        fill_if_empty(&mut current, Some("Other".to_owned()));
        fill_if_empty(&mut current, Some(String::new()));
        fill_if_empty(&mut current, None);
        assert_eq!(current.as_deref(), Some("Beach Hotel"));
    }

    #[test]
    fn fill_if_empty_ignores_empty_incoming() {
        let mut current = None;
        fill_if_empty(&mut current, Some(String::new()));
        assert_eq!(current, None);
    }

    #[test]
    fn overwrite_if_present_replaces_existing() {
        let mut current = Some("SG".to_owned());
        overwrite_if_present(&mut current, Some("Singapore".to_owned()));
        assert_eq!(current.as_deref(), Some("Singapore"));
    }

    #[test]
    fn overwrite_if_present_keeps_existing_on_empty_incoming() {
        let mut current = Some("Singapore".to_owned());
        overwrite_if_present(&mut current, Some(String::new()));
        overwrite_if_present(&mut current, None);
        assert_eq!(current.as_deref(), Some("Singapore"));
    }

    #[test]
    fn fill_coordinate_rejects_zero() {
        let mut current = None;
        fill_coordinate(&mut current, Some(0.0));
        assert_eq!(current, None);
    }

    #[test]
    fn fill_coordinate_replaces_zero_sentinel() {
        let mut current = Some(0.0);
        fill_coordinate(&mut current, Some(1.264_751));
        assert_eq!(current, Some(1.264_751));
    }

    #[test]
    fn fill_coordinate_keeps_real_value() {
        let mut current = Some(12.34);
        fill_coordinate(&mut current, Some(56.78));
        assert_eq!(current, Some(12.34));
    }

    #[test]
    fn union_tokens_dedups_after_normalization() {
        let mut set: IndexSet<String> = IndexSet::new();
        set.insert("wifi".to_owned());
        let incoming = vec![
            " WiFi".to_owned(),
            "Pool".to_owned(),
            "pool ".to_owned(),
            "  ".to_owned(),
        ];
        union_tokens(&mut set, &incoming, beautify_lower);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["wifi", "pool"]);
    }

    #[test]
    fn union_images_keeps_first_description() {
        let mut set = ImageSet::new();
        union_images(
            &mut set,
            vec![
                ImageDetail::new(Some("l".to_owned()), Some("first".to_owned())),
                ImageDetail::new(Some("l".to_owned()), Some("second".to_owned())),
            ],
        );
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("l").unwrap().description.as_deref(), Some("first"));
    }
}
