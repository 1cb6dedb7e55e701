use serde::{Deserialize, Serialize};
use std::iter;

/// One step of a breadcrumb trail.
///
/// `url` is carried for callers but not acted on; crumbs are labels, not
/// links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub title: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        BreadcrumbItem {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A rendered element of a trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Crumb(&'a BreadcrumbItem),
    /// Chevron placed after the crumb with this title.
    Separator { after: &'a str },
}

/// Crumbs interleaved with separators, with none after the last crumb.
pub fn segments(items: &[BreadcrumbItem]) -> impl Iterator<Item = Segment<'_>> {
    let last = items.len().saturating_sub(1);
    items.iter().enumerate().flat_map(move |(index, item)| {
        let separator = (index < last).then(|| Segment::Separator {
            after: item.title.as_str(),
        });
        iter::once(Segment::Crumb(item)).chain(separator)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Vec<BreadcrumbItem> {
        vec![
            BreadcrumbItem::new("A", "/a"),
            BreadcrumbItem::new("B", "/b"),
            BreadcrumbItem::new("C", "/c"),
        ]
    }

    #[test]
    fn test_separators_between_items_only() {
        let items = paths();
        let rendered: Vec<_> = segments(&items).collect();

        assert_eq!(
            rendered,
            vec![
                Segment::Crumb(&items[0]),
                Segment::Separator { after: "A" },
                Segment::Crumb(&items[1]),
                Segment::Separator { after: "B" },
                Segment::Crumb(&items[2]),
            ]
        );
        let separators = rendered
            .iter()
            .filter(|s| matches!(s, Segment::Separator { .. }))
            .count();
        assert_eq!(separators, 2);
    }

    #[test]
    fn test_single_item_has_no_separator() {
        let items = vec![BreadcrumbItem::new("Home", "/")];
        let rendered: Vec<_> = segments(&items).collect();
        assert_eq!(rendered, vec![Segment::Crumb(&items[0])]);
    }

    #[test]
    fn test_empty_trail() {
        assert_eq!(segments(&[]).count(), 0);
    }

    #[test]
    fn test_duplicate_titles_are_kept() {
        let items = vec![
            BreadcrumbItem::new("Docs", "/docs"),
            BreadcrumbItem::new("Docs", "/docs/v2"),
        ];
        let crumbs = segments(&items)
            .filter(|s| matches!(s, Segment::Crumb(_)))
            .count();
        assert_eq!(crumbs, 2);
    }
}
