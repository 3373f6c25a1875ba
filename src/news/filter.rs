//! Filtering and aggregation over the news list.
//!
//! Both functions are pure: they borrow the items, derive a result,
//! and keep no state between calls. The UI recomputes them every
//! frame, which at this scale is cheaper than maintaining an index.

use super::item::{Category, CategoryFilter, NewsItem};

/// The visible subset of `items` for the given search query and
/// category filter.
///
/// An item is included iff its title contains `search`
/// case-insensitively (the empty query matches everything) and
/// `selected` admits its category. Input order is preserved.
pub fn filter<'a>(
    items: &'a [NewsItem],
    search: &str,
    selected: CategoryFilter,
) -> Vec<&'a NewsItem> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| {
            let title_matches = needle.is_empty() || item.title.to_lowercase().contains(&needle);
            title_matches && selected.admits(item.category)
        })
        .collect()
}

/// Item count per category, in [`Category::ALL`] order.
///
/// Categories with no items appear with a zero count so the chart
/// always shows every bar.
pub fn aggregate(items: &[NewsItem]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let count = items.iter().filter(|item| item.category == category).count();
            (category, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64, title: &str, category: Category) -> NewsItem {
        NewsItem {
            id,
            title: title.to_string(),
            category,
        }
    }

    fn sample_items() -> Vec<NewsItem> {
        vec![
            make_item(1, "Annual Day", Category::Events),
            make_item(2, "Science Fair", Category::Academics),
            make_item(3, "Football Trials", Category::Sports),
            make_item(4, "Art Fair Postponed", Category::Events),
        ]
    }

    // -- filter --------------------------------------------------------------

    #[test]
    fn empty_query_and_all_filter_is_identity() {
        let items = sample_items();
        let visible = filter(&items, "", CategoryFilter::All);
        assert_eq!(visible.len(), items.len());
        for (got, want) in visible.iter().zip(items.iter()) {
            assert_eq!(*got, want, "order and membership preserved");
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = sample_items();
        let visible = filter(&items, "FAIR", CategoryFilter::All);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].title, "Science Fair");
        assert_eq!(visible[1].title, "Art Fair Postponed");
    }

    #[test]
    fn search_and_category_combine() {
        let items = sample_items();
        let visible = filter(&items, "fair", CategoryFilter::Only(Category::Events));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Art Fair Postponed");
    }

    #[test]
    fn category_filter_excludes_other_categories() {
        let items = sample_items();
        let visible = filter(&items, "", CategoryFilter::Only(Category::Sports));
        assert!(visible.iter().all(|i| i.category == Category::Sports));
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn unmatched_query_yields_empty() {
        let items = sample_items();
        assert!(filter(&items, "nothing matches this", CategoryFilter::All).is_empty());
    }

    #[test]
    fn filter_on_empty_list_yields_empty() {
        assert!(filter(&[], "fair", CategoryFilter::All).is_empty());
    }

    // -- aggregate -----------------------------------------------------------

    #[test]
    fn aggregate_counts_per_category_in_fixed_order() {
        let items = sample_items();
        let counts = aggregate(&items);
        assert_eq!(
            counts,
            vec![
                (Category::Events, 2),
                (Category::Academics, 1),
                (Category::Sports, 1),
            ]
        );
    }

    #[test]
    fn aggregate_includes_zero_categories() {
        let items = vec![
            make_item(1, "A", Category::Events),
            make_item(2, "B", Category::Events),
        ];
        let counts = aggregate(&items);
        assert_eq!(
            counts,
            vec![
                (Category::Events, 2),
                (Category::Academics, 0),
                (Category::Sports, 0),
            ]
        );
    }

    #[test]
    fn aggregate_sums_to_total() {
        let items = sample_items();
        let total: usize = aggregate(&items).iter().map(|(_, n)| n).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn aggregate_on_empty_list_is_all_zeros() {
        let counts = aggregate(&[]);
        assert_eq!(counts.len(), Category::ALL.len());
        assert!(counts.iter().all(|(_, n)| *n == 0));
    }
}
