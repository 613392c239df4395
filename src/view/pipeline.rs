use crate::api::Comment;
use crate::view::state::{SortKey, SortState, ViewState};
use std::cmp::Ordering;

/// The computed result of one pipeline pass: the rows for the current page
/// plus the totals the pagination controls need.
#[derive(Debug)]
pub struct PageView<'a> {
    /// Rows visible on the current page, in display order.
    pub rows: Vec<&'a Comment>,
    /// Records surviving the filter stage.
    pub filtered_count: usize,
    /// `ceil(filtered_count / page_size)`; 0 when nothing matches.
    pub total_pages: usize,
}

/// Run the full filter → sort → paginate pipeline.
///
/// Pure function of its inputs; an out-of-range page yields empty rows,
/// never an error.
pub fn visible_page<'a>(records: &'a [Comment], state: &ViewState) -> PageView<'a> {
    let mut rows = filter_records(records, &state.search);
    let filtered_count = rows.len();
    let total_pages = total_pages(filtered_count, state.page_size.count());

    sort_records(&mut rows, state.sort);

    let size = state.page_size.count();
    let start = state.page.saturating_sub(1).saturating_mul(size);
    if start >= rows.len() {
        rows.clear();
    } else {
        rows.truncate((start + size).min(rows.len()));
        rows.drain(..start);
    }

    PageView {
        rows,
        filtered_count,
        total_pages,
    }
}

/// Filter stage: keep records whose name, email, or body contains the term
/// case-insensitively. An empty term matches everything. Relative order is
/// preserved.
fn filter_records<'a>(records: &'a [Comment], term: &str) -> Vec<&'a Comment> {
    if term.is_empty() {
        return records.iter().collect();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.email.to_lowercase().contains(&needle)
                || r.body.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort stage: stable sort by the configured key, or leave fetch order
/// untouched when unsorted. Equal keys retain their filtered-order
/// position (`sort_by` is stable, and the reversed comparator still maps
/// equal to equal).
fn sort_records(rows: &mut [&Comment], sort: SortState) {
    match sort {
        SortState::Unsorted => {}
        SortState::Ascending(key) => rows.sort_by(|a, b| compare_by(a, b, key)),
        SortState::Descending(key) => rows.sort_by(|a, b| compare_by(b, a, key)),
    }
}

fn compare_by(a: &Comment, b: &Comment, key: SortKey) -> Ordering {
    match key {
        SortKey::PostId => a.post_id.cmp(&b.post_id),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Email => a.email.cmp(&b.email),
    }
}

/// `ceil(len / page_size)`, 0 for an empty result set.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size must be positive");
    len.div_ceil(page_size)
}

/// The window of page numbers shown between Prev/Next: current ± 1,
/// clamped to `[1, total_pages]`. Empty when there are no pages.
pub fn pagination_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let start = current.saturating_sub(1).max(1);
    let end = current.saturating_add(1).min(total_pages);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::state::PageSize;
    use proptest::prelude::*;

    fn comment(id: i64, post_id: i64, name: &str, email: &str, body: &str) -> Comment {
        Comment {
            id,
            post_id,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        }
    }

    fn sample() -> Vec<Comment> {
        vec![
            comment(1, 2, "Bob", "b@x.com", "hi"),
            comment(2, 1, "Ann", "a@x.com", "yo"),
        ]
    }

    fn state(search: &str, sort: SortState, page: usize) -> ViewState {
        ViewState {
            search: search.to_string(),
            sort,
            page,
            page_size: PageSize::Ten,
        }
    }

    #[test]
    fn empty_search_matches_everything() {
        let records = sample();
        let rows = filter_records(&records, "");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = sample();
        let rows = filter_records(&records, "an");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ann");
    }

    #[test]
    fn search_covers_email_and_body() {
        let records = sample();
        assert_eq!(filter_records(&records, "b@x")[0].name, "Bob");
        assert_eq!(filter_records(&records, "YO")[0].name, "Ann");
    }

    #[test]
    fn sort_post_id_both_directions() {
        let records = sample();

        let view = visible_page(&records, &state("", SortState::Ascending(SortKey::PostId), 1));
        assert_eq!(
            view.rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            ["Ann", "Bob"]
        );

        let view = visible_page(
            &records,
            &state("", SortState::Descending(SortKey::PostId), 1),
        );
        assert_eq!(
            view.rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            ["Bob", "Ann"]
        );
    }

    #[test]
    fn unsorted_preserves_fetch_order() {
        let records = sample();
        let view = visible_page(&records, &state("", SortState::Unsorted, 1));
        assert_eq!(
            view.rows.iter().map(|r| r.id).collect::<Vec<_>>(),
            [1, 2]
        );
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        // All share post_id 7; filtered order must survive the sort
        let records = vec![
            comment(1, 7, "c", "c@x.com", ""),
            comment(2, 7, "a", "a@x.com", ""),
            comment(3, 7, "b", "b@x.com", ""),
        ];
        let mut rows: Vec<&Comment> = records.iter().collect();
        sort_records(&mut rows, SortState::Ascending(SortKey::PostId));
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), [1, 2, 3]);

        sort_records(&mut rows, SortState::Descending(SortKey::PostId));
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn pagination_25_records_at_10() {
        let records: Vec<Comment> = (1..=25)
            .map(|i| comment(i, i, &format!("name{}", i), "e@x.com", "body"))
            .collect();

        let view = visible_page(&records, &state("", SortState::Unsorted, 1));
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.rows.len(), 10);

        let view = visible_page(&records, &state("", SortState::Unsorted, 3));
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].id, 21);
    }

    #[test]
    fn out_of_range_page_yields_empty_rows() {
        let records = sample();
        let view = visible_page(&records, &state("", SortState::Unsorted, 9));
        assert!(view.rows.is_empty());
        assert_eq!(view.filtered_count, 2);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn no_matches_yields_zero_pages() {
        let records = sample();
        let view = visible_page(&records, &state("zzz", SortState::Unsorted, 1));
        assert!(view.rows.is_empty());
        assert_eq!(view.filtered_count, 0);
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn concatenated_pages_reconstruct_filtered_sorted_array() {
        let records: Vec<Comment> = (1..=25)
            .map(|i| comment(i, 26 - i, &format!("name{}", i), "e@x.com", "body"))
            .collect();
        let sort = SortState::Ascending(SortKey::PostId);

        let mut expected: Vec<&Comment> = records.iter().collect();
        sort_records(&mut expected, sort);

        let total = visible_page(&records, &state("", sort, 1)).total_pages;
        let mut reassembled = Vec::new();
        for page in 1..=total {
            let view = visible_page(&records, &state("", sort, page));
            assert!(view.rows.len() <= 10, "no page exceeds page_size");
            reassembled.extend(view.rows);
        }

        let expected_ids: Vec<i64> = expected.iter().map(|r| r.id).collect();
        let got_ids: Vec<i64> = reassembled.iter().map(|r| r.id).collect();
        assert_eq!(expected_ids, got_ids);
    }

    #[test]
    fn pagination_window_clamps_to_bounds() {
        assert_eq!(pagination_window(1, 5), vec![1, 2]);
        assert_eq!(pagination_window(3, 5), vec![2, 3, 4]);
        assert_eq!(pagination_window(5, 5), vec![4, 5]);
        assert_eq!(pagination_window(1, 1), vec![1]);
        assert!(pagination_window(1, 0).is_empty());
    }

    #[test]
    fn total_pages_boundaries() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    // Property tests over the filter and pagination stages

    fn arb_comment() -> impl Strategy<Value = Comment> {
        (
            0i64..1000,
            0i64..100,
            "[a-zA-Z ]{0,12}",
            "[a-z]{0,8}@[a-z]{1,6}\\.com",
            "[a-zA-Z ]{0,20}",
        )
            .prop_map(|(id, post_id, name, email, body)| Comment {
                id,
                post_id,
                name,
                email,
                body,
            })
    }

    proptest! {
        #[test]
        fn filter_keeps_exactly_the_matching_records(
            records in prop::collection::vec(arb_comment(), 0..40),
            term in "[a-zA-Z]{0,4}",
        ) {
            let kept = filter_records(&records, &term);
            let needle = term.to_lowercase();
            let matches = |r: &Comment| {
                r.name.to_lowercase().contains(&needle)
                    || r.email.to_lowercase().contains(&needle)
                    || r.body.to_lowercase().contains(&needle)
            };

            for row in &kept {
                prop_assert!(matches(row));
            }
            prop_assert_eq!(kept.len(), records.iter().filter(|r| matches(r)).count());
        }

        #[test]
        fn sorted_output_is_ordered_adjacent_pairs(
            records in prop::collection::vec(arb_comment(), 0..40),
        ) {
            let mut rows: Vec<&Comment> = records.iter().collect();
            sort_records(&mut rows, SortState::Ascending(SortKey::PostId));
            for pair in rows.windows(2) {
                prop_assert!(pair[0].post_id <= pair[1].post_id);
            }

            sort_records(&mut rows, SortState::Descending(SortKey::PostId));
            for pair in rows.windows(2) {
                prop_assert!(pair[0].post_id >= pair[1].post_id);
            }
        }

        #[test]
        fn pages_partition_the_result_set(
            records in prop::collection::vec(arb_comment(), 0..60),
        ) {
            let total = total_pages(records.len(), 10);
            let mut seen = 0usize;
            for page in 1..=total.max(1) {
                let view = visible_page(&records, &state("", SortState::Unsorted, page));
                prop_assert!(view.rows.len() <= 10);
                seen += view.rows.len();
            }
            prop_assert_eq!(seen, records.len());
        }
    }
}
