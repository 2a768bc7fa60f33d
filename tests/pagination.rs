use api_usage_chart_wasm::view_state::{PageSize, Pagination, ViewState};
use quickcheck_macros::quickcheck;

#[test]
fn eighteen_rows_of_seven() {
    let pagination = Pagination::new(PageSize::default());
    let total = pagination.total_pages(18);
    assert_eq!(total, 3);

    let mut state = ViewState::default();
    state.select_page(5, total);
    assert_eq!(state.current_page, 3);
    state.select_page(0, total);
    assert_eq!(state.current_page, 1);
}

#[test]
fn last_page_holds_the_remainder() {
    let pagination = Pagination::new(PageSize::new(7).unwrap());
    let items: Vec<u32> = (0..18).collect();
    assert_eq!(pagination.page_slice(&items, 3), &[14, 15, 16, 17]);
    assert_eq!(pagination.page_slice(&items, 9), &[14, 15, 16, 17]);
}

#[test]
fn empty_list_still_has_one_page() {
    let pagination = Pagination::default();
    assert_eq!(pagination.total_pages(0), 1);
    assert!(pagination.page_slice::<u32>(&[], 1).is_empty());
}

#[test]
fn page_size_must_be_positive() {
    assert!(PageSize::new(0).is_none());
    assert_eq!(PageSize::new(10_000).map(|size| size.get()), Some(10_000));
}

#[test]
fn huge_pages_clip_at_the_item_count() {
    let half = usize::MAX / 2 + 1;
    let pagination = Pagination::new(PageSize::new(half).unwrap());
    assert_eq!(pagination.total_pages(usize::MAX), 2);
    assert_eq!(pagination.page_range(1, usize::MAX), 0..half);
    assert_eq!(pagination.page_range(2, usize::MAX), half..usize::MAX);
}

#[quickcheck]
fn pages_partition_the_items(count: u16, size: u8) -> bool {
    let Some(page_size) = PageSize::new(size as usize) else {
        return true;
    };
    let pagination = Pagination::new(page_size);
    let count = count as usize;
    let covered: usize = (1..=pagination.total_pages(count))
        .map(|page| pagination.page_range(page, count).len())
        .sum();
    covered == count
}
