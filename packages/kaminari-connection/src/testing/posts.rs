use super::self_prelude::*;
use crate::page::*;

pub const DEFAULT_PER_PAGE: u64 = 25;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
}

pub fn new_test_posts(count: u64) -> Vec<Post> {
    (1..=count)
        .map(|id| Post {
            id,
            title: format!("Post #{id}"),
        })
        .collect()
}

/// Slice `items` the way a page-number pagination library would.
pub fn paginate<T: Clone>(items: &[T], page: Option<u64>, per: Option<u64>) -> Page<T> {
    let current_page = page.unwrap_or(1).max(1);
    let limit_value = per.unwrap_or(DEFAULT_PER_PAGE).max(1);
    let total_count = items.len() as u64;
    let total_pages = (total_count + limit_value - 1) / limit_value;

    let first_page = current_page == 1;
    let last_page = current_page == total_pages;
    let out_of_range = current_page > total_pages;

    let data = PageData {
        current_page,
        first_page,
        last_page,
        out_of_range,
        limit_value,
        next_page: (!last_page && !out_of_range).then(|| current_page + 1),
        prev_page: (!first_page && !out_of_range).then(|| current_page - 1),
        total_pages,
    };
    let items = items
        .iter()
        .skip(((current_page - 1) * limit_value) as usize)
        .take(limit_value as usize)
        .cloned()
        .collect();

    trace!("Paginated {} items into page {}", total_count, current_page);
    Page::new(data, items)
}

#[test]
fn test_paginate() {
    let posts = new_test_posts(10);

    let page = paginate(&posts, Some(2), Some(3));
    assert_eq!(page.data.current_page, 2);
    assert_eq!(page.data.total_pages, 4);
    assert_eq!(page.data.next_page, Some(3));
    assert_eq!(page.data.prev_page, Some(1));
    assert_eq!(
        page.items.iter().map(|post| post.id).collect::<Vec<_>>(),
        vec![4, 5, 6]
    );

    let page = paginate(&posts, Some(5), Some(3));
    assert!(page.data.out_of_range);
    assert!(page.items.is_empty());
}
