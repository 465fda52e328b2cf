//! Search and pagination over an in-memory record list.

use super::types::{Attendee, Organizer, Supplier};

/// Rows per page in the dashboard tables.
pub const DEFAULT_PER_PAGE: usize = 10;

/// A record that can be searched by name and e-mail.
pub trait Listed {
    fn name(&self) -> &str;
    fn email(&self) -> &str;
}

macro_rules! impl_listed {
    ($($ty:ty),*) => {
        $(
            impl Listed for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn email(&self) -> &str {
                    &self.email
                }
            }
        )*
    };
}

impl_listed!(Supplier, Organizer, Attendee);

/// Records whose name or e-mail contains `term`, ignoring case.
pub fn filter<'a, T: Listed>(records: &'a [T], term: &str) -> Vec<&'a T> {
    let term = term.trim().to_lowercase();
    records
        .iter()
        .filter(|r| {
            term.is_empty()
                || r.name().to_lowercase().contains(&term)
                || r.email().to_lowercase().contains(&term)
        })
        .collect()
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slice `items` into the 1-based `page`. Page 0 is read as page 1.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}
