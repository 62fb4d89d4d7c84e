//! Generic offset pagination over any [`Paginatable`] entity

use ambassador_types::{Page, PageMeta};

use crate::error::DbResult;
use crate::repo::Paginatable;

/// Records per page
pub const PAGE_SIZE: i64 = 5;

/// Clamp a requested page number to the first page when it is not positive
#[inline]
pub fn normalize_page(page: i64) -> i64 {
    page.max(1)
}

/// Offset of the first record on `page`
#[inline]
pub fn offset_for(page: i64, limit: i64) -> i64 {
    (normalize_page(page) - 1).saturating_mul(limit)
}

/// Number of the last page: `ceil(total / limit)`, 0 for an empty set
#[inline]
pub fn last_page(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total as f64 / limit as f64).ceil() as i64
}

/// Fetch one page of `entity` with the default page size
pub async fn paginate<E>(entity: &E, page: i64) -> DbResult<Page<E::Record>>
where
    E: Paginatable + ?Sized,
{
    paginate_with_limit(entity, page, PAGE_SIZE).await
}

/// Fetch one page of `entity` with an explicit page size.
///
/// Pages past the end yield empty data rather than an error.
pub async fn paginate_with_limit<E>(entity: &E, page: i64, limit: i64) -> DbResult<Page<E::Record>>
where
    E: Paginatable + ?Sized,
{
    let page = normalize_page(page);
    let offset = offset_for(page, limit);

    let data = entity.take(limit, offset).await?;
    let total = entity.count().await?;

    tracing::debug!(page, offset, total, returned = data.len(), "Paginated query");

    Ok(Page {
        data,
        meta: PageMeta {
            total,
            page,
            last_page: last_page(total, limit),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Numbers(Vec<i64>);

    #[async_trait]
    impl Paginatable for Numbers {
        type Record = i64;

        async fn count(&self) -> DbResult<i64> {
            Ok(self.0.len() as i64)
        }

        async fn take(&self, limit: i64, offset: i64) -> DbResult<Vec<i64>> {
            Ok(self
                .0
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .copied()
                .collect())
        }
    }

    #[test]
    fn test_normalize_page() {
        assert_eq!(normalize_page(3), 3);
        assert_eq!(normalize_page(1), 1);
        assert_eq!(normalize_page(0), 1);
        assert_eq!(normalize_page(-7), 1);
    }

    #[test]
    fn test_offset_for() {
        assert_eq!(offset_for(1, 5), 0);
        assert_eq!(offset_for(2, 5), 5);
        assert_eq!(offset_for(0, 5), 0);
        assert_eq!(offset_for(-3, 5), 0);
        assert_eq!(offset_for(i64::MAX, 5), i64::MAX);
    }

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(0, 5), 0);
        assert_eq!(last_page(1, 5), 1);
        assert_eq!(last_page(5, 5), 1);
        assert_eq!(last_page(6, 5), 2);
        assert_eq!(last_page(13, 5), 3);
    }

    #[tokio::test]
    async fn test_first_page() {
        let numbers = Numbers((1..=13).collect());
        let page = paginate(&numbers, 1).await.unwrap();
        assert_eq!(page.data, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            page.meta,
            PageMeta {
                total: 13,
                page: 1,
                last_page: 3
            }
        );
    }

    #[tokio::test]
    async fn test_partial_last_page() {
        let numbers = Numbers((1..=13).collect());
        let page = paginate(&numbers, 3).await.unwrap();
        assert_eq!(page.data, vec![11, 12, 13]);
        assert_eq!(page.meta.page, 3);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let numbers = Numbers((1..=13).collect());
        let page = paginate(&numbers, 4).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 13);
        assert_eq!(page.meta.last_page, 3);
    }

    #[tokio::test]
    async fn test_non_positive_page_is_first_page() {
        let numbers = Numbers((1..=13).collect());
        for requested in [0, -1, i64::MIN] {
            let page = paginate(&numbers, requested).await.unwrap();
            assert_eq!(page.meta.page, 1);
            assert_eq!(page.data, vec![1, 2, 3, 4, 5]);
        }
    }

    #[tokio::test]
    async fn test_empty_entity() {
        let page = paginate(&Numbers(vec![]), 1).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.last_page, 0);
    }
}
