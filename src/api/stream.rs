use std::future::Future;

use futures::{Stream, TryStreamExt, stream};

use crate::types::{RiotApiError, RiotApiResponse};

/// Lazily walk a paged endpoint.
///
/// `fetch_page(start, page_size)` is only called when the consumer pulls past
/// the items already delivered. A page shorter than `page_size` is the last
/// one. The first error is yielded once and ends the stream. Dropping the
/// stream stops the walk.
pub fn paginate<T, F, Fut>(
    page_size: u32,
    fetch_page: F,
) -> impl Stream<Item = RiotApiResponse<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = RiotApiResponse<Vec<T>>>,
{
    let state = PageState {
        start: 0,
        done: false,
        fetch_page,
    };

    stream::try_unfold(state, move |mut state| async move {
        if state.done {
            return Ok::<_, RiotApiError>(None);
        }

        let page = (state.fetch_page)(state.start, page_size).await?;
        tracing::trace!(
            "[RIOT::STREAM] page at {} returned {} items",
            state.start,
            page.len()
        );

        state.done = page.len() < page_size as usize;
        state.start += page_size;

        Ok(Some((page, state)))
    })
    .map_ok(|page| stream::iter(page.into_iter().map(Ok::<T, RiotApiError>)))
    .try_flatten()
}

struct PageState<F> {
    start: u32,
    done: bool,
    fetch_page: F,
}
