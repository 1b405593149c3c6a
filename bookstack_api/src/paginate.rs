//! Lazy offset/total pagination over list endpoints.

use std::collections::VecDeque;

use futures::{stream, Stream};
use serde::de::DeserializeOwned;

use crate::{
    client::{Client, Method, NO_BODY},
    types::ListResponse,
    Error,
};

/// Items requested per page when paginating.
pub const DEFAULT_PAGE_SIZE: usize = 100;

impl Client {
    /// Streams every item of a list endpoint, fetching pages on demand.
    ///
    /// Pages are requested one at a time with `count` and `offset` appended
    /// to `path`. The next page is only requested once the buffered items are
    /// consumed, so dropping the stream early stops further requests. A failed
    /// page yields a single error and ends the stream.
    pub fn paginate<'a, T>(&'a self, path: &str) -> impl Stream<Item = Result<T, Error>> + 'a
    where
        T: DeserializeOwned + 'a,
    {
        let cursor = PageCursor {
            client: self,
            path: path.to_string(),
            offset: 0,
            total: None,
            buffer: VecDeque::new(),
        };
        stream::try_unfold(cursor, PageCursor::next_item)
    }
}

struct PageCursor<'a, T> {
    client: &'a Client,
    path: String,
    offset: usize,
    /// `None` until the first page arrives.
    total: Option<usize>,
    buffer: VecDeque<T>,
}

impl<'a, T: DeserializeOwned> PageCursor<'a, T> {
    async fn next_item(mut self) -> Result<Option<(T, Self)>, Error> {
        if let Some(item) = self.buffer.pop_front() {
            return Ok(Some((item, self)));
        }
        if self.total.is_some_and(|total| self.offset >= total) {
            return Ok(None);
        }

        let page: ListResponse<T> = self
            .client
            .fetch(Method::Get, &self.page_path(), NO_BODY)
            .await?;
        let received = page.data.len();
        tracing::debug!(
            path = %self.path,
            offset = self.offset,
            received,
            total = page.total,
            "Fetched page"
        );
        if received == 0 {
            return Ok(None);
        }

        self.offset += received;
        self.total = Some(usize::try_from(page.total).unwrap_or(0));
        self.buffer = page.data.into();
        Ok(self.buffer.pop_front().map(|item| (item, self)))
    }

    fn page_path(&self) -> String {
        let separator = if self.path.contains('?') { '&' } else { '?' };
        format!(
            "{}{}count={}&offset={}",
            self.path, separator, DEFAULT_PAGE_SIZE, self.offset
        )
    }
}
