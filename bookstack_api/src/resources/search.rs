use crate::{
    client::{Client, Method, NO_BODY},
    query::{Query, SearchQuery},
    types::{ListResponse, SearchResult},
    Error,
};

/// Handle for `/api/search`.
pub struct Search<'a> {
    client: &'a Client,
}

impl<'a> Search<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Searches books, chapters, pages and shelves. Returns a single page of
    /// hits ranked by score.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, Error> {
        let path = format!("/api/search{}", query.query_string());
        let resp: ListResponse<SearchResult> =
            self.client.fetch(Method::Get, &path, NO_BODY).await?;
        Ok(resp.data)
    }
}
