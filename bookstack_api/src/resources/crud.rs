use std::marker::PhantomData;

use futures::Stream;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{Client, Method, NO_BODY},
    query::{ListOptions, Query},
    types::ListResponse,
    Error,
};

/// Handle for one CRUD endpoint family, e.g. `/api/books`.
///
/// `T` is the entity returned by the API, `C` and `U` the create and update
/// request bodies.
pub struct Resource<'a, T, C, U> {
    client: &'a Client,
    path: &'static str,
    _types: PhantomData<fn() -> (T, C, U)>,
}

impl<'a, T, C, U> Resource<'a, T, C, U>
where
    T: DeserializeOwned + Default + 'a,
    C: Serialize,
    U: Serialize,
{
    pub(crate) fn new(client: &'a Client, path: &'static str) -> Self {
        Self {
            client,
            path,
            _types: PhantomData,
        }
    }

    /// Fetches a single page of entities.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<T>, Error> {
        let path = format!("{}{}", self.path, options.query_string());
        let resp: ListResponse<T> = self.client.fetch(Method::Get, &path, NO_BODY).await?;
        Ok(resp.data)
    }

    /// Streams every entity, 100 per request. See [`Client::paginate`].
    pub fn list_all(&self) -> impl Stream<Item = Result<T, Error>> + 'a {
        self.client.paginate(self.path)
    }

    pub async fn get(&self, id: i64) -> Result<T, Error> {
        self.client
            .fetch(Method::Get, &self.item_path(id), NO_BODY)
            .await
    }

    pub async fn create(&self, request: &C) -> Result<T, Error> {
        self.client
            .fetch(Method::Post, self.path, Some(request))
            .await
    }

    pub async fn update(&self, id: i64, request: &U) -> Result<T, Error> {
        self.client
            .fetch(Method::Put, &self.item_path(id), Some(request))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client
            .execute_discard(Method::Delete, &self.item_path(id), NO_BODY)
            .await
    }

    pub(crate) fn client(&self) -> &'a Client {
        self.client
    }

    pub(crate) fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.path, id)
    }
}
