use crate::{
    client::{Method, NO_BODY},
    types::{Page, PageCreateRequest, PageUpdateRequest},
    Error,
};

use super::Resource;

impl Resource<'_, Page, PageCreateRequest, PageUpdateRequest> {
    /// Exports a page as Markdown. The body is returned as-is.
    pub async fn export_markdown(&self, id: i64) -> Result<Vec<u8>, Error> {
        self.export(id, "markdown").await
    }

    /// Exports a page as a PDF document.
    pub async fn export_pdf(&self, id: i64) -> Result<Vec<u8>, Error> {
        self.export(id, "pdf").await
    }

    async fn export(&self, id: i64, format: &str) -> Result<Vec<u8>, Error> {
        let path = format!("{}/export/{}", self.item_path(id), format);
        self.client().execute_raw(Method::Get, &path, NO_BODY).await
    }
}
