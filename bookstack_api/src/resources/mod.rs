//! Per-resource handles borrowed from a [`Client`](crate::Client).

mod crud;
pub use self::crud::Resource;

mod pages;

mod search;
pub use self::search::Search;

use crate::types::{
    Attachment, AttachmentCreateRequest, AttachmentUpdateRequest, Book, BookCreateRequest,
    BookUpdateRequest, Chapter, ChapterCreateRequest, ChapterUpdateRequest, Comment,
    CommentCreateRequest, CommentUpdateRequest, Page, PageCreateRequest, PageUpdateRequest, Shelf,
    ShelfCreateRequest, ShelfUpdateRequest,
};

/// `/api/books`
pub type Books<'a> = Resource<'a, Book, BookCreateRequest, BookUpdateRequest>;
/// `/api/chapters`
pub type Chapters<'a> = Resource<'a, Chapter, ChapterCreateRequest, ChapterUpdateRequest>;
/// `/api/pages`, plus the export endpoints.
pub type Pages<'a> = Resource<'a, Page, PageCreateRequest, PageUpdateRequest>;
/// `/api/shelves`
pub type Shelves<'a> = Resource<'a, Shelf, ShelfCreateRequest, ShelfUpdateRequest>;
/// `/api/attachments`
pub type Attachments<'a> =
    Resource<'a, Attachment, AttachmentCreateRequest, AttachmentUpdateRequest>;
/// `/api/comments`
pub type Comments<'a> = Resource<'a, Comment, CommentCreateRequest, CommentUpdateRequest>;
