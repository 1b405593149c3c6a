mod meta;
pub use self::meta::{ListResponse, Tag, UserRef, UserSummary};

mod book;
pub use self::book::{Book, BookCreateRequest, BookUpdateRequest};

mod chapter;
pub use self::chapter::{Chapter, ChapterCreateRequest, ChapterUpdateRequest};

mod page;
pub use self::page::{Page, PageCreateRequest, PageUpdateRequest};

mod shelf;
pub use self::shelf::{Shelf, ShelfCreateRequest, ShelfUpdateRequest};

mod attachment;
pub use self::attachment::{Attachment, AttachmentCreateRequest, AttachmentUpdateRequest};

mod comment;
pub use self::comment::{Comment, CommentCreateRequest, CommentUpdateRequest};

mod search;
pub use self::search::{SearchResult, SearchResultType};
