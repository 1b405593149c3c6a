use bookstack_api::types::{
    Attachment, Book, Comment, ListResponse, Page, SearchResult, SearchResultType, UserRef,
};
use chrono::{Datelike, TimeZone, Utc};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_book_list() {
    let json = load_fixture("books.json");
    let resp: ListResponse<Book> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.total, 2);
    assert_eq!(resp.data.len(), 2);

    let book = &resp.data[0];
    assert_eq!(book.id, 1);
    assert_eq!(book.name, "Test Book");
    assert_eq!(book.slug, "test-book");
    assert_eq!(book.created_by, Some(UserRef::Id(1)));
    let created = book.created_at.unwrap();
    assert_eq!((created.year(), created.month(), created.day()), (2024, 1, 15));
}

#[test]
fn deserialize_single_book_with_expanded_users() {
    let json = load_fixture("book.json");
    let book: Book = serde_json::from_str(&json).unwrap();
    assert_eq!(book.id, 1);
    assert_eq!(book.owned_by.as_ref().map(UserRef::id), Some(1));
    match book.updated_by {
        Some(UserRef::User(ref user)) => assert_eq!(user.name, "Editor"),
        ref other => panic!("expected expanded user, got {:?}", other),
    }
    assert_eq!(book.tags.len(), 1);
    assert_eq!(book.tags[0].value, "Guide");
}

#[test]
fn deserialize_page() {
    let json = load_fixture("page.json");
    let page: Page = serde_json::from_str(&json).unwrap();
    assert_eq!(page.book_id, 1);
    assert_eq!(page.chapter_id, 2);
    assert_eq!(page.html, "<p>Hello</p>");
    assert_eq!(page.markdown, "Hello");
    assert_eq!(page.revision, 4);
    assert!(!page.draft);
    assert_eq!(
        page.updated_at,
        Some(Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap())
    );
}

#[test]
fn deserialize_search_results() {
    let json = load_fixture("search.json");
    let resp: ListResponse<SearchResult> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);

    let hit = &resp.data[0];
    assert_eq!(hit.kind, SearchResultType::Page);
    assert_eq!(hit.score, 1.5);
    assert_eq!(hit.book_id, 3);
    assert_eq!(hit.chapter_id, 4);

    let shelf = &resp.data[1];
    assert_eq!(shelf.kind, SearchResultType::Bookshelf);
    assert_eq!(shelf.book_id, 0);
}

#[test]
fn unknown_search_type_is_tolerated() {
    let hit: SearchResult =
        serde_json::from_str(r#"{"type":"template","id":1,"name":"x"}"#).unwrap();
    assert_eq!(hit.kind, SearchResultType::Other);
}

#[test]
fn sparse_entities_use_defaults() {
    let comment: Comment =
        serde_json::from_str(r#"{"id":1,"page_id":5,"html":"<p>Nice</p>"}"#).unwrap();
    assert_eq!(comment.page_id, 5);
    assert_eq!(comment.parent_id, None);
    assert!(comment.created_at.is_none());

    let attachment: Attachment =
        serde_json::from_str(r#"{"id":1,"name":"file.pdf","uploaded_to":5}"#).unwrap();
    assert_eq!(attachment.uploaded_to, 5);
    assert!(attachment.content.is_empty());
}

#[test]
fn empty_list_response() {
    let resp: ListResponse<Book> = serde_json::from_str(r#"{"data":[],"total":0}"#).unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.total, 0);
}

#[test]
fn list_response_requires_data() {
    let err = serde_json::from_str::<ListResponse<Book>>(r#"{"total":5}"#).unwrap_err();
    assert!(err.to_string().contains("missing field `data`"));
}
