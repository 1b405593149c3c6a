mod common;
pub use self::common::{Query, SortDirection};

mod list;
pub use self::list::ListOptions;

mod search;
pub use self::search::SearchQuery;
