use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookEntity is the catalog's record of a single book; its status is the only mutable part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: i32,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
}

impl BookEntity {
    pub fn new(book_id: i32, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
        }
    }

    pub fn display_info(&self) -> String {
        format!("Book ID: {}, Title: {}, Author: {}, Available: {}",
                self.book_id, self.title, self.author,
                if self.is_available() { "Yes" } else { "No" })
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i32 {
        self.book_id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}
