use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub book_id: i32,
    pub title: String,
    pub author: String,
}

impl AddBookCommandRequest {
    pub fn new(book_id: i32, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn build_book(&self) -> BookEntity {
        BookEntity::new(self.book_id, self.title.as_str(), self.author.as_str())
    }
}

impl From<&BookEntity> for AddBookCommandRequest {
    fn from(other: &BookEntity) -> Self {
        Self::new(other.book_id, other.title.as_str(), other.author.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.build_book()).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
