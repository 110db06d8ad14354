use crate::books::domain::model::BookEntity;
use crate::core::repository::{MemoryRepository, Repository};

pub fn create_book_repository() -> Box<dyn Repository<BookEntity>> {
    Box::new(MemoryRepository::<BookEntity>::new("book"))
}

// The books every fresh catalog starts with.
pub fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new(1, "1984", "George Orwell"),
        BookEntity::new(2, "The Hobbit", "J.R.R. Tolkien"),
        BookEntity::new(3, "Clean Code", "Robert C. Martin"),
    ]
}
