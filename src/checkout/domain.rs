use crate::books::domain::model::BookEntity;
use crate::checkout::dto::CheckoutDto;
use crate::core::library::LibraryResult;

pub mod service;

pub trait CheckoutService {
    // Lends a book, failing with NotFound when either id is unknown.
    fn checkout(&mut self, member_id: i32, book_id: i32) -> LibraryResult<CheckoutDto>;
    fn returned(&mut self, member_id: i32, book_id: i32) -> LibraryResult<CheckoutDto>;
    fn borrowed_books(&self, member_id: i32) -> LibraryResult<Vec<BookEntity>>;
    fn display_borrowed_books(&self, member_id: i32) -> LibraryResult<String>;
}
