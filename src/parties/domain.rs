use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult, PartyKind};

pub mod model;

/// Person is anyone who can hold books. Borrowing state lives in two places that
/// must move together: the book's status in the catalog and the ids listed here.
pub trait Person: Identifiable {
    fn name(&self) -> &str;
    fn kind(&self) -> PartyKind;
    fn borrowed_book_ids(&self) -> &[i32];
    fn borrowed_book_ids_mut(&mut self) -> &mut Vec<i32>;

    /// Single line identifying this person, rendered per variant.
    fn display_info(&self) -> String;

    fn holds(&self, book_id: i32) -> bool {
        self.borrowed_book_ids().contains(&book_id)
    }

    /// Takes an available book, leaving both sides untouched on failure.
    fn borrow_book(&mut self, book: Option<&mut BookEntity>) -> LibraryResult<()> {
        let book = book.ok_or_else(|| LibraryError::validation("Book is null.", None))?;
        if !book.is_available() {
            return Err(LibraryError::unavailable(
                format!("Sorry, the book '{}' is not available.", book.title).as_str(), None));
        }
        self.borrowed_book_ids_mut().push(book.book_id);
        book.book_status = BookStatus::CheckedOut;
        Ok(())
    }

    /// Gives back a book this person holds, leaving both sides untouched on failure.
    fn return_book(&mut self, book: Option<&mut BookEntity>) -> LibraryResult<()> {
        let book = book.ok_or_else(|| LibraryError::validation("Book is null.", None))?;
        let pos = self.borrowed_book_ids().iter().position(|id| *id == book.book_id)
            .ok_or_else(|| LibraryError::not_granted(
                format!("{} does not have the book '{}' borrowed.", self.name(), book.title).as_str(), None))?;
        self.borrowed_book_ids_mut().remove(pos);
        book.book_status = BookStatus::Available;
        Ok(())
    }

    /// Renders the given books, which the caller resolves from borrowed_book_ids.
    fn display_borrowed_books(&self, books: &[BookEntity]) -> String {
        let mut lines = vec![format!("\n--- Books borrowed by {} ---", self.name())];
        if books.is_empty() {
            lines.push("No books borrowed.".to_string());
        } else {
            lines.extend(books.iter().map(BookEntity::display_info));
        }
        lines.join("\n")
    }
}
