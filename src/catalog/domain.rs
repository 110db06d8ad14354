pub mod service;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::parties::domain::Person;

/// CatalogService owns the canonical books and members. Lookups return None
/// rather than an error when an id is unknown.
pub trait CatalogService {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<BookEntity>;
    fn add_member(&mut self, member: Box<dyn Person>) -> LibraryResult<()>;
    fn find_book_by_id(&self, id: i32) -> Option<&BookEntity>;
    fn find_member_by_id(&self, id: i32) -> Option<&dyn Person>;
    fn books(&self) -> &[BookEntity];
    fn members(&self) -> Vec<&dyn Person>;

    // Both sides of a loan at once, so a borrow or return can update them together.
    fn find_member_and_book_mut(&mut self, member_id: i32, book_id: i32)
                                -> (Option<&mut Box<dyn Person>>, Option<&mut BookEntity>);

    fn display_all_books(&self) -> String {
        let mut lines = vec!["\n--- All Books in Library ---".to_string()];
        if self.books().is_empty() {
            lines.push("No books in the library.".to_string());
        } else {
            lines.extend(self.books().iter().map(BookEntity::display_info));
        }
        lines.join("\n")
    }

    fn display_all_members(&self) -> String {
        let mut lines = vec!["\n--- All Library Members ---".to_string()];
        let members = self.members();
        if members.is_empty() {
            lines.push("No members in the system.".to_string());
        } else {
            lines.extend(members.iter().map(|m| m.display_info()));
        }
        lines.join("\n")
    }
}
