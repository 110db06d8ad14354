pub mod add_book_cmd;
pub mod add_member_cmd;
pub mod list_books_cmd;
pub mod list_members_cmd;
