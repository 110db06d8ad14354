pub mod borrowed_books_cmd;
pub mod checkout_book_cmd;
pub mod return_book_cmd;
