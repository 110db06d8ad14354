pub const MENU: &str = "\n--- Library Menu ---\n\
1. Show all books\n\
2. Show all members\n\
3. Borrow book\n\
4. Return book\n\
5. Show member borrowed books\n\
0. Exit\n\
Choose option: ";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    Exit,
    ListBooks,
    ListMembers,
    BorrowBook,
    ReturnBook,
    BorrowedBooks,
    Invalid,
}

impl From<&str> for MenuChoice {
    fn from(s: &str) -> Self {
        match s {
            "0" => MenuChoice::Exit,
            "1" => MenuChoice::ListBooks,
            "2" => MenuChoice::ListMembers,
            "3" => MenuChoice::BorrowBook,
            "4" => MenuChoice::ReturnBook,
            "5" => MenuChoice::BorrowedBooks,
            _ => MenuChoice::Invalid,
        }
    }
}

// Parses an id answer; None means the action should be abandoned.
pub fn parse_id(s: &str) -> Option<i32> {
    s.trim().parse::<i32>().ok()
}
