use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct BorrowedBooksCommand<'a> {
    checkout_service: Box<dyn CheckoutService + 'a>,
}

impl<'a> BorrowedBooksCommand<'a> {
    pub fn new(checkout_service: Box<dyn CheckoutService + 'a>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowedBooksCommandRequest {
    member_id: i32,
}

impl BorrowedBooksCommandRequest {
    pub fn new(member_id: i32) -> Self {
        Self {
            member_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowedBooksCommandResponse {
    pub book_ids: Vec<i32>,
    pub listing: String,
}

impl Command<BorrowedBooksCommandRequest, BorrowedBooksCommandResponse> for BorrowedBooksCommand<'_> {
    fn execute(&mut self, req: BorrowedBooksCommandRequest) -> Result<BorrowedBooksCommandResponse, CommandError> {
        let books = self.checkout_service.borrowed_books(req.member_id)?;
        let listing = self.checkout_service.display_borrowed_books(req.member_id)?;
        Ok(BorrowedBooksCommandResponse {
            book_ids: books.iter().map(|b| b.book_id).collect(),
            listing,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::command::borrowed_books_cmd::{BorrowedBooksCommand, BorrowedBooksCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::parties::domain::model::MemberEntity;

    #[test]
    fn test_should_run_borrowed_books() {
        let config = Configuration::new("test");
        let mut catalog_svc = create_catalog_service(&config);
        let _ = catalog_svc.add_book(BookEntity::new(1, "1984", "George Orwell")).expect("should add book");
        catalog_svc.add_member(Box::new(MemberEntity::new(1, "Ali"))).expect("should add member");
        let _ = create_checkout_service(&config, catalog_svc.as_mut()).checkout(1, 1).expect("should checkout");

        let mut cmd = BorrowedBooksCommand::new(create_checkout_service(&config, catalog_svc.as_mut()));
        let res = cmd.execute(BorrowedBooksCommandRequest::new(1)).expect("should list");
        assert_eq!(vec![1], res.book_ids);
        assert!(res.listing.starts_with("\n--- Books borrowed by Ali ---"));

        let res = cmd.execute(BorrowedBooksCommandRequest::new(7));
        assert_eq!(Some("Invalid member ID.".to_string()), res.err().map(|e| e.message().to_string()));
        assert!(matches!(cmd.execute(BorrowedBooksCommandRequest::new(7)), Err(CommandError::NotFound { .. })));
    }
}
