use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand<'a> {
    checkout_service: Box<dyn CheckoutService + 'a>,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(checkout_service: Box<dyn CheckoutService + 'a>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    member_id: i32,
    book_id: i32,
}

impl ReturnBookCommandRequest {
    pub fn new(member_id: i32, book_id: i32) -> Self {
        Self {
            member_id,
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub checkout: CheckoutDto,
}

impl ReturnBookCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.returned(req.member_id, req.book_id)
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
