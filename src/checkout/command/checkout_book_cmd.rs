use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub struct CheckoutBookCommand<'a> {
    checkout_service: Box<dyn CheckoutService + 'a>,
}

impl<'a> CheckoutBookCommand<'a> {
    pub fn new(checkout_service: Box<dyn CheckoutService + 'a>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    member_id: i32,
    book_id: i32,
}

impl CheckoutBookCommandRequest {
    pub fn new(member_id: i32, book_id: i32) -> Self {
        Self {
            member_id,
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub checkout: CheckoutDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand<'_> {
    fn execute(&mut self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.checkout_service.checkout(req.member_id, req.book_id)
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
