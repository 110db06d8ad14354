use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::library::CheckoutStatus;
use crate::parties::domain::Person;

// CheckoutDto describes a completed borrow or return.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutDto {
    pub member_id: i32,
    pub member_name: String,
    pub book_id: i32,
    pub title: String,
    pub checkout_status: CheckoutStatus,
    pub recorded_at: DateTime<Utc>,
}

impl CheckoutDto {
    pub fn from_member_book(member: &dyn Person, book: &dyn Book, checkout_status: CheckoutStatus) -> Self {
        CheckoutDto {
            member_id: member.id(),
            member_name: member.name().to_string(),
            book_id: book.id(),
            title: book.title().to_string(),
            checkout_status,
            recorded_at: Utc::now(),
        }
    }

    pub fn key(&self) -> String {
        format!("{}:{}", self.member_id, self.book_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::checkout::dto::CheckoutDto;
    use crate::core::library::CheckoutStatus;
    use crate::parties::domain::model::MemberEntity;

    #[test]
    fn test_should_build_checkout() {
        let member = MemberEntity::new(1, "Ali");
        let book = BookEntity::new(2, "The Hobbit", "J.R.R. Tolkien");
        let checkout = CheckoutDto::from_member_book(&member, &book, CheckoutStatus::CheckedOut);
        assert_eq!(1, checkout.member_id);
        assert_eq!("Ali", checkout.member_name.as_str());
        assert_eq!("The Hobbit", checkout.title.as_str());
        assert_eq!(CheckoutStatus::CheckedOut, checkout.checkout_status);
        assert_eq!("1:2", checkout.key().as_str());
    }
}
