use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{CheckoutStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub struct CheckoutServiceImpl<'a> {
    branch_id: String,
    catalog_service: &'a mut dyn CatalogService,
    events_publisher: Box<dyn EventPublisher>,
}

impl<'a> CheckoutServiceImpl<'a> {
    pub fn new(config: &Configuration, catalog_service: &'a mut dyn CatalogService,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            catalog_service,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // The loan is already committed here, so a lost event never undoes it.
    fn publish(&self, event: serde_json::Result<DomainEvent>, checkout: &CheckoutDto) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!(member_id = checkout.member_id, book_id = checkout.book_id,
                status = %checkout.checkout_status, reason = err.message(), "loan event not published");
        }
    }

    fn transfer(&mut self, member_id: i32, book_id: i32, status: CheckoutStatus) -> LibraryResult<CheckoutDto> {
        let (member, book) = self.catalog_service.find_member_and_book_mut(member_id, book_id);
        let (Some(member), Some(book)) = (member, book) else {
            debug!(member_id, book_id, %status, "unknown member or book");
            return Err(LibraryError::not_found("Invalid member or book ID."));
        };
        let res = match status {
            CheckoutStatus::CheckedOut => member.borrow_book(Some(&mut *book)),
            CheckoutStatus::Returned => member.return_book(Some(&mut *book)),
        };
        if let Err(err) = res {
            debug!(member_id, book_id, %status, reason = err.message(), "loan rejected");
            return Err(err);
        }
        Ok(CheckoutDto::from_member_book(&**member, &*book, status))
    }
}

impl CheckoutService for CheckoutServiceImpl<'_> {
    fn checkout(&mut self, member_id: i32, book_id: i32) -> LibraryResult<CheckoutDto> {
        let checkout = self.transfer(member_id, book_id, CheckoutStatus::CheckedOut)?;
        self.publish(DomainEvent::checked_out(
            "book_checkout", "checkout", checkout.key().as_str(), &self.metadata(), &checkout), &checkout);
        info!(member_id, book_id, "book checked out");
        Ok(checkout)
    }

    fn returned(&mut self, member_id: i32, book_id: i32) -> LibraryResult<CheckoutDto> {
        let checkout = self.transfer(member_id, book_id, CheckoutStatus::Returned)?;
        self.publish(DomainEvent::returned(
            "book_returned", "checkout", checkout.key().as_str(), &self.metadata(), &checkout), &checkout);
        info!(member_id, book_id, "book returned");
        Ok(checkout)
    }

    fn borrowed_books(&self, member_id: i32) -> LibraryResult<Vec<BookEntity>> {
        let member = self.catalog_service.find_member_by_id(member_id)
            .ok_or_else(|| LibraryError::not_found("Invalid member ID."))?;
        Ok(member.borrowed_book_ids().iter()
            .filter_map(|id| self.catalog_service.find_book_by_id(*id))
            .cloned()
            .collect())
    }

    fn display_borrowed_books(&self, member_id: i32) -> LibraryResult<String> {
        let books = self.borrowed_books(member_id)?;
        let member = self.catalog_service.find_member_by_id(member_id)
            .ok_or_else(|| LibraryError::not_found("Invalid member ID."))?;
        Ok(member.display_borrowed_books(&books))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::domain::service::CheckoutServiceImpl;
    use crate::checkout::factory::create_checkout_service;
    use crate::core::domain::Configuration;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::core::library::{CheckoutStatus, LibraryError, LibraryResult};
    use crate::gateway::events::EventPublisher;
    use crate::parties::domain::Person;
    use crate::parties::domain::model::MemberEntity;

    struct RecordingPublisher {
        events: Rc<RefCell<Vec<DomainEvent>>>,
    }

    impl EventPublisher for RecordingPublisher {
        fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
            self.events.borrow_mut().push(event.clone());
            Ok(())
        }
    }

    struct FailingPublisher;

    impl EventPublisher for FailingPublisher {
        fn publish(&self, _event: &DomainEvent) -> LibraryResult<()> {
            Err(LibraryError::runtime("publisher offline", None))
        }
    }

    fn seeded_catalog() -> Box<dyn CatalogService> {
        let mut catalog_svc = create_catalog_service(&Configuration::new("test"));
        let _ = catalog_svc.add_book(BookEntity::new(1, "1984", "George Orwell")).expect("should add book");
        let _ = catalog_svc.add_book(BookEntity::new(2, "The Hobbit", "J.R.R. Tolkien")).expect("should add book");
        catalog_svc.add_member(Box::new(MemberEntity::new(1, "Ali"))).expect("should add member");
        catalog_svc.add_member(Box::new(MemberEntity::new(2, "Sara"))).expect("should add member");
        catalog_svc
    }

    // Every checked out book is held by exactly one member, and only those are.
    fn assert_loans_consistent(catalog_svc: &dyn CatalogService) {
        for book in catalog_svc.books() {
            let holders = catalog_svc.members().iter().filter(|m| m.holds(book.book_id)).count();
            if book.is_available() {
                assert_eq!(0, holders, "book {} available but held", book.book_id);
            } else {
                assert_eq!(1, holders, "book {} checked out but held {} times", book.book_id, holders);
            }
        }
    }

    #[test]
    fn test_should_checkout_and_return() {
        let mut catalog_svc = seeded_catalog();
        let mut checkout_svc = create_checkout_service(&Configuration::new("test"), catalog_svc.as_mut());

        let checkout = checkout_svc.checkout(1, 1).expect("should checkout");
        assert_eq!("Ali", checkout.member_name.as_str());
        assert_eq!("1984", checkout.title.as_str());
        assert_eq!(CheckoutStatus::CheckedOut, checkout.checkout_status);
        assert_eq!(1, checkout_svc.borrowed_books(1).expect("should list").len());

        let returned = checkout_svc.returned(1, 1).expect("should return");
        assert_eq!(CheckoutStatus::Returned, returned.checkout_status);
        assert!(checkout_svc.borrowed_books(1).expect("should list").is_empty());
        drop(checkout_svc);

        assert!(catalog_svc.find_book_by_id(1).expect("should find").is_available());
        assert_eq!(2, catalog_svc.books().len());
        assert_loans_consistent(catalog_svc.as_ref());
    }

    #[test]
    fn test_should_reject_unknown_member_without_change() {
        let mut catalog_svc = seeded_catalog();
        let mut checkout_svc = create_checkout_service(&Configuration::new("test"), catalog_svc.as_mut());
        let _ = checkout_svc.checkout(1, 1).expect("should checkout");

        assert_eq!(Err(LibraryError::not_found("Invalid member or book ID.")), checkout_svc.checkout(3, 1));
        assert_eq!(Err(LibraryError::not_found("Invalid member or book ID.")), checkout_svc.checkout(1, 9));
        assert_eq!(Err(LibraryError::not_found("Invalid member or book ID.")), checkout_svc.returned(3, 1));
        drop(checkout_svc);

        assert!(!catalog_svc.find_book_by_id(1).expect("should find").is_available());
        assert_eq!(vec![1], catalog_svc.find_member_by_id(1).expect("should find").borrowed_book_ids());
        assert_loans_consistent(catalog_svc.as_ref());
    }

    #[test]
    fn test_should_not_checkout_unavailable_book() {
        let mut catalog_svc = seeded_catalog();
        let mut checkout_svc = create_checkout_service(&Configuration::new("test"), catalog_svc.as_mut());
        let _ = checkout_svc.checkout(1, 1).expect("should checkout");

        let res = checkout_svc.checkout(2, 1);
        assert_eq!(Err(LibraryError::unavailable("Sorry, the book '1984' is not available.", None)), res);
        assert!(checkout_svc.borrowed_books(2).expect("should list").is_empty());
        assert_eq!(1, checkout_svc.borrowed_books(1).expect("should list").len());
        drop(checkout_svc);
        assert_loans_consistent(catalog_svc.as_ref());
    }

    #[test]
    fn test_should_not_return_book_not_held() {
        let mut catalog_svc = seeded_catalog();
        let mut checkout_svc = create_checkout_service(&Configuration::new("test"), catalog_svc.as_mut());

        let res = checkout_svc.returned(1, 2);
        assert_eq!(Err(LibraryError::not_granted("Ali does not have the book 'The Hobbit' borrowed.", None)), res);
        drop(checkout_svc);
        assert!(catalog_svc.find_book_by_id(2).expect("should find").is_available());
        assert_loans_consistent(catalog_svc.as_ref());
    }

    #[test]
    fn test_should_display_borrowed_books() {
        let mut catalog_svc = seeded_catalog();
        let mut checkout_svc = create_checkout_service(&Configuration::new("test"), catalog_svc.as_mut());
        assert_eq!("\n--- Books borrowed by Sara ---\nNo books borrowed.",
                   checkout_svc.display_borrowed_books(2).expect("should display"));

        let _ = checkout_svc.checkout(2, 2).expect("should checkout");
        let _ = checkout_svc.checkout(2, 1).expect("should checkout");
        assert_eq!("\n--- Books borrowed by Sara ---\n\
                    Book ID: 2, Title: The Hobbit, Author: J.R.R. Tolkien, Available: No\n\
                    Book ID: 1, Title: 1984, Author: George Orwell, Available: No",
                   checkout_svc.display_borrowed_books(2).expect("should display"));
        assert_eq!(Err(LibraryError::not_found("Invalid member ID.")), checkout_svc.display_borrowed_books(5));
    }

    #[test]
    fn test_should_publish_loan_events() {
        let mut catalog_svc = seeded_catalog();
        let events = Rc::new(RefCell::new(vec![]));
        let mut checkout_svc = CheckoutServiceImpl::new(
            &Configuration::new("test"), catalog_svc.as_mut(),
            Box::new(RecordingPublisher { events: events.clone() }));
        let _ = checkout_svc.checkout(1, 2).expect("should checkout");
        let _ = checkout_svc.checkout(2, 2);
        let _ = checkout_svc.returned(1, 2).expect("should return");

        let events = events.borrow();
        let kinds: Vec<DomainEventType> = events.iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::CheckedOut, DomainEventType::Returned], kinds);
        assert_eq!("1:2", events[0].key.as_str());
    }

    #[test]
    fn test_should_keep_loans_when_publisher_fails() {
        let mut catalog_svc = seeded_catalog();
        let mut checkout_svc = CheckoutServiceImpl::new(
            &Configuration::new("test"), catalog_svc.as_mut(), Box::new(FailingPublisher));
        let checkout = checkout_svc.checkout(1, 1).expect("should checkout");
        assert_eq!(CheckoutStatus::CheckedOut, checkout.checkout_status);
        let _ = checkout_svc.checkout(2, 2).expect("should checkout");
        let returned = checkout_svc.returned(2, 2).expect("should return");
        assert_eq!(CheckoutStatus::Returned, returned.checkout_status);
        drop(checkout_svc);

        assert!(!catalog_svc.find_book_by_id(1).expect("should find").is_available());
        assert!(catalog_svc.find_book_by_id(2).expect("should find").is_available());
        assert_eq!(vec![1], catalog_svc.find_member_by_id(1).expect("should find").borrowed_book_ids());
        assert_loans_consistent(catalog_svc.as_ref());
    }
}
