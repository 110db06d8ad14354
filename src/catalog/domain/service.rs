use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;
use crate::parties::domain::Person;
use crate::parties::dto::PartyDto;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn Repository<BookEntity>>,
    party_repository: Box<dyn Repository<Box<dyn Person>>>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn Repository<BookEntity>>,
               party_repository: Box<dyn Repository<Box<dyn Person>>>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            party_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // called after the entry is stored; a failed publish leaves it in place
    fn publish(&self, event: &DomainEvent) {
        if let Err(err) = self.events_publisher.publish(event) {
            warn!(key = event.key.as_str(), name = event.name.as_str(), reason = err.message(), "added event not published");
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<BookEntity> {
        let added = book.clone();
        let event = DomainEvent::added(
            "books", "books", added.book_id.to_string().as_str(), &self.metadata(), &added)?;
        self.book_repository.create(book).map_err(|err| {
            debug!(book_id = added.book_id, reason = err.message(), "book rejected");
            err
        })?;
        self.publish(&event);
        info!(book_id = added.book_id, title = added.title.as_str(), "book added");
        Ok(added)
    }

    fn add_member(&mut self, member: Box<dyn Person>) -> LibraryResult<()> {
        let dto = PartyDto::from(&*member);
        let event = DomainEvent::added(
            "parties", "parties", dto.party_id.to_string().as_str(), &self.metadata(), &dto)?;
        self.party_repository.create(member).map_err(|err| {
            debug!(member_id = dto.party_id, reason = err.message(), "member rejected");
            err
        })?;
        self.publish(&event);
        info!(member_id = dto.party_id, name = dto.name.as_str(), "member added");
        Ok(())
    }

    fn find_book_by_id(&self, id: i32) -> Option<&BookEntity> {
        let found = self.book_repository.get(id);
        debug!(book_id = id, found = found.is_some(), "book lookup");
        found
    }

    fn find_member_by_id(&self, id: i32) -> Option<&dyn Person> {
        let found = self.party_repository.get(id).map(|p| &**p);
        debug!(member_id = id, found = found.is_some(), "member lookup");
        found
    }

    fn books(&self) -> &[BookEntity] {
        self.book_repository.all()
    }

    fn members(&self) -> Vec<&dyn Person> {
        self.party_repository.all().iter().map(|p| &**p).collect()
    }

    fn find_member_and_book_mut(&mut self, member_id: i32, book_id: i32)
                                -> (Option<&mut Box<dyn Person>>, Option<&mut BookEntity>) {
        let member = self.party_repository.get_mut(member_id);
        let book = self.book_repository.get_mut(book_id);
        debug!(member_id, book_id, member_found = member.is_some(), book_found = book.is_some(), "loan lookup");
        (member, book)
    }
}
