use crate::core::repository::{MemoryRepository, Repository};
use crate::parties::domain::Person;
use crate::parties::domain::model::MemberEntity;

pub fn create_party_repository() -> Box<dyn Repository<Box<dyn Person>>> {
    Box::new(MemoryRepository::<Box<dyn Person>>::new("member"))
}

// The members every fresh catalog starts with.
pub fn seed_members() -> Vec<MemberEntity> {
    vec![
        MemberEntity::new(1, "Ali"),
        MemberEntity::new(2, "Sara"),
    ]
}
