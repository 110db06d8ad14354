use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

pub trait Repository<Entity> {
    // appends an entity, rejecting an id that is already stored
    fn create(&mut self, entity: Entity) -> LibraryResult<()>;

    // get an entity by id, None when absent
    fn get(&self, id: i32) -> Option<&Entity>;

    // get a mutable entity by id, None when absent
    fn get_mut(&mut self, id: i32) -> Option<&mut Entity>;

    // all entities in insertion order
    fn all(&self) -> &[Entity];
}

// MemoryRepository is an ordered arena scanned linearly on lookup.
#[derive(Debug)]
pub struct MemoryRepository<Entity> {
    kind: String,
    entries: Vec<Entity>,
}

impl<Entity> MemoryRepository<Entity> {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            entries: vec![],
        }
    }
}

impl<Entity: Identifiable> Repository<Entity> for MemoryRepository<Entity> {
    fn create(&mut self, entity: Entity) -> LibraryResult<()> {
        if self.get(entity.id()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("{} with id {} already exists", self.kind, entity.id()).as_str()));
        }
        self.entries.push(entity);
        Ok(())
    }

    fn get(&self, id: i32) -> Option<&Entity> {
        self.entries.iter().find(|e| e.id() == id)
    }

    fn get_mut(&mut self, id: i32) -> Option<&mut Entity> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    fn all(&self) -> &[Entity] {
        &self.entries
    }
}
