use serde::{Deserialize, Serialize};
use crate::core::library::PartyKind;
use crate::parties::domain::Person;

// PartyDto is a serializable snapshot of any Person variant.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PartyDto {
    pub party_id: i32,
    pub kind: PartyKind,
    pub name: String,
    pub borrowed_book_ids: Vec<i32>,
}

impl From<&dyn Person> for PartyDto {
    fn from(other: &dyn Person) -> Self {
        Self {
            party_id: other.id(),
            kind: other.kind(),
            name: other.name().to_string(),
            borrowed_book_ids: other.borrowed_book_ids().to_vec(),
        }
    }
}
