use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::PartyKind;
use crate::parties::domain::Person;

// MemberEntity is a registered library member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberEntity {
    pub member_id: i32,
    pub name: String,
    pub borrowed_book_ids: Vec<i32>,
}

impl MemberEntity {
    pub fn new(member_id: i32, name: &str) -> Self {
        Self {
            member_id,
            name: name.to_string(),
            borrowed_book_ids: vec![],
        }
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> i32 {
        self.member_id
    }
}

impl Person for MemberEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn kind(&self) -> PartyKind {
        PartyKind::Member
    }

    fn borrowed_book_ids(&self) -> &[i32] {
        &self.borrowed_book_ids
    }

    fn borrowed_book_ids_mut(&mut self) -> &mut Vec<i32> {
        &mut self.borrowed_book_ids
    }

    fn display_info(&self) -> String {
        format!("Member ID: {}, Name: {}", self.member_id, self.name)
    }
}
