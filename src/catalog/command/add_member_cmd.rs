use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::parties::domain::Person;
use crate::parties::domain::model::MemberEntity;
use crate::parties::dto::PartyDto;

pub struct AddMemberCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddMemberCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddMemberCommandRequest {
    pub member_id: i32,
    pub name: String,
}

impl AddMemberCommandRequest {
    pub fn new(member_id: i32, name: &str) -> Self {
        Self {
            member_id,
            name: name.to_string(),
        }
    }
}

impl From<&MemberEntity> for AddMemberCommandRequest {
    fn from(other: &MemberEntity) -> Self {
        Self::new(other.member_id, other.name.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct AddMemberCommandResponse {
    pub member: PartyDto,
}

impl AddMemberCommandResponse {
    pub fn new(member: PartyDto) -> Self {
        Self {
            member,
        }
    }
}

impl Command<AddMemberCommandRequest, AddMemberCommandResponse> for AddMemberCommand<'_> {
    fn execute(&mut self, req: AddMemberCommandRequest) -> Result<AddMemberCommandResponse, CommandError> {
        let member = MemberEntity::new(req.member_id, req.name.as_str());
        let dto = PartyDto::from(&member as &dyn Person);
        self.catalog_service.add_member(Box::new(member)).map_err(CommandError::from)
            .map(|_| AddMemberCommandResponse::new(dto))
    }
}
