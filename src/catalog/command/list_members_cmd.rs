use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListMembersCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListMembersCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListMembersCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListMembersCommandResponse {
    pub count: usize,
    pub listing: String,
}

impl Command<ListMembersCommandRequest, ListMembersCommandResponse> for ListMembersCommand<'_> {
    fn execute(&mut self, _req: ListMembersCommandRequest) -> Result<ListMembersCommandResponse, CommandError> {
        Ok(ListMembersCommandResponse {
            count: self.catalog_service.members().len(),
            listing: self.catalog_service.display_all_members(),
        })
    }
}
