use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::parties::factory::create_party_repository;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let book_repo = create_book_repository();
    let party_repo = create_party_repository();
    let publisher = create_publisher(GatewayPublisherVia::Log);
    Box::new(CatalogServiceImpl::new(config, book_repo, party_repo, publisher))
}
