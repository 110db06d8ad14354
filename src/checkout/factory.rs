use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub fn create_checkout_service<'a>(config: &Configuration,
                                   catalog_service: &'a mut dyn CatalogService) -> Box<dyn CheckoutService + 'a> {
    let publisher = create_publisher(GatewayPublisherVia::Log);
    Box::new(CheckoutServiceImpl::new(config, catalog_service, publisher))
}
