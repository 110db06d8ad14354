use std::io;
use lms::catalog::factory::create_catalog_service;
use lms::core::domain::Configuration;
use lms::core::library::LibraryResult;
use lms::shell::controller::Shell;
use lms::utils::logs::setup_tracing;

fn main() -> LibraryResult<()> {
    let config = Configuration::new("main");
    setup_tracing(&config);

    let catalog = create_catalog_service(&config);
    let mut shell = Shell::new(&config, catalog, io::stdin().lock(), io::stdout());
    if config.seed_catalog {
        shell.seed()?;
    }
    shell.run()
}
