use folio_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    // Initialize the application (backend, content directory, routes)
    let (_state, router) = folio_api::setup::initialize_app(config.clone()).await?;

    folio_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
