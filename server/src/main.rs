use larder_core::{RecipeCache, RecipeSource, SpoonacularClient};
use larder_server::config::Config;
use larder_server::state::SessionSecret;
use larder_server::{api, build_router, db, telemetry, AppState};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        match api::openapi().to_pretty_json() {
            Ok(spec) => println!("{}", spec),
            Err(e) => eprintln!("Failed to render OpenAPI spec: {}", e),
        }
        return;
    }

    telemetry::init_telemetry();

    let config = Config::from_env().expect("Invalid configuration");

    let pool = db::create_pool(&config.database_url).expect("Failed to initialize database");

    let mut client = SpoonacularClient::builder(config.spoonacular_api_key.clone())
        .timeout(config.recipe_api_timeout);
    if let Some(base_url) = &config.spoonacular_base_url {
        client = client.base_url(base_url.clone());
    }
    let client = client.build().expect("Failed to build recipe API client");

    let recipes = RecipeSource::new(
        Arc::new(client),
        RecipeCache::new(
            config.recipe_cache_ttl,
            larder_core::cache::DEFAULT_CAPACITY,
        ),
    );

    let state = AppState::new(pool, recipes, SessionSecret::new(&config.secret_key));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listener");

    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Server listening on {}", addr);
    }
    tracing::info!("Swagger UI available at /swagger-ui/");

    axum::serve(listener, app).await.expect("Server error");
}
