use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use database::postgres::DatabaseConnection;
use tracing::info;

use core_config::tracing::{init_tracing, install_color_eyre};
use domain_customers::{CustomerRepository, CustomerService, PgCustomerRepository};
use domain_orders::{OrderRepository, OrderService, PgOrderRepository};
use domain_products::{PgProductRepository, ProductRepository, ProductService};

use crm_api::{Config, schema};

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match database::postgres::check_health(&db).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    let customer_repo: Arc<dyn CustomerRepository> =
        Arc::new(PgCustomerRepository::new(db.clone()));
    let product_repo: Arc<dyn ProductRepository> = Arc::new(PgProductRepository::new(db.clone()));
    let order_repo: Arc<dyn OrderRepository> = Arc::new(PgOrderRepository::new(db.clone()));

    let customers = CustomerService::new(customer_repo.clone());
    let products = ProductService::new(product_repo.clone());
    let orders = OrderService::new(order_repo, customer_repo, product_repo);

    let schema = schema::build_schema(customers, products, orders);

    let app = Router::new()
        .route("/graphql", get(graphiql).post_service(GraphQL::new(schema)))
        .route("/health", get(health))
        .with_state(db.clone());

    let address = config.server.address();
    info!(%address, "Starting CRM API, GraphiQL at /graphql");

    let listener = tokio::net::TcpListener::bind(&address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down: closing database connection");
    if let Err(e) = db.close().await {
        tracing::error!(error = %e, "Error closing PostgreSQL connection");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
