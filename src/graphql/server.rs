use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::CarsSchema;
use crate::config::ServerSettings;
use crate::error::Result;

pub const GRAPHQL_PATH: &str = "/graphql";

pub const WELCOME_TEXT: &str =
    "Welcome to the GraphQL car demo! Go to /graphql to use the GraphQL API.";

/// Builds the HTTP router serving `schema`.
///
/// `POST /graphql` executes requests. `GET /graphql` serves GraphiQL when
/// enabled. CORS headers are only added when `settings.cors` is set.
pub fn create_app(schema: CarsSchema, settings: &ServerSettings) -> Router {
    let mut graphql_route = post(graphql_handler);
    if settings.graphiql {
        graphql_route = graphql_route.get(graphiql);
    }

    let mut app = Router::new()
        .route("/", get(welcome))
        .route(GRAPHQL_PATH, graphql_route)
        .layer(TraceLayer::new_for_http())
        .with_state(schema);

    if settings.cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Binds `host:port` and serves until ctrl-c.
pub async fn run_server(schema: CarsSchema, settings: &ServerSettings) -> Result<()> {
    let app = create_app(schema, settings);

    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    let addr = listener.local_addr()?;

    info!("Server running at http://{}{}", addr, GRAPHQL_PATH);
    if settings.graphiql {
        info!("GraphiQL available at http://{}{}", addr, GRAPHQL_PATH);
    }
    if settings.cors {
        info!("CORS enabled for all origins");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn graphql_handler(State(schema): State<CarsSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn welcome() -> &'static str {
    WELCOME_TEXT
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
