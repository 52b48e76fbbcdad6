use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use mentorship_api::api::{self, state::AppState};
use mentorship_api::infrastructure::mongo;
use mentorship_api::infrastructure::repositories::{
    MongoMentorRepository, MongoStudentRepository,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let mongo_url = std::env::var("MONGO_URL").unwrap_or_else(|_| {
        tracing::warn!("MONGO_URL not set, using default");
        "mongodb://localhost:27017".to_string()
    });
    let db_name = std::env::var("MONGO_DB").unwrap_or_else(|_| "mentorship".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    // Connect to database
    tracing::info!("Connecting to database...");
    let database = mongo::connect(&mongo_url, &db_name)
        .await
        .expect("Failed to connect to MongoDB");

    // Build repositories (applies collection indexes)
    let mentors = MongoMentorRepository::new(&database)
        .await
        .expect("Failed to initialize mentors collection");
    let students = MongoStudentRepository::new(&database)
        .await
        .expect("Failed to initialize students collection");

    let state = AppState::new(Arc::new(mentors), Arc::new(students));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = api::router(state)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
