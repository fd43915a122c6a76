use std::sync::Arc;

use poem::{listener::TcpListener, post, Route, Server};
use poem_openapi::OpenApiService;

use careview_backend::api::{AuthApi, MetricsApi, PatientsApi};
use careview_backend::config::{self, logging, Settings};
use careview_backend::graphql;
use careview_backend::services::{AccessGuard, TokenService};
use careview_backend::stores::{CredentialStore, PatientStore, ReportStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    logging::init_logging().expect("Failed to initialize logging");

    let settings = Settings::from_env().expect("Failed to load settings");

    // Connect to the relational store and make sure the patients table exists
    let db = config::database::init_relational(&settings)
        .await
        .expect("Failed to connect to relational store");

    // Connect to the document store holding the per-patient reports
    let reports = config::database::init_document_store(&settings)
        .await
        .expect("Failed to connect to document store");

    let credential_store = Arc::new(
        CredentialStore::new(
            settings.admin_username.clone(),
            settings.admin_password.clone(),
        )
        .expect("Failed to build credential store"),
    );
    let token_service = Arc::new(TokenService::new(settings.jwt_secret.clone()));
    let guard = Arc::new(AccessGuard::new(token_service.clone()));

    let patient_store = Arc::new(PatientStore::new(db));
    let report_store = Arc::new(ReportStore::new(reports));

    let auth_api = AuthApi::new(credential_store, token_service);
    let patients_api = PatientsApi::new(guard.clone(), patient_store.clone(), report_store);
    let metrics_api = MetricsApi::new(guard, patient_store.clone());

    let api_service = OpenApiService::new(
        (auth_api, patients_api, metrics_api),
        "Patient Records API",
        "1.0.0",
    )
    .server(format!("http://{}", settings.bind_addr));

    let ui = api_service.swagger_ui();

    let schema = graphql::build_schema(patient_store);

    let app = Route::new()
        .at("/graphql", post(async_graphql_poem::GraphQL::new(schema)))
        .nest("/swagger", ui)
        .nest("/", api_service);

    tracing::info!("Starting server on http://{}", settings.bind_addr);
    tracing::info!("Swagger UI available at /swagger");

    Server::new(TcpListener::bind(settings.bind_addr))
        .run(app)
        .await
}
