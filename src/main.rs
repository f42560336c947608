use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use refugio::config::AppConfig;
use refugio::error::AppError;
use refugio::telemetry;
use refugio::workflows::adoption::{
    adoption_router, evaluate, AdoptionApplicationService, AdoptionRule, EvaluationResult,
    MemoryApplicationRepository, MemoryPetDirectory, Pet, Step1Snapshot, Step2Snapshot,
    Step3Snapshot,
};
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "refugio",
    about = "Run the pet adoption intake and evaluation service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate an application snapshot from a JSON file, without a server
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Path to a JSON file holding the pet, optional rule, and step snapshots
    #[arg(long)]
    input: PathBuf,
    /// Print the result as formatted JSON instead of a summary
    #[arg(long)]
    pretty: bool,
}

/// Fully-resolved snapshot accepted by the stateless evaluation surface.
#[derive(Debug, Deserialize)]
struct EvaluationRequest {
    pet: Pet,
    #[serde(default)]
    rule: Option<AdoptionRule>,
    step1: Step1Snapshot,
    step2: Step2Snapshot,
    step3: Step3Snapshot,
}

impl EvaluationRequest {
    fn evaluate(&self) -> EvaluationResult {
        evaluate(
            &self.pet,
            self.rule.as_ref(),
            &self.step1,
            &self.step2,
            &self.step3,
        )
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Evaluate(args) => run_evaluate(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let repository = Arc::new(MemoryApplicationRepository::default());
    let pets = Arc::new(MemoryPetDirectory::seeded());
    let service = Arc::new(AdoptionApplicationService::new(repository, pets));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/adoptions/evaluate", post(evaluate_endpoint))
        .with_state(state)
        .merge(adoption_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "adoption service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let request: EvaluationRequest = serde_json::from_str(&raw)?;
    let result = request.evaluate();

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "Application for {} ({})",
        request.pet.name,
        request.pet.species.label()
    );
    println!("Score: {}/100", result.score);
    println!("Status: {}", result.status.label());
    if result.knockouts.is_empty() {
        println!("Knockouts: none");
    } else {
        println!("Knockouts:");
        for knockout in &result.knockouts {
            println!("- {knockout}");
        }
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn evaluate_endpoint(Json(request): Json<EvaluationRequest>) -> Json<EvaluationResult> {
    Json(request.evaluate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use refugio::workflows::adoption::{AgeBracket, Disposition, OtherPets, PetEnvironment};
    use refugio::workflows::adoption::{HousingType, Species};
    use std::collections::BTreeMap;

    fn sample_request() -> EvaluationRequest {
        EvaluationRequest {
            pet: Pet {
                id: "pet-001".to_string(),
                slug: "luna".to_string(),
                name: "Luna".to_string(),
                species: Species::Cat,
            },
            rule: None,
            step1: Step1Snapshot {
                name: "María Fernanda".to_string(),
                email: "maria@example.com".to_string(),
                phone: "5512345678".to_string(),
                city: "Guadalajara".to_string(),
                age_bracket: AgeBracket::From30,
                occupation: None,
                address: None,
                household_count: Some(2),
                household_ages: None,
                phone_verified: true,
                docs_confirmed: BTreeMap::new(),
            },
            step2: Step2Snapshot {
                housing_type: HousingType::Own,
                landlord_allows_pets: false,
                hours_away_per_week: 0,
                pet_environment: PetEnvironment::Indoor,
                other_pets: OtherPets::None,
                motivation: "a".repeat(150),
                condo_allows_pets: None,
                prior_pets_experience: None,
                prior_pets_outcome: None,
                sleep_location: None,
                travel_caretaker: None,
                hours_alone_per_day: None,
                home_visit_ok: None,
                yard_secure: None,
                will_leash: None,
                will_not_tether: None,
                id_tag_will_use: None,
                training_plan: None,
                social_plan: None,
                monthly_budget: None,
                has_vet: None,
                vet_contact: None,
                children_youngest_age: None,
            },
            step3: Step3Snapshot {
                commit_sterilization: true,
                commit_vaccines: true,
                accept_contract: true,
                family_agrees: None,
            },
        }
    }

    #[tokio::test]
    async fn evaluate_endpoint_returns_result() {
        let Json(result) = super::evaluate_endpoint(Json(sample_request())).await;
        assert!(result.knockouts.is_empty());
        assert_eq!(result.status, Disposition::Interview);
    }

    #[test]
    fn evaluation_request_parses_wire_format() {
        let payload = serde_json::json!({
            "pet": { "id": "pet-002", "slug": "rocky", "name": "Rocky", "species": "dog" },
            "rule": { "forbid_tethering": true },
            "step1": {
                "name": "Juan Pablo",
                "email": "juan@example.com",
                "phone": "5587654321",
                "city": "Monterrey",
                "ageBracket": "25",
                "phoneVerified": true
            },
            "step2": {
                "housingType": "rent",
                "landlordAllowsPets": true,
                "hoursAwayPerWeek": 40,
                "petEnvironment": "indoor_with_enclosed",
                "otherPets": "none",
                "motivation": "Quiero darle un hogar",
                "willNotTether": false
            },
            "step3": {
                "commitSterilization": true,
                "commitVaccines": true,
                "acceptContract": true
            }
        });

        let request: EvaluationRequest =
            serde_json::from_value(payload).expect("request deserializes");
        let result = request.evaluate();
        assert_eq!(result.status, Disposition::Rejected);
        assert!(result
            .knockouts
            .iter()
            .any(|k| k.contains("amarrar o encadenar")));
    }
}
