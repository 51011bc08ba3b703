use actix_web::{web, App, HttpServer, HttpResponse, Result as ActixResult};
use actix_cors::Cors;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tembea_core::{Recommender, TownItem};
use crate::towns::KNOWN_TOWNS;

/// Result limits applied by the HTTP handlers
#[derive(Debug, Clone)]
pub struct RestConfig {
    pub similarity_limit: usize,
    pub town_limit: usize,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            similarity_limit: 5,
            town_limit: 10,
        }
    }
}

/// Shared, read-only handler state
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub config: RestConfig,
}

#[derive(Deserialize)]
struct RecommendationForm {
    user_input: String,
}

#[derive(Deserialize)]
struct TownForm {
    selected_town: String,
}

#[derive(Serialize)]
struct TownResponse {
    town: String,
    result: Option<Vec<TownItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        recommender: Arc<Recommender>,
        config: RestConfig,
        host: &str,
        port: u16,
    ) -> std::io::Result<()> {
        let state = web::Data::new(AppState { recommender, config });

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(state.clone())
                .configure(Self::configure)
        })
        .bind((host, port))?
        .run()
        .await
    }

    /// Register the recommender routes on an app
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/", web::get().to(index))
            .route("/health", web::get().to(health))
            .route("/recommendations", web::post().to(recommendations))
            .route("/town_recommendations", web::post().to(town_recommendations));
    }
}

async fn index() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "towns": &KNOWN_TOWNS[..]
    })))
}

async fn health(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "items": state.recommender.len(),
        "vocabulary": state.recommender.vocabulary_size(),
    })))
}

async fn recommendations(
    state: web::Data<AppState>,
    form: web::Form<RecommendationForm>,
) -> ActixResult<HttpResponse> {
    let results = state
        .recommender
        .recommend_hotels_restaurants(&form.user_input, state.config.similarity_limit);
    tracing::debug!("{} similarity results for {:?}", results.len(), form.user_input);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": results
    })))
}

async fn town_recommendations(
    state: web::Data<AppState>,
    form: web::Form<TownForm>,
) -> ActixResult<HttpResponse> {
    let town = form.into_inner().selected_town;
    let result = state
        .recommender
        .recommend_town_hotels(&town, state.config.town_limit);

    let message = match result {
        Some(_) => None,
        None => Some(format!("No recommendations found for {}", town)),
    };

    Ok(HttpResponse::Ok().json(TownResponse { town, result, message }))
}
