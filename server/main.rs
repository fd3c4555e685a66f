use actix_web::http::StatusCode;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, ResponseError};
use metro_graph::{
    data, load_coordinate_index, load_graph, plan_journey, shortest_path, CoordinateIndex, Graph, Journey, Route,
    RoutingError,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Settings read from the environment
///
/// - `PORT`: listening port, 8080 by default
/// - `METRO_NETWORK`: edge-list file
/// - `METRO_STATIONS`: comma-separated coordinate files, merged in order
///
/// The bundled sample network is served when neither file variable is set.
struct ServerConfig {
    port: u16,
    network: Option<PathBuf>,
    stations: Vec<PathBuf>,
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        let network = env::var_os("METRO_NETWORK").map(PathBuf::from);

        let stations = env::var("METRO_STATIONS")
            .map(|paths| {
                paths
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();

        Self { port, network, stations }
    }
}

/// Read-only network shared by every worker
struct Network {
    graph: Graph,
    stations: CoordinateIndex,
}

impl Network {
    fn load(config: &ServerConfig) -> metro_graph::Result<Self> {
        let graph = match &config.network {
            Some(path) => load_graph(path)?,
            None => data::sample_graph()?,
        };
        let stations = if config.stations.is_empty() {
            data::sample_stations()?
        } else {
            load_coordinate_index(&config.stations)?
        };
        Ok(Self { graph, stations })
    }
}

#[derive(Debug)]
struct ApiError(RoutingError);

impl From<RoutingError> for ApiError {
    fn from(err: RoutingError) -> Self {
        Self(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Serialize, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            RoutingError::VertexNotFound(_) | RoutingError::PositionNotFound(_) | RoutingError::PathNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            RoutingError::EmptyDomain => StatusCode::SERVICE_UNAVAILABLE,
            RoutingError::InvalidPoint { .. } => StatusCode::BAD_REQUEST,
            // Load-time failures; a request only reaches these through a bug
            RoutingError::EmptyContainer | RoutingError::MalformedInput { .. } | RoutingError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody { error: self.0.to_string() })
    }
}

#[derive(Deserialize)]
struct PointQuery {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RouteQuery {
    from: String,
    to: String,
}

#[derive(Deserialize)]
struct JourneyQuery {
    x: f64,
    y: f64,
    to: String,
}

#[derive(Serialize, Deserialize)]
struct NearestResponse {
    station: String,
    position: (f64, f64),
}

#[derive(Serialize, Deserialize)]
struct JourneyResponse {
    #[serde(flatten)]
    journey: Journey,
    waypoints: Vec<(f64, f64)>,
    walking_distance: f64,
}

#[get("/stations")]
async fn get_stations(network: web::Data<Network>) -> web::Json<CoordinateIndex> {
    web::Json(network.stations.clone())
}

#[get("/nearest")]
async fn get_nearest(network: web::Data<Network>, query: web::Query<PointQuery>) -> Result<web::Json<NearestResponse>, ApiError> {
    let station = network.stations.nearest((query.x, query.y))?;
    let position = network
        .stations
        .position(station)
        .ok_or_else(|| RoutingError::PositionNotFound(station.to_string()))?;

    Ok(web::Json(NearestResponse {
        station: station.to_string(),
        position,
    }))
}

#[get("/route")]
async fn get_route(network: web::Data<Network>, query: web::Query<RouteQuery>) -> Result<web::Json<Route>, ApiError> {
    let found = shortest_path(&network.graph, &query.from.to_uppercase(), &query.to.to_uppercase())?;
    Ok(web::Json(found))
}

#[get("/journey")]
async fn get_journey(network: web::Data<Network>, query: web::Query<JourneyQuery>) -> Result<web::Json<JourneyResponse>, ApiError> {
    let planned = plan_journey(&network.graph, &network.stations, (query.x, query.y), &query.to.to_uppercase())?;
    let waypoints = planned.waypoints(&network.stations)?;
    let walking_distance = planned.walking_distance(&network.stations)?;

    log::info!(
        "Journey from {} to {}: {} stations, cost {}",
        planned.boarding,
        query.to,
        planned.route.stations.len(),
        planned.route.cost
    );

    Ok(web::Json(JourneyResponse {
        journey: planned,
        waypoints,
        walking_distance,
    }))
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_stations)
        .service(get_nearest)
        .service(get_route)
        .service(get_journey);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let network = Network::load(&config).map_err(|err| {
        log::error!("Failed to load network: {err}");
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    })?;

    log::info!(
        "Serving {} stations on 0.0.0.0:{}",
        network.stations.len(),
        config.port
    );

    let network = web::Data::new(network);

    HttpServer::new(move || {
        App::new()
            .app_data(network.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
