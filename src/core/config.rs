use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub map: MapConfig,
    pub classifier: ClassifierConfig,
    pub api_docs: ApiDocsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Projection reference point and plane scale for the map viewport.
///
/// The defaults center the plane on Lima; the scale is a tuning value for the
/// linear local-plane approximation, not a cartographic constant.
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub plane_scale: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

/// Latency window for the stand-in image classifier.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub latency: Duration,
}

#[derive(Debug, Clone)]
pub struct ApiDocsConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            map: MapConfig::from_env()?,
            classifier: ClassifierConfig::from_env()?,
            api_docs: ApiDocsConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MapConfig {
    // Lima, Perú — the deployment the marker tuning was calibrated against
    const DEFAULT_CENTER_LAT: f64 = -12.0464;
    const DEFAULT_CENTER_LNG: f64 = -77.0428;
    const DEFAULT_PLANE_SCALE: f64 = 2000.0;
    const DEFAULT_ORIGIN_X: f64 = 50.0;
    const DEFAULT_ORIGIN_Y: f64 = 50.0;

    pub fn from_env() -> Result<Self, String> {
        let center_lat = env::var("MAP_CENTER_LAT")
            .unwrap_or_else(|_| Self::DEFAULT_CENTER_LAT.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_CENTER_LAT must be a valid number".to_string())?;

        let center_lng = env::var("MAP_CENTER_LNG")
            .unwrap_or_else(|_| Self::DEFAULT_CENTER_LNG.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_CENTER_LNG must be a valid number".to_string())?;

        let plane_scale = env::var("MAP_PLANE_SCALE")
            .unwrap_or_else(|_| Self::DEFAULT_PLANE_SCALE.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_PLANE_SCALE must be a valid number".to_string())?;

        let origin_x = env::var("MAP_ORIGIN_X")
            .unwrap_or_else(|_| Self::DEFAULT_ORIGIN_X.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_ORIGIN_X must be a valid number".to_string())?;

        let origin_y = env::var("MAP_ORIGIN_Y")
            .unwrap_or_else(|_| Self::DEFAULT_ORIGIN_Y.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_ORIGIN_Y must be a valid number".to_string())?;

        Ok(Self {
            center_lat,
            center_lng,
            plane_scale,
            origin_x,
            origin_y,
        })
    }
}

impl ClassifierConfig {
    const DEFAULT_LATENCY_MS: u64 = 2000;

    pub fn from_env() -> Result<Self, String> {
        let latency_ms = env::var("CLASSIFIER_LATENCY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_LATENCY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "CLASSIFIER_LATENCY_MS must be a valid number".to_string())?;

        Ok(Self {
            latency: Duration::from_millis(latency_ms),
        })
    }
}

impl ApiDocsConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("API_DOCS_TITLE").unwrap_or_else(|_| "EcoVision API".to_string());
        let version = env::var("API_DOCS_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("API_DOCS_DESCRIPTION").unwrap_or_else(|_| {
            "Pollution incident reporting and triage API for EcoVision".to_string()
        });

        Ok(Self {
            title,
            version,
            description,
        })
    }
}
