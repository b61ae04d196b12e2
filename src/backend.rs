use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    collections::HashSet,
    fmt, fs, io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};
use url::Url;

use crate::manifest::{GalleryItem, ImageManifest};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_IMAGE_MANIFEST_PATH: &str = "config/images.json";
const DEFAULT_EXTENSION_ARCHIVE_PATH: &str = "dist/extension.zip";
const DEFAULT_IMAGES_CACHE_MAX_AGE_SECONDS: u64 = 300;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const IMAGES_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 86_400);
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const EXTENSION_ARCHIVE_DISPOSITION: &str = "attachment; filename=\"extension.zip\"";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug)]
struct ServerConfig {
    port: u16,
    static_dir: PathBuf,
    image_manifest_path: PathBuf,
    extension_archive_path: PathBuf,
    images_cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = parse_env_u16_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS);
        let static_dir = parse_env_non_empty_string("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let image_manifest_path = parse_env_non_empty_string("IMAGE_MANIFEST_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_MANIFEST_PATH));
        let extension_archive_path = parse_env_non_empty_string("EXTENSION_ARCHIVE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXTENSION_ARCHIVE_PATH));
        let images_cache_max_age_seconds = parse_env_u64_with_bounds(
            "IMAGES_CACHE_MAX_AGE_SECONDS",
            DEFAULT_IMAGES_CACHE_MAX_AGE_SECONDS,
            IMAGES_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_dir,
            image_manifest_path,
            extension_archive_path,
            images_cache_max_age_seconds,
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    manifest: Arc<ImageManifest>,
    config: Arc<ServerConfig>,
}

#[derive(Debug)]
pub enum ManifestError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "failed reading image manifest: {error}"),
            Self::Parse(error) => write!(f, "failed parsing image manifest: {error}"),
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Parse(error) => Some(error),
        }
    }
}

impl From<io::Error> for ManifestError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RejectReason {
    EmptyId,
    DuplicateId,
    InvalidImageUrl,
    InvalidVideoUrl,
}

impl RejectReason {
    fn as_str(self) -> &'static str {
        match self {
            Self::EmptyId => "empty_id",
            Self::DuplicateId => "duplicate_id",
            Self::InvalidImageUrl => "invalid_image_url",
            Self::InvalidVideoUrl => "invalid_video_url",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Rejection {
    id: String,
    reason: RejectReason,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let manifest = load_manifest(&config.image_manifest_path, &config)?;
    let state = AppState {
        manifest: Arc::new(manifest),
        config: Arc::new(config.clone()),
    };

    if !config.extension_archive_path.is_file() {
        log_event(
            &config,
            LogLevel::Info,
            "extension_archive_missing",
            serde_json::json!({
                "path": config.extension_archive_path.display().to_string(),
            }),
        );
    }

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_start",
        serde_json::json!({
            "address": bind_address.as_str(),
            "static_dir": config.static_dir.display().to_string(),
        }),
    );
    axum::serve(listener, router(state, &config)).await?;
    Ok(())
}

/// Only a served archive is marked as a download; a missing file stays a
/// plain 404.
fn archive_disposition(response: &axum::response::Response) -> Option<HeaderValue> {
    response
        .status()
        .is_success()
        .then(|| HeaderValue::from_static(EXTENSION_ARCHIVE_DISPOSITION))
}

fn router(state: AppState, config: &ServerConfig) -> Router {
    let index_path = config.static_dir.join("index.html");
    let static_service = ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index_path));
    let archive_routes = Router::new()
        .route_service("/extension.zip", ServeFile::new(&config.extension_archive_path))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_DISPOSITION,
            archive_disposition,
        ));

    Router::new()
        .route("/api/images", get(get_images))
        .merge(archive_routes)
        .fallback_service(static_service)
        .with_state(state)
}

async fn get_images(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(&headers);
    let max_age = state.config.images_cache_max_age_seconds;

    let response = json_response(
        StatusCode::OK,
        (*state.manifest).clone(),
        cache_control(&format!("public, max-age={max_age}")),
        &request_id,
    );

    log_event(
        &state.config,
        LogLevel::Info,
        "images_request",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": uri.path(),
            "images": state.manifest.images.len(),
            "status": response.status().as_u16(),
            "duration_ms": request_started_at.elapsed().as_millis(),
        }),
    );

    response
}

fn json_response<T: Serialize>(
    status: StatusCode,
    payload: T,
    cache_control: HeaderValue,
    request_id: &str,
) -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, cache_control);
    headers.insert(header::VARY, HeaderValue::from_static("Accept-Encoding"));
    response_with_request_id(status, headers, Json(payload), request_id)
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn load_manifest(path: &Path, config: &ServerConfig) -> Result<ImageManifest, ManifestError> {
    let raw = fs::read_to_string(path)?;
    let parsed: ImageManifest = serde_json::from_str(&raw)?;
    let (manifest, rejections) = validate_manifest(parsed);

    for rejection in &rejections {
        log_event(
            config,
            LogLevel::Info,
            "manifest_entry_rejected",
            serde_json::json!({
                "id": rejection.id.as_str(),
                "reason": rejection.reason.as_str(),
            }),
        );
    }

    for item in &manifest.images {
        log_event(
            config,
            LogLevel::Debug,
            "manifest_entry_accepted",
            serde_json::json!({
                "id": item.id.as_str(),
                "image_url": item.image_url.as_str(),
            }),
        );
    }

    log_event(
        config,
        LogLevel::Info,
        "manifest_loaded",
        serde_json::json!({
            "path": path.display().to_string(),
            "images": manifest.images.len(),
            "rejected": rejections.len(),
            "tutorial_video": manifest.tutorial_video.is_some(),
        }),
    );

    Ok(manifest)
}

/// Keeps the usable entries in their original order. The first occurrence
/// of an id wins.
fn validate_manifest(manifest: ImageManifest) -> (ImageManifest, Vec<Rejection>) {
    let mut seen = HashSet::new();
    let mut rejections = Vec::new();
    let mut images = Vec::with_capacity(manifest.images.len());

    for mut item in manifest.images {
        item.id = item.id.trim().to_string();
        let reason = if item.id.is_empty() {
            Some(RejectReason::EmptyId)
        } else if seen.contains(&item.id) {
            Some(RejectReason::DuplicateId)
        } else if !is_allowed_image_url(&item.image_url) {
            Some(RejectReason::InvalidImageUrl)
        } else {
            None
        };

        match reason {
            Some(reason) => rejections.push(Rejection { id: item.id, reason }),
            None => {
                seen.insert(item.id.clone());
                images.push(normalize_item(item));
            }
        }
    }

    let tutorial_video = match manifest.tutorial_video {
        Some(video) if is_http_url(&video) => Some(video.trim().to_string()),
        Some(_) => {
            rejections.push(Rejection {
                id: "tutorialVideo".to_string(),
                reason: RejectReason::InvalidVideoUrl,
            });
            None
        }
        None => None,
    };

    (
        ImageManifest {
            images,
            tutorial_video,
        },
        rejections,
    )
}

fn normalize_item(item: GalleryItem) -> GalleryItem {
    GalleryItem {
        image_url: item.image_url.trim().to_string(),
        image_hint: item
            .image_hint
            .map(|hint| hint.trim().to_string())
            .filter(|hint| !hint.is_empty()),
        ..item
    }
}

fn is_allowed_image_url(value: &str) -> bool {
    let value = value.trim();
    (value.starts_with('/') && !value.starts_with("//")) || is_http_url(value)
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value.trim())
        .map(|parsed| parsed.scheme() == "http" || parsed.scheme() == "https")
        .unwrap_or(false)
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    parse_u64_with_bounds(std::env::var(name).ok().as_deref(), default, bounds)
}

fn parse_u64_with_bounds(raw: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_u16_with_bounds(name: &str, default: u16, bounds: (u16, u16)) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    log_level_from_str(parse_env_non_empty_string(name).as_deref(), default)
}

fn log_level_from_str(raw: Option<&str>, default: LogLevel) -> LogLevel {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn response_with_request_id(
    status: StatusCode,
    mut headers: HeaderMap,
    payload: impl IntoResponse,
    request_id: &str,
) -> axum::response::Response {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
    (status, headers, payload).into_response()
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use std::io::Write;
    use tower::ServiceExt;

    fn test_config() -> ServerConfig {
        ServerConfig {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("dist"),
            image_manifest_path: PathBuf::from("config/images.json"),
            extension_archive_path: PathBuf::from("dist/extension.zip"),
            images_cache_max_age_seconds: 120,
            log_level: LogLevel::Info,
        }
    }

    fn item(id: &str, image_url: &str) -> GalleryItem {
        GalleryItem {
            id: id.to_string(),
            image_url: image_url.to_string(),
            description: format!("{id} preview"),
            image_hint: None,
        }
    }

    #[test]
    fn bounded_parse_falls_back_for_out_of_range_or_garbage() {
        let bounds = IMAGES_CACHE_MAX_AGE_SECONDS_BOUNDS;
        assert_eq!(parse_u64_with_bounds(Some(" 600 "), 300, bounds), 600);
        assert_eq!(parse_u64_with_bounds(Some("0"), 300, bounds), 0);
        assert_eq!(parse_u64_with_bounds(Some("86401"), 300, bounds), 300);
        assert_eq!(parse_u64_with_bounds(Some("soon"), 300, bounds), 300);
        assert_eq!(parse_u64_with_bounds(None, 300, bounds), 300);
    }

    #[test]
    fn log_level_parsing_is_case_insensitive() {
        assert_eq!(log_level_from_str(Some("DEBUG"), LogLevel::Info), LogLevel::Debug);
        assert_eq!(log_level_from_str(Some("info"), LogLevel::Debug), LogLevel::Info);
        assert_eq!(log_level_from_str(Some("trace"), LogLevel::Info), LogLevel::Info);
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn request_id_is_echoed_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[test]
    fn image_urls_must_be_root_relative_or_http() {
        assert!(is_allowed_image_url("/images/hero.png"));
        assert!(is_allowed_image_url("https://images.unsplash.com/photo-1"));
        assert!(!is_allowed_image_url("//cdn.example.com/hero.png"));
        assert!(!is_allowed_image_url("javascript:alert(1)"));
        assert!(!is_allowed_image_url("hero.png"));
    }

    #[test]
    fn validation_drops_bad_entries_and_keeps_order() {
        let manifest = ImageManifest {
            images: vec![
                item("showcase-2", "/images/showcase-2.png"),
                item("  ", "/images/blank.png"),
                item("showcase-1", "https://images.example.com/s1.png"),
                item("showcase-2", "/images/duplicate.png"),
                item("hero-image", "data:image/png;base64,AAAA"),
            ],
            tutorial_video: Some("ftp://videos.example.com/tutorial".to_string()),
        };

        let (validated, rejections) = validate_manifest(manifest);

        let ids = validated.images.iter().map(|found| found.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["showcase-2", "showcase-1"]);
        assert_eq!(
            validated.lookup("showcase-2").map(|found| found.image_url.as_str()),
            Some("/images/showcase-2.png")
        );
        assert_eq!(validated.tutorial_video, None);

        let reasons = rejections.iter().map(|rejection| rejection.reason).collect::<Vec<_>>();
        assert_eq!(
            reasons,
            vec![
                RejectReason::EmptyId,
                RejectReason::DuplicateId,
                RejectReason::InvalidImageUrl,
                RejectReason::InvalidVideoUrl,
            ]
        );
    }

    #[test]
    fn blank_hints_are_dropped() {
        let mut hinted = item("feature-tts", "/images/tts.png");
        hinted.image_hint = Some("   ".to_string());

        let (validated, _) = validate_manifest(ImageManifest {
            images: vec![hinted],
            tutorial_video: Some("https://www.youtube-nocookie.com/embed/example".to_string()),
        });

        assert_eq!(validated.images[0].image_hint, None);
        assert!(validated.tutorial_video.is_some());
    }

    #[test]
    fn load_manifest_reads_camel_case_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"images":[{{"id":"hero-image","imageUrl":"/images/hero.png","description":"Hero","imageHint":"reading laptop"}}]}}"#
        )
        .expect("write manifest");

        let manifest = load_manifest(file.path(), &test_config()).expect("manifest loads");
        let hero = manifest.lookup("hero-image").expect("hero present");
        assert_eq!(hero.image_hint.as_deref(), Some("reading laptop"));
        assert_eq!(manifest.tutorial_video, None);
    }

    #[test]
    fn load_manifest_reports_missing_and_malformed_files() {
        let missing = load_manifest(Path::new("/nonexistent/images.json"), &test_config());
        assert!(matches!(missing, Err(ManifestError::Io(_))));

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{\"images\": [").expect("write manifest");
        let malformed = load_manifest(file.path(), &test_config());
        assert!(matches!(malformed, Err(ManifestError::Parse(_))));
    }

    #[tokio::test]
    async fn images_endpoint_returns_manifest_with_cache_headers() {
        let state = AppState {
            manifest: Arc::new(ImageManifest {
                images: vec![item("showcase-1", "/images/showcase-1.png")],
                tutorial_video: None,
            }),
            config: Arc::new(test_config()),
        };
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-test"));

        let response = get_images(State(state), Method::GET, Uri::from_static("/api/images"), headers)
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).and_then(|value| value.to_str().ok()),
            Some("public, max-age=120")
        );
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).and_then(|value| value.to_str().ok()),
            Some("req-test")
        );

        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body readable");
        let decoded: ImageManifest = serde_json::from_slice(&body).expect("manifest json");
        assert_eq!(decoded.images.len(), 1);
        assert_eq!(decoded.images[0].image_url, "/images/showcase-1.png");
    }

    #[test]
    fn stored_urls_are_trimmed() {
        let (validated, rejections) = validate_manifest(ImageManifest {
            images: vec![item("showcase-1", "  /images/a.png ")],
            tutorial_video: Some(" https://videos.example.com/tutorial ".to_string()),
        });

        assert!(rejections.is_empty());
        assert_eq!(validated.images[0].image_url, "/images/a.png");
        assert_eq!(
            validated.tutorial_video.as_deref(),
            Some("https://videos.example.com/tutorial")
        );
    }

    fn site_state(dir: &Path) -> (AppState, ServerConfig) {
        let config = ServerConfig {
            static_dir: dir.to_path_buf(),
            extension_archive_path: dir.join("extension.zip"),
            ..test_config()
        };
        let state = AppState {
            manifest: Arc::new(ImageManifest::default()),
            config: Arc::new(config.clone()),
        };
        (state, config)
    }

    async fn fetch(app: Router, path: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(path).body(Body::empty()).expect("request"))
            .await
            .expect("router is infallible")
    }

    #[tokio::test]
    async fn extension_archive_is_served_as_attachment() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("extension.zip"), b"PK\x03\x04archive").expect("write archive");
        fs::write(dir.path().join("index.html"), "<div id=\"app\"></div>").expect("write index");
        let (state, config) = site_state(dir.path());

        let response = fetch(router(state, &config), "/extension.zip").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_DISPOSITION)
                .and_then(|value| value.to_str().ok()),
            Some(EXTENSION_ARCHIVE_DISPOSITION)
        );
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body readable");
        assert_eq!(&body[..], b"PK\x03\x04archive");
    }

    #[tokio::test]
    async fn missing_archive_is_not_marked_as_download() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("index.html"), "<div id=\"app\"></div>").expect("write index");
        let (state, config) = site_state(dir.path());

        let response = fetch(router(state, &config), "/extension.zip").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("index.html"), "<div id=\"app\"></div>").expect("write index");
        let (state, config) = site_state(dir.path());

        let response = fetch(router(state, &config), "/some/deep/path").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body readable");
        assert_eq!(&body[..], b"<div id=\"app\"></div>");
    }
}
