//! API constants

/// Service name reported by the liveness probe
pub const SERVICE_NAME: &str = "folio-api";

/// Where the OpenAPI document is served
pub const OPENAPI_PATH: &str = "/api/openapi.json";
