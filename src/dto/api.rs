//! JSON envelope shared by every API endpoint.

use serde::Serialize;
use validator::ValidationErrors;

/// Default page size for collection endpoints, also the server-side cap.
pub const DEFAULT_PER_PAGE: usize = 1000;

/// Clamps a client-supplied page size to `1..=DEFAULT_PER_PAGE`.
pub fn clamp_per_page(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_PER_PAGE).clamp(1, DEFAULT_PER_PAGE)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl PageInfo {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            page: page.max(1),
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }
}

/// Response envelope: `{ success, data?, message?, errors?, pagination? }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            pagination: None,
        }
    }

    pub fn message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            errors: None,
            pagination: None,
        }
    }

    pub fn paginated(data: T, pagination: PageInfo) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            pagination: Some(pagination),
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: None,
            pagination: None,
        }
    }

    pub fn invalid(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            data: None,
            message: Some("Error de validación".to_string()),
            errors: Some(errors),
            pagination: None,
        }
    }
}
