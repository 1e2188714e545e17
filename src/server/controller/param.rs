use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{error::AppError, model::pagination::ListParams};

/// `?offset=&limit=` query parameters accepted by every list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Rows to skip (default: 0)
    pub offset: Option<u64>,
    /// Rows to return (default and maximum: 100)
    pub limit: Option<u64>,
}

impl TryFrom<PaginationParams> for ListParams {
    type Error = AppError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        ListParams::new(params.offset, params.limit)
    }
}
