use crate::{
    application::services::HolidayExport,
    domain::entities::{RawHolidayParams, ResponseFormat},
    domain::services::ICAL_CONTENT_TYPE,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
};

/// GET / - Holidays of one year as JSON passthrough (default) or iCalendar
pub async fn get_holidays(
    State(state): State<AppState>,
    params: Result<Query<RawHolidayParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let query = params.into_query()?;

    let export = state.holiday_service.export(&query).await?;
    Ok(export_response(export))
}

/// GET /ical - Like `/` but always answers with an iCalendar document
pub async fn get_holidays_ical(
    State(state): State<AppState>,
    params: Result<Query<RawHolidayParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(mut params) = params.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    params.format = None;
    let query = params.into_query()?.with_format(ResponseFormat::Ical);

    let export = state.holiday_service.export(&query).await?;
    Ok(export_response(export))
}

fn export_response(export: HolidayExport) -> Response {
    match export {
        HolidayExport::Json(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        HolidayExport::Ical { filename, body } => (
            [
                (header::CONTENT_TYPE, ICAL_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            body,
        )
            .into_response(),
    }
}
