use crate::application::services::HolidayService;

/// Shared application state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub holiday_service: HolidayService,
}

impl AppState {
    pub fn new(holiday_service: HolidayService) -> Self {
        Self { holiday_service }
    }
}
