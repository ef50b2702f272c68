// Application state for HTTP handlers
use crate::application::advisory_service::AdvisoryService;
use crate::application::weather_service::WeatherService;

#[derive(Clone)]
pub struct AppState {
    pub advisory_service: AdvisoryService,
    pub weather_service: WeatherService,
}
