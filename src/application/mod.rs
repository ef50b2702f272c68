// Application layer - Use cases and gateway contracts
pub mod advisory_service;
pub mod weather_gateway;
pub mod weather_service;
