// Application state for HTTP handlers
use crate::application::image_service::DashImageService;

#[derive(Clone)]
pub struct AppState {
    pub image_service: DashImageService,
}
