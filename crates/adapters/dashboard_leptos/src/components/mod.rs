mod header;
mod loading;
mod service_card;

pub use header::SiteHeader;
pub use loading::Loading;
pub use service_card::{ServiceCard, provide_icon_cache};
