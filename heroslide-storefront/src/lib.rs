pub mod carousel;
pub mod config;
pub mod fetcher;
pub mod types;

pub use carousel::{CarouselController, RenderPlan};
pub use fetcher::SlideFetcher;
pub use types::Slide;
