//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod ape_class_repo;
pub mod carousel_item_repo;
pub mod event_repo;
pub mod house_team_repo;
pub mod page_repo;
pub mod page_widget_repo;
pub mod person_repo;
pub mod video_repo;
pub mod widget_repo;

pub use ape_class_repo::ApeClassRepo;
pub use carousel_item_repo::CarouselItemRepo;
pub use event_repo::EventRepo;
pub use house_team_repo::HouseTeamRepo;
pub use page_repo::PageRepo;
pub use page_widget_repo::PageWidgetRepo;
pub use person_repo::PersonRepo;
pub use video_repo::VideoRepo;
pub use widget_repo::WidgetRepo;
