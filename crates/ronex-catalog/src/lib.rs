//! # ronex-catalog
//!
//! Read side of the project catalog:
//! - [`ProjectCache`]: TTL cache over `GET /api/projects` that serves the
//!   last good list when a refetch fails
//! - [`CategoryFilter`]: exact category match or `all`
//! - [`window`]: pure viewport → visible index range computation
//! - [`ScrollThrottle`]: caps scroll-driven recomputation at 60 per second
//! - [`CatalogView`]: the three combined over one fetched list
//! - [`status_color`]: badge colors per project status

pub mod cache;
pub mod filter;
pub mod status;
pub mod throttle;
pub mod view;
pub mod window;

pub use cache::{CachedProjects, DEFAULT_TTL, Freshness, ProjectCache};
pub use filter::CategoryFilter;
pub use status::{StatusColor, status_color};
pub use throttle::ScrollThrottle;
pub use view::CatalogView;
pub use window::{ItemEstimate, Viewport, WINDOWING_THRESHOLD, WindowedList, visible_range};
