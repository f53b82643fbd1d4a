//! The functional core: map model in, placement records out.
pub mod catalog;
pub mod planner;
pub mod showcase;

pub use catalog::{CatalogConfig, Category, PrefabCatalog};
pub use planner::{PlannerConfig, Resolution, Resolver, plan};
pub use showcase::{ShowcaseConfig, ShowcaseError, plan_showcase};
