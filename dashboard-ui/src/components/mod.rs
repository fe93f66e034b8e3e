//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use chart::{provide_chart_theme, Chart, ChartTheme, Point, Series};
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use stat_card::StatCard;
pub use toast::Toast;
