pub mod chart_card;
pub mod header_bar;
pub mod line_chart;
pub mod mode_tabs;
pub mod progress_ring;
pub mod stats_strip;
pub mod summary_cards;

pub use chart_card::ChartCard;
pub use header_bar::{HeaderAction, HeaderBar};
pub use line_chart::{ChartOptions, LineChart};
pub use mode_tabs::ModeTabs;
pub use progress_ring::ProgressRing;
pub use stats_strip::StatsStrip;
pub use summary_cards::SummaryCards;
