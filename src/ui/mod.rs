pub mod dialogs;
pub mod roadmap_chart;
pub mod theme;
pub mod toolbar;
pub mod workload_hud;
