pub mod dashboard;
pub mod heatmap;
pub mod rentals;
pub mod rfm;
