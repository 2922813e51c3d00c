pub mod chart;
pub mod html;
pub mod json;
