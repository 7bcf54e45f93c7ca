//! gradecalc-report: Rendering for grade reports and student rosters.

pub mod html;
pub mod json;
pub mod text;
