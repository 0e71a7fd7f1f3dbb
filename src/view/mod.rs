pub mod scorecard;
pub mod text;
