//! Typed shape of the records returned by the analysis service.
//!
//! Every nested field is optional. A backend that returns a partial record
//! must never make a consumer fail, so nothing here has a required field
//! except `analysis_id`.

mod analysis_result;
mod analyze;

pub mod prelude {
    pub use super::analysis_result::{
        AnalysisResult, AnalysisResultBuilder, Classification, Entities, EntitiesBuilder,
        SafetyFlags, SafetyFlagsBuilder,
    };
    pub use super::analyze::{AnalyzeRequest, AnalyzeResponse};
}
