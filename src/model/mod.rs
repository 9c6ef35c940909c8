mod encode;
mod field;
mod form_input;
mod response;

pub use encode::{
    BREAST, CategoryTable, INVASIVE_NODES, PredictionRequest, TUMOR_SIZE, YES_NO, encode,
    encode_category, fallback_category,
};
pub use field::{ChoiceOption, FIELD_COUNT, FieldName};
pub use form_input::FormInput;
pub use response::{
    Classification, DecodeError, PredictionResponse, PredictionResult, format_probability,
};
