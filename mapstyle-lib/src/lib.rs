pub mod encode;
pub mod error;
pub mod short_codes;
pub mod types;

pub use encode::{encode, encode_properties, PARAM_PREFIX};
pub use error::{Result, StyleError};
pub use short_codes::{short_code, SETTINGS_CODE, SHORT_CODES};
pub use types::{PropertyMap, StyleConfig};
