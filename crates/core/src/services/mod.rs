pub mod completeness_service;
pub mod label_service;
pub mod magnitude_service;
pub mod range_service;
