/// Core export logic - asset views, finding filters, and CSV shaping
pub mod domain;
pub mod services;
