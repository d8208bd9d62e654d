//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `token_resolution`: Default token and `GITHUB_TOKEN` fallback tests
//! - `loading`: Environment and CLI loading tests
//! - `validation`: Configuration consistency validation tests

mod helpers;
mod loading;
mod token_resolution;
mod validation;
