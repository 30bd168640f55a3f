/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// HTTP request wrapper
pub mod http;
/// Request models for API calls
pub mod requests;
/// Key extraction from response bodies
pub mod responses;
/// Retry configuration for the instrument bootstrap
pub mod retry;
/// Rounding and naming helpers
pub mod utils;
