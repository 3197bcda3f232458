pub mod api_response;
pub mod diagnostics;
pub mod typing_result;
