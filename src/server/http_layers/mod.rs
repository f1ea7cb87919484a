mod method_override;
mod requests_logging;

pub use method_override::method_override;
pub use requests_logging::{log_requests, RequestsLoggingLevel};
