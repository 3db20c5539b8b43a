//! Map curl transport errors onto probe miss kinds for logging.

use super::ProbeMiss;

/// Classify a curl error as a miss. Timeouts and connection-level failures
/// get their own kinds so logs distinguish "host unreachable" from "404".
pub fn classify_curl_error(e: &curl::Error) -> ProbeMiss {
    if e.is_operation_timedout() {
        return ProbeMiss::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ProbeMiss::Connection(e.to_string());
    }
    ProbeMiss::Other(e.to_string())
}
