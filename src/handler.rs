use std::convert::Infallible;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

use crate::response;

/// Answer every request with the fixed response.
///
/// Method, path, headers and body are deliberately ignored. Generic over
/// the body type because the body is never read.
pub async fn handle_request<B>(_req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(response::build_hello_response())
}
