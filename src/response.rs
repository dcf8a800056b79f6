use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Body returned for every request.
const HELLO_BODY: &[u8] = b"Hello World";

/// Build the fixed `200 Hello World` response.
///
/// No headers are set here; the HTTP layer adds `Content-Length` and
/// `Date` on its own.
pub fn build_hello_response() -> Response<Full<Bytes>> {
    Response::new(Full::new(Bytes::from_static(HELLO_BODY)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn status_is_200_with_exact_body() {
        let response = build_hello_response();
        assert_eq!(response.status(), 200);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Hello World");
    }

    #[test]
    fn no_application_headers_are_set() {
        let response = build_hello_response();
        assert!(response.headers().is_empty());
    }
}
