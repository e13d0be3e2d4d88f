//! The fixed reply written to every connection.

/// Complete reply, status line through body.
pub const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
Content-Type: text/plain\r\n\
Content-Length: 13\r\n\
\r\n\
Hello, World!";

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "Hello, World!";

    #[test]
    fn content_length_matches_body() {
        assert_eq!(BODY.len(), 13);
        assert!(RESPONSE.ends_with(BODY.as_bytes()));
    }

    #[test]
    fn exact_bytes() {
        let text = std::str::from_utf8(RESPONSE).unwrap();
        let (head, body) = text.split_once("\r\n\r\n").unwrap();
        assert_eq!(
            head.split("\r\n").collect::<Vec<_>>(),
            vec![
                "HTTP/1.1 200 OK",
                "Content-Type: text/plain",
                "Content-Length: 13",
            ]
        );
        assert_eq!(body, "Hello, World!");
    }
}
