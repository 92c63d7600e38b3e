//! The http functions
//!
use log::*;
use reqwest::blocking::Client;
use reqwest::{Method, StatusCode};
use crate::error::{Error, Result};

/// Build the blocking http client that is shared by all requests of a run.
pub fn build_client(
    accept_invalid_certs: bool,
) -> Result<Client>
{
    Client::builder()
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
        .map_err(Error::ClientBuild)
}

/// Perform a bearer authenticated request and return the body of a 200 response.
///
/// The method is checked before anything is sent: only `GET` and `POST` are allowed.
pub fn http_request_body(
    client: &Client,
    url: &str,
    method: &str,
    token: &str,
) -> Result<Vec<u8>>
{
    let method = match method {
        "GET" => Method::GET,
        "POST" => Method::POST,
        other => return Err(Error::InvalidMethod(other.to_string())),
    };

    let response = client
        .request(method.clone(), url)
        .bearer_auth(token)
        .send()
        .map_err(|source| {
            debug!("Non-Ok response: {} {}: {}", method, url, source);
            Error::Transport { url: url.to_string(), source }
        })?;

    if response.status() != StatusCode::OK {
        debug!("Non success response: {} {} = {}", method, url, response.status());
        return Err(Error::UnexpectedStatus { url: url.to_string(), status: response.status().to_string() });
    }
    debug!("Success response: {} {} = {}", method, url, response.status());

    let body = response
        .bytes()
        .map_err(|source| Error::Transport { url: url.to_string(), source })?;
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_invalid_methods_are_rejected() {
        let client = build_client(false).unwrap();
        // the url cannot be reached; the method check must happen before any connection attempt.
        for method in ["PUT", "DELETE", "PATCH", "HEAD", "get", "post", ""] {
            let result = http_request_body(&client, "http://127.0.0.1:1/v3/clusters", method, "token");
            match result {
                Err(Error::InvalidMethod(found)) => assert_eq!(found, method),
                other => panic!("expected InvalidMethod for {:?}, got {:?}", method, other),
            }
        }
    }

    #[test]
    fn unit_empty_url_is_a_transport_error() {
        let client = build_client(false).unwrap();
        let result = http_request_body(&client, "", "POST", "token");
        assert!(matches!(result, Err(Error::Transport { .. })));
    }
}
