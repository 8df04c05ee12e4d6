use cakemail_client::CakeMailClient;
use wiremock::{Match, Request};

pub const TEST_API_KEY: &str = "test-api-key";

/// Set up a test client pointed at the mock server.
#[allow(dead_code)]
pub fn setup_test_client(server_url: &str) -> CakeMailClient {
    CakeMailClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(server_url)
        .build()
        .expect("Failed to build CakeMailClient")
}

/// Matches a form-encoded body against an exact, ordered list of pairs.
pub struct FormBody(Vec<(String, String)>);

impl Match for FormBody {
    fn matches(&self, request: &Request) -> bool {
        let received: Vec<(String, String)> = url::form_urlencoded::parse(&request.body)
            .into_owned()
            .collect();
        received == self.0
    }
}

#[allow(dead_code)]
pub fn form_body(pairs: &[(&str, &str)]) -> FormBody {
    FormBody(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

/// Decodes the form body of a recorded request.
#[allow(dead_code)]
pub fn form_pairs(request: &Request) -> Vec<(String, String)> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}
