//! Mock implementation of the ParseraApi trait.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use parsera_client::{ApiResponse, ParseraApi};
use parsera_core::{ParseraResult, PreparedRequest};

// Generate the mock implementation for ParseraApi
mock! {
    pub ParseraApi {}

    #[async_trait]
    impl ParseraApi for ParseraApi {
        async fn execute(&self, request: &PreparedRequest) -> ParseraResult<ApiResponse>;
        async fn test_credentials(&self) -> ParseraResult<()>;
    }
}

/// Creates a mock that answers every request with `200` and the given body.
pub fn create_mock_parsera_api(body: Value) -> MockParseraApi {
    let mut mock = MockParseraApi::new();

    mock.expect_execute().returning(move |_| {
        Ok(ApiResponse {
            status: 200,
            body: body.clone(),
        })
    });

    mock.expect_test_credentials().returning(|| Ok(()));

    mock
}
