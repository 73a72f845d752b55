#[cfg(test)]
mod tests {
    use anyhow::Result;
    use std::cell::Cell;
    use tracksheet::api::Session;
    use tracksheet::libs::credentials::Credentials;

    /// Mock implementation of the Session trait for testing the token
    /// lifecycle without a network or a terminal.
    struct MockSession {
        token: Option<String>,
        retries: i32,
        login_calls: Cell<i32>,
        failing_logins: i32,
    }

    impl MockSession {
        fn new(failing_logins: i32) -> Self {
            Self {
                token: None,
                retries: 0,
                login_calls: Cell::new(0),
                failing_logins,
            }
        }
    }

    impl Session for MockSession {
        async fn login(&self) -> Result<String> {
            let calls = self.login_calls.get() + 1;
            self.login_calls.set(calls);
            if calls <= self.failing_logins {
                anyhow::bail!("mock login failure");
            }
            Ok("mock_session_12345".to_string())
        }

        fn set_credentials(&mut self, _credentials: &Credentials) {}

        fn token(&self) -> Option<String> {
            self.token.clone()
        }

        fn store_token(&mut self, token: String) {
            self.token = Some(token);
        }

        fn retry(&self) -> i32 {
            self.retries
        }

        fn inc_retry(&mut self) {
            self.retries += 1;
        }
    }

    fn flag_credentials() -> Credentials {
        Credentials {
            username: "calum@example.com".to_string(),
            password: "secret".to_string(),
            interactive: false,
        }
    }

    #[tokio::test]
    async fn test_get_token_returns_login_result() {
        let mut session = MockSession::new(0);
        let mut credentials = flag_credentials();

        let token = session.get_token(&mut credentials).await.unwrap();
        assert_eq!(token, "mock_session_12345");
        assert_eq!(session.login_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_get_token_caches_the_token() {
        let mut session = MockSession::new(0);
        let mut credentials = flag_credentials();

        let first = session.get_token(&mut credentials).await.unwrap();
        let second = session.get_token(&mut credentials).await.unwrap();

        assert_eq!(first, second);
        // The second call must be served from memory.
        assert_eq!(session.login_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_non_interactive_failure_is_immediate() {
        let mut session = MockSession::new(1);
        let mut credentials = flag_credentials();

        let result = session.get_token(&mut credentials).await;
        assert!(result.is_err());
        // No re-prompt loop for flag/environment passwords.
        assert_eq!(session.login_calls.get(), 1);
        assert_eq!(session.retry(), 0);
        assert!(session.token().is_none());
    }

    #[tokio::test]
    async fn test_retry_counter() {
        let mut session = MockSession::new(0);

        assert_eq!(session.retry(), 0);
        session.inc_retry();
        assert_eq!(session.retry(), 1);
        session.inc_retry();
        assert_eq!(session.retry(), 2);
    }

    #[tokio::test]
    async fn test_stored_token_accessors() {
        let mut session = MockSession::new(0);

        assert!(session.token().is_none());
        session.store_token("abc".to_string());
        assert_eq!(session.token().as_deref(), Some("abc"));
    }
}
