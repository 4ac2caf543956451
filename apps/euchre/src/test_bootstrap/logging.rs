#![cfg(test)]

//! Unit-test logging hook.
//!
//! Same subscriber and level precedence as the integration tests, so
//! `TEST_LOG=debug cargo test` behaves identically for both.

pub fn init() {
    euchre_test_support::logging::init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_init_keeps_the_first_subscriber() {
        super::init();
        super::init();
        tracing::warn!("still logging after repeated init");
    }
}
