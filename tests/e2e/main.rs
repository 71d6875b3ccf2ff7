//! End-to-end tests running the `wv` binary

mod cli_basic;
