// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::io::Write;
use std::time::Duration;

use forest_chain_core::Config;
use forest_chain_core::message_pool::{Error, MessagePool};
use tokio_util::sync::CancellationToken;

pub mod common;
use crate::common::send_message;

#[test]
fn config_dump_is_valid_toml() {
    let config = Config::default();
    let dumped = toml::to_string(&config).unwrap();
    assert_eq!(toml::from_str::<Config>(&dumped).unwrap(), config);
}

#[tokio::test]
async fn configured_max_wait_applies_to_the_pool() {
    let mut config_file = tempfile::Builder::new().tempfile().unwrap();
    config_file
        .write_all(b"[mpool]\nmax_wait = 1\n")
        .expect("Failed writing configuration!");

    let config = Config::from_file(config_file.path()).unwrap();
    assert_eq!(config.mpool.max_wait, Some(Duration::from_secs(1)));

    let pool = MessagePool::new(config.mpool);
    pool.add(send_message(100, 101, 0));
    assert_eq!(
        pool.wait_for_count(1, &CancellationToken::new())
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        pool.wait_for_count(2, &CancellationToken::new()).await,
        Err(Error::Cancelled)
    );
}
