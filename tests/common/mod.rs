// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

#![allow(dead_code)]

use cid::Cid;
use forest_chain_core::blocks::{Block, RawBlock, TipsetKey};
use forest_chain_core::message::{SignedMessage, UnsignedMessage};
use forest_chain_core::utils::cid::CidCborExt as _;
use fvm_shared4::{address::Address, crypto::signature::Signature, econ::TokenAmount};

pub fn cid_for_test(n: u64) -> Cid {
    Cid::from_cbor_blake2b256(&("integration cid", n)).unwrap()
}

/// A message like the ones `message send --value=10` submits.
pub fn send_message(from: u64, to: u64, sequence: u64) -> SignedMessage {
    let message = UnsignedMessage::builder()
        .from(Address::new_id(from))
        .to(Address::new_id(to))
        .sequence(sequence)
        .value(TokenAmount::from_atto(10))
        .gas_price(TokenAmount::from_atto(1))
        .gas_limit(300)
        .build()
        .unwrap();
    SignedMessage::new(message, Signature::new_secp256k1(vec![7; 65]))
}

pub fn block(height: u64, parents: TipsetKey, parent_weight: u64, ticket: u8, nonce: u64) -> Block {
    RawBlock::builder()
        .height(height)
        .parents(parents)
        .parent_weight_num(parent_weight)
        .ticket(vec![ticket].into())
        .nonce(nonce)
        .build()
        .unwrap()
        .into()
}
