// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::blocks::{ChainEpoch, MessageReceipt, RawBlock, TipsetKey};
use crate::message::{SignedMessage, UnsignedMessage};
use crate::utils::cid::CidCborExt as _;
use cid::Cid;
use fvm_ipld_encoding::RawBytes;
use fvm_shared4::{address::Address, crypto::signature::Signature, econ::TokenAmount};

/// A distinct, deterministic CID for every `n`.
pub fn cid_for_test(n: u64) -> Cid {
    Cid::from_cbor_blake2b256(&("test cid", n)).unwrap()
}

/// A signed message whose params are `params`; distinct params give distinct
/// CIDs.
pub fn mock_signed_message(sequence: u64, params: &str) -> SignedMessage {
    let message = UnsignedMessage::builder()
        .from(Address::new_id(1000))
        .to(Address::new_id(1001))
        .sequence(sequence)
        .value(TokenAmount::from_whole(10))
        .method_num(2)
        .params(RawBytes::new(params.as_bytes().to_vec()))
        .gas_price(TokenAmount::from_atto(1))
        .gas_limit(300)
        .build()
        .unwrap();
    SignedMessage::new(message, Signature::new_secp256k1(vec![0; 65]))
}

/// A block at height `42 + height` on top of `parent`, carrying one message
/// with params `msg`.
pub fn mock_block(height: ChainEpoch, parent: Cid, parent_weight: u64, msg: &str) -> RawBlock {
    RawBlock::builder()
        .parents(TipsetKey::from(parent))
        .parent_weight_num(parent_weight)
        .parent_weight_denom(1)
        .height(42 + height)
        .nonce(7)
        .messages(vec![mock_signed_message(0, msg)])
        .state_root(cid_for_test(u64::MAX))
        .message_receipts(vec![MessageReceipt {
            exit_code: 1,
            return_values: vec![RawBytes::new(vec![1, 2])],
            gas_used: 0,
        }])
        .build()
        .unwrap()
}
