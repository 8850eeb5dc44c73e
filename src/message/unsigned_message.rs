// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::Message;
use crate::utils::cid::CidCborExt as _;
use cid::Cid;
use derive_builder::Builder;
use fvm_ipld_encoding::RawBytes;
use fvm_ipld_encoding::tuple::*;
use fvm_shared4::{MethodNum, address::Address, econ::TokenAmount};

/// Default Unsigned VM message type which includes all data needed for a state
/// transition
///
/// Usage:
/// ```
/// use forest_chain_core::message::{Message, UnsignedMessage};
/// use fvm_shared4::address::Address;
///
/// let message = UnsignedMessage::builder()
///     .to(Address::new_id(0))
///     .from(Address::new_id(1))
///     .sequence(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(message.sequence(), 2);
/// ```
#[derive(PartialEq, Eq, Clone, Debug, Builder, Serialize_tuple, Deserialize_tuple)]
#[builder(name = "MessageBuilder")]
pub struct UnsignedMessage {
    pub from: Address,
    pub to: Address,
    #[builder(default)]
    pub sequence: u64,
    #[builder(default)]
    pub value: TokenAmount,
    #[builder(default)]
    pub method_num: MethodNum,
    #[builder(default)]
    pub params: RawBytes,
    #[builder(default)]
    pub gas_price: TokenAmount,
    #[builder(default)]
    pub gas_limit: u64,
}

impl UnsignedMessage {
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Content identifier of the unsigned message.
    pub fn cid(&self) -> Cid {
        Cid::from_cbor_blake2b256(self).expect("message serialization is infallible")
    }
}

impl Message for UnsignedMessage {
    fn from(&self) -> Address {
        self.from
    }
    fn to(&self) -> Address {
        self.to
    }
    fn sequence(&self) -> u64 {
        self.sequence
    }
    fn value(&self) -> TokenAmount {
        self.value.clone()
    }
    fn method_num(&self) -> MethodNum {
        self.method_num
    }
    fn params(&self) -> &RawBytes {
        &self.params
    }
    fn gas_price(&self) -> TokenAmount {
        self.gas_price.clone()
    }
    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }
}
