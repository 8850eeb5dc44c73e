// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod signed_message;
pub mod unsigned_message;

use fvm_ipld_encoding::RawBytes;
use fvm_shared4::{MethodNum, address::Address, econ::TokenAmount};
pub use signed_message::SignedMessage;
pub use unsigned_message::{MessageBuilder, UnsignedMessage};

/// Message interface to interact with Signed and unsigned messages in a generic
/// context.
pub trait Message {
    /// Returns the from address of the message.
    fn from(&self) -> Address;
    /// Returns the destination address of the message.
    fn to(&self) -> Address;
    /// Returns the message sequence or nonce.
    fn sequence(&self) -> u64;
    /// Returns the amount sent in message.
    fn value(&self) -> TokenAmount;
    /// Returns the method number to be called.
    fn method_num(&self) -> MethodNum;
    /// Returns the encoded parameters for the method call.
    fn params(&self) -> &RawBytes;
    /// Returns the gas price offered by the sender.
    fn gas_price(&self) -> TokenAmount;
    /// Returns the gas limit for the message.
    fn gas_limit(&self) -> u64;
}
