//! Transport Adapter
//!
//! Everything the bridge needs from the messaging endpoint: router and gas
//! lookups, option encoding, fee quotes, the messages dispatched to the
//! endpoint and the receipt it hands back.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Coin, CosmosMsg, QuerierWrapper, Reply, StdResult,
    Storage, Uint128, WasmMsg,
};
use cw_utils::parse_reply_execute_data;

use common::options::Options;
use common::transport::{
    EndpointExecuteMsg, EndpointQueryMsg, MessagingFee, MessagingReceipt, SecondaryTokenResponse,
};

use crate::codec::BridgeMessage;
use crate::error::ContractError;
use crate::state::{DEFAULT_RECEIVE_GAS, GAS_LIMITS, ROUTERS};

// ============================================================================
// Registries
// ============================================================================

/// Trusted remote bridge for `domain`.
pub fn router(storage: &dyn Storage, domain: u32) -> Result<[u8; 32], ContractError> {
    ROUTERS
        .may_load(storage, domain)?
        .ok_or(ContractError::InvalidRouter { domain })
}

/// Destination receive gas for (domain, message type), or the default.
pub fn gas_limit(storage: &dyn Storage, domain: u32, msg_type: u8) -> StdResult<u128> {
    Ok(GAS_LIMITS
        .may_load(storage, (domain, msg_type))?
        .unwrap_or(DEFAULT_RECEIVE_GAS))
}

// ============================================================================
// Outbound Packet
// ============================================================================

/// A fully built outbound packet, ready to quote or dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundPacket {
    pub dst_domain: u32,
    pub router: [u8; 32],
    pub message: BridgeMessage,
    pub encoded: Vec<u8>,
    pub options: Vec<u8>,
}

impl OutboundPacket {
    /// Resolve the router, encode the message and attach executor options.
    pub fn build(
        storage: &dyn Storage,
        dst_domain: u32,
        message: BridgeMessage,
        native_drop: Option<Uint128>,
    ) -> Result<Self, ContractError> {
        let router = router(storage, dst_domain)?;
        let encoded = message.encode()?;

        let mut options =
            Options::new().add_receive_gas(gas_limit(storage, dst_domain, message.msg_type())?);
        if let Some(amount) = native_drop.filter(|a| !a.is_zero()) {
            options = options.add_native_drop(amount.u128(), message.receiver);
        }

        Ok(OutboundPacket {
            dst_domain,
            router,
            message,
            encoded,
            options: options.encode(),
        })
    }

    pub fn quote(
        &self,
        querier: &QuerierWrapper,
        endpoint: &Addr,
        sender: &Addr,
        pay_in_secondary: bool,
    ) -> StdResult<MessagingFee> {
        querier.query_wasm_smart(
            endpoint,
            &EndpointQueryMsg::Quote {
                sender: sender.to_string(),
                dst_domain: self.dst_domain,
                receiver: Binary::from(self.router.to_vec()),
                message: Binary::from(self.encoded.clone()),
                options: Binary::from(self.options.clone()),
                pay_in_secondary,
            },
        )
    }

    pub fn send_msg(
        &self,
        endpoint: &Addr,
        refund_address: &Addr,
        pay_in_secondary: bool,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: endpoint.to_string(),
            msg: to_json_binary(&EndpointExecuteMsg::Send {
                dst_domain: self.dst_domain,
                receiver: Binary::from(self.router.to_vec()),
                message: Binary::from(self.encoded.clone()),
                options: Binary::from(self.options.clone()),
                refund_address: refund_address.to_string(),
                pay_in_secondary,
            })?,
            funds,
        }))
    }
}

/// Receipt carried in the data of the endpoint's `Send` response.
pub fn parse_send_reply(reply: Reply) -> Result<MessagingReceipt, ContractError> {
    let data = parse_reply_execute_data(reply)?
        .data
        .ok_or(ContractError::MissingReceipt)?;
    Ok(from_json(&data)?)
}

// ============================================================================
// Endpoint Calls
// ============================================================================

pub fn secondary_token(querier: &QuerierWrapper, endpoint: &Addr) -> StdResult<Option<Addr>> {
    let response: SecondaryTokenResponse =
        querier.query_wasm_smart(endpoint, &EndpointQueryMsg::SecondaryToken {})?;
    Ok(response.token)
}

pub fn compose_msg(
    endpoint: &Addr,
    to: &Addr,
    guid: Binary,
    message: Vec<u8>,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: endpoint.to_string(),
        msg: to_json_binary(&EndpointExecuteMsg::SendCompose {
            to: to.to_string(),
            guid,
            index: 0,
            message: Binary::from(message),
        })?,
        funds: vec![],
    }))
}

pub fn set_delegate_msg(endpoint: &Addr, delegate: &Addr) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: endpoint.to_string(),
        msg: to_json_binary(&EndpointExecuteMsg::SetDelegate {
            delegate: delegate.to_string(),
        })?,
        funds: vec![],
    }))
}
