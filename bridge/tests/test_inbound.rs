//! Inbound delivery tests: endpoint and router authentication, ceiling,
//! pause and deny-list enforcement on mint, and malformed packets.

mod harness;

use cosmwasm_std::{Addr, Binary, Uint128};
use cw_multi_test::Executor;

use common::transport::Origin;
use harness::*;
use synth_bridge::address_codec::{narrow_address, widen_address};
use synth_bridge::codec::BridgeMessage;
use synth_bridge::msg::{ExecuteMsg, PathReadyResponse, QueryMsg};

fn transfer(from: &str, to: &str, amount: u128) -> Binary {
    Binary::from(
        BridgeMessage {
            sender: widen_address(from).unwrap(),
            receiver: widen_address(to).unwrap(),
            amount: Uint128::new(amount),
            payload: None,
        }
        .encode()
        .unwrap(),
    )
}

fn guid(byte: u8) -> Binary {
    Binary::from(vec![byte; 32])
}

// ============================================================================
// Authentication
// ============================================================================

#[test]
fn test_only_endpoint_can_deliver() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    let res = suite.app.execute_contract(
        Addr::unchecked(MALLORY),
        b.bridge.clone(),
        &ExecuteMsg::OnReceive {
            origin: Origin {
                src_domain: a.domain,
                sender: sender_id(&a.bridge),
                sequence: 1,
            },
            guid: guid(1),
            message: transfer(ALICE, MALLORY, 1_000_000),
            executor: MALLORY.to_string(),
            extra_data: Binary::default(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("only the messaging endpoint"),
        "{}",
        err_str
    );
    assert_eq!(suite.balance(&b, MALLORY), 0);
}

#[test]
fn test_forged_origin_sender_rejected() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    let res = suite.deliver_raw(
        &b,
        Origin {
            src_domain: a.domain,
            sender: sender_id(&Addr::unchecked(MALLORY)),
            sequence: 1,
        },
        &b.bridge,
        guid(1),
        transfer(MALLORY, MALLORY, 1_000_000),
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains(&format!("Unauthorized router for domain {}", DOMAIN_A)),
        "{}",
        err_str
    );
    assert_eq!(suite.ledger(&b).total_supply, Uint128::zero());
}

#[test]
fn test_unregistered_source_domain_rejected() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    let res = suite.deliver_raw(
        &b,
        Origin {
            src_domain: 777,
            sender: sender_id(&a.bridge),
            sequence: 1,
        },
        &b.bridge,
        guid(1),
        transfer(ALICE, BOB, 10),
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("No router registered for domain 777"),
        "{}",
        err_str
    );
}

#[test]
fn test_removed_router_stops_inbound() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    let ready: PathReadyResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &b.bridge,
            &QueryMsg::PathReady {
                src_domain: a.domain,
            },
        )
        .unwrap();
    assert!(ready.ready);

    suite.issue(&a, ALICE, 1000).unwrap();
    suite.send(&a, ALICE, BOB, 400).unwrap();

    suite
        .app
        .execute_contract(
            Addr::unchecked(OWNER),
            b.bridge.clone(),
            &ExecuteMsg::RemoveRouter { domain: a.domain },
            &[],
        )
        .unwrap();

    let ready: PathReadyResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &b.bridge,
            &QueryMsg::PathReady {
                src_domain: a.domain,
            },
        )
        .unwrap();
    assert!(!ready.ready);

    assert!(suite.relay(&a).is_err());
    assert_eq!(suite.balance(&b, BOB), 0);

    // Re-registering lets the pending packet through
    suite.set_router(&b, a.domain, &a.bridge).unwrap();
    suite.relay(&a).unwrap();
    assert_eq!(suite.balance(&b, BOB), 400);
}

// ============================================================================
// Mint Guards
// ============================================================================

#[test]
fn test_inbound_mint_bounded_by_ceiling() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    suite.set_ceiling(&b, 300).unwrap();
    suite.issue(&a, ALICE, 1000).unwrap();
    suite.send(&a, ALICE, BOB, 400).unwrap();

    let err_str = suite
        .relay(&a)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err_str.contains("Supply ceiling reached"), "{}", err_str);
    assert_eq!(suite.ledger(&b).total_supply, Uint128::zero());

    // Raising the ceiling lets the same packet through
    suite.set_ceiling(&b, 1000).unwrap();
    suite.relay(&a).unwrap();
    assert_eq!(suite.balance(&b, BOB), 400);
}

#[test]
fn test_outbound_burn_ignores_ceiling() {
    let mut suite = setup();
    let a = suite.a.clone();

    suite.issue(&a, ALICE, 1000).unwrap();
    suite.set_ceiling(&a, 1001).unwrap();

    // Burning never trips the ceiling, even right at it
    suite.send(&a, ALICE, BOB, 1000).unwrap();
    assert_eq!(suite.ledger(&a).total_supply, Uint128::zero());
}

#[test]
fn test_inbound_blocked_while_paused() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    suite.issue(&a, ALICE, 1000).unwrap();
    suite.send(&a, ALICE, BOB, 400).unwrap();
    suite.pause(&b).unwrap();

    let err_str = suite
        .relay(&a)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err_str.contains("paused"), "{}", err_str);

    suite.unpause(&b).unwrap();
    suite.relay(&a).unwrap();
    assert_eq!(suite.balance(&b, BOB), 400);
}

#[test]
fn test_inbound_to_denied_receiver_fails() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    suite.issue(&a, ALICE, 1000).unwrap();
    suite.send(&a, ALICE, BOB, 400).unwrap();
    suite.deny(&b, wide(BOB)).unwrap();

    let err_str = suite
        .relay(&a)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err_str.contains("deny-listed"), "{}", err_str);

    suite.undeny(&b, wide(BOB)).unwrap();
    suite.relay(&a).unwrap();
    assert_eq!(suite.balance(&b, BOB), 400);
}

#[test]
fn test_inbound_from_denied_remote_sender_fails() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    suite.issue(&a, ALICE, 1000).unwrap();
    suite.send(&a, ALICE, BOB, 400).unwrap();

    // ALICE's identifier as carried in the message
    suite.deny(&b, wide(ALICE)).unwrap();

    let err_str = suite
        .relay(&a)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err_str.contains("deny-listed"), "{}", err_str);
    assert_eq!(suite.balance(&b, BOB), 0);
}

// ============================================================================
// Malformed Packets
// ============================================================================

#[test]
fn test_full_width_receiver_is_minted() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    suite.issue(&a, ALICE, 1000).unwrap();
    // 32 significant bytes: a contract-width account on B
    suite
        .send_with(
            &a,
            ALICE,
            b.domain,
            Binary::from(vec![0xab; 32]),
            100,
            None,
            &fee(DEFAULT_FEE),
        )
        .unwrap();
    suite.relay(&a).unwrap();

    let receiver = narrow_address(&[0xab; 32], BECH32_PREFIX).unwrap();
    assert_eq!(suite.balance(&b, &receiver), 100);
    assert_eq!(suite.ledger(&b).total_supply, Uint128::new(100));
}

#[test]
fn test_malformed_message_rejected() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    let origin = Origin {
        src_domain: a.domain,
        sender: sender_id(&a.bridge),
        sequence: 1,
    };

    let res = suite.deliver_raw(
        &b,
        origin.clone(),
        &b.bridge,
        guid(1),
        Binary::from(vec![1u8, 2, 3]),
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid message"), "{}", err_str);

    // Unknown type tag
    let mut bytes = transfer(ALICE, BOB, 10).to_vec();
    bytes[0] = 9;
    let res = suite.deliver_raw(&b, origin.clone(), &b.bridge, guid(2), Binary::from(bytes));
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid message"), "{}", err_str);

    // Message id of the wrong size
    let res = suite.deliver_raw(
        &b,
        origin,
        &b.bridge,
        Binary::from(vec![7u8; 31]),
        transfer(ALICE, BOB, 10),
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid message"), "{}", err_str);

    assert_eq!(suite.ledger(&b).total_supply, Uint128::zero());
}

#[test]
fn test_authentic_raw_delivery_mints() {
    let mut suite = setup();
    let (a, b) = (suite.a.clone(), suite.b.clone());

    suite
        .deliver_raw(
            &b,
            Origin {
                src_domain: a.domain,
                sender: sender_id(&a.bridge),
                sequence: 42,
            },
            &b.bridge,
            guid(9),
            transfer(ALICE, DAVE, 1234),
        )
        .unwrap();

    assert_eq!(suite.balance(&b, DAVE), 1234);
    assert_eq!(suite.ledger(&b).total_supply, Uint128::new(1234));
}
