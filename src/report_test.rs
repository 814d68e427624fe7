/// Tests for the report module
///
/// Rendering goes into a Vec<u8> with colors disabled so the assertions
/// see exactly the text a color-blind sink would receive. A second set of
/// checks renders with colors on and only verifies escapes are present.

use crate::report::*;
use crate::types::TransactionBlockResponse;
use serde_json::json;

fn parse(value: serde_json::Value) -> TransactionBlockResponse {
    serde_json::from_value(value).unwrap()
}

fn render_plain(res: &TransactionBlockResponse) -> String {
    let mut out = ReportWriter::new(Vec::new(), false);
    render(res, &mut out).unwrap();
    String::from_utf8(out.into_inner()).unwrap()
}

/// The worked example from the project notes: success, 100/50/20 gas, one
/// created sword object, one USDC debit
fn sample_response() -> TransactionBlockResponse {
    let addr = "0xabc1230000000000000000000000000000000000000000000000000000ef01";
    parse(json!({
        "digest": "9WzSXdKh2ZkQbX9opDLg4T1CkDEPZNCZL1f6wzTMCzvt",
        "effects": {
            "status": { "status": "success" },
            "gasUsed": {
                "computationCost": "100",
                "storageCost": "50",
                "storageRebate": "20"
            },
            "created": [
                {
                    "reference": { "objectId": "0x51f1" },
                    "owner": { "AddressOwner": addr }
                }
            ]
        },
        "objectChanges": [
            { "type": "published", "packageId": "0xcbbf" },
            {
                "type": "created",
                "objectId": "0x51f1",
                "objectType": "pkg::mod::Sword"
            }
        ],
        "balanceChanges": [
            {
                "owner": { "AddressOwner": addr },
                "coinType": "pkg::usdc::USDC",
                "amount": "-1000000"
            }
        ]
    }))
}

#[test]
fn end_to_end_report_contains_every_section() {
    let text = render_plain(&sample_response());

    assert!(text.contains("Transaction Result"));
    assert!(text.contains("Status: success"));

    assert!(text.contains("Gas Usage:"));
    assert!(text.contains("  Computation Cost: 100 MIST"));
    assert!(text.contains("  Storage Cost: 50 MIST"));
    assert!(text.contains("  Storage Rebate: 20 MIST"));

    assert!(text.contains("Created Objects:"));
    assert!(text.contains("  ID: 0x51f1"));
    assert!(text.contains("  Type: pkg::mod::Sword"));
    // Owner in the created section is the full address
    assert!(text.contains(
        "  Owner: 0xabc1230000000000000000000000000000000000000000000000000000ef01"
    ));

    assert!(text.contains("Balance Changes:"));
    assert!(text.contains("-1000000 USDC"));
    // Owner in the balance section is shortened
    assert!(text.contains("(0xabc1...ef01)"));
    assert!(!text.contains(
        "(0xabc1230000000000000000000000000000000000000000000000000000ef01)"
    ));
}

#[test]
fn sections_render_in_fixed_order() {
    let text = render_plain(&sample_response());
    let status = text.find("Status:").unwrap();
    let gas = text.find("Gas Usage:").unwrap();
    let created = text.find("Created Objects:").unwrap();
    let balance = text.find("Balance Changes:").unwrap();
    assert!(status < gas && gas < created && created < balance);
}

#[test]
fn render_is_idempotent() {
    let res = sample_response();
    assert_eq!(render_plain(&res), render_plain(&res));
}

#[test]
fn empty_lists_omit_their_sections() {
    let res = parse(json!({
        "digest": "D1",
        "effects": {
            "status": { "status": "success" },
            "gasUsed": {
                "computationCost": "7",
                "storageCost": "8",
                "storageRebate": "9"
            },
            "created": []
        },
        "objectChanges": [],
        "balanceChanges": []
    }));
    let text = render_plain(&res);

    assert!(text.contains("Status: success"));
    assert!(text.contains("Gas Usage:"));
    assert!(!text.contains("Created Objects:"));
    assert!(!text.contains("Balance Changes:"));
}

#[test]
fn missing_fields_omit_their_sections() {
    let res = parse(json!({
        "digest": "D2",
        "effects": { "status": { "status": "success" } }
    }));
    let text = render_plain(&res);

    assert!(text.contains("Status: success"));
    assert!(!text.contains("Gas Usage:"));
    assert!(!text.contains("Created Objects:"));
    assert!(!text.contains("Balance Changes:"));
}

#[test]
fn bare_response_still_renders_a_status_line() {
    // No effects at all: the report must not crash and still says something
    let res = parse(json!({ "digest": "D3" }));
    let text = render_plain(&res);
    assert!(text.contains("Status: unknown"));
}

#[test]
fn failure_status_shows_raw_status_and_reason() {
    let res = parse(json!({
        "digest": "D4",
        "effects": {
            "status": {
                "status": "failure",
                "error": "MoveAbort(pkg::mod, 7) in command 0"
            }
        }
    }));
    let text = render_plain(&res);
    assert!(text.contains("Status: failure"));
    assert!(text.contains("Error: MoveAbort(pkg::mod, 7) in command 0"));
}

#[test]
fn created_object_without_matching_change_shows_unknown_type() {
    let res = parse(json!({
        "digest": "D5",
        "effects": {
            "status": { "status": "success" },
            "created": [
                {
                    "reference": { "objectId": "0xfeed" },
                    "owner": { "ObjectOwner": "0xparent" }
                }
            ]
        },
        "objectChanges": [
            { "type": "mutated", "objectId": "0xother", "objectType": "a::b::C" }
        ]
    }));
    let text = render_plain(&res);
    assert!(text.contains("  ID: 0xfeed"));
    assert!(text.contains("  Type: Unknown"));
    // Object-owned objects display the owning object's id
    assert!(text.contains("  Owner: 0xparent"));
}

#[test]
fn object_type_lookup_takes_first_match() {
    let res = parse(json!({
        "digest": "D6",
        "effects": {
            "status": { "status": "success" },
            "created": [
                {
                    "reference": { "objectId": "0x1" },
                    "owner": "Immutable"
                }
            ]
        },
        "objectChanges": [
            { "type": "created", "objectId": "0x1", "objectType": "a::b::First" },
            { "type": "mutated", "objectId": "0x1", "objectType": "a::b::Second" }
        ]
    }));
    let text = render_plain(&res);
    assert!(text.contains("  Type: a::b::First"));
    assert!(!text.contains("a::b::Second"));
    // Immutable owners have no accountable address
    assert!(text.contains("  Owner: Unknown"));
}

#[test]
fn shared_owner_balance_line_shows_unknown_unshortened() {
    let res = parse(json!({
        "digest": "D7",
        "balanceChanges": [
            {
                "owner": { "Shared": { "initial_shared_version": 3 } },
                "coinType": "0x2::sui::SUI",
                "amount": "42"
            }
        ]
    }));
    let text = render_plain(&res);
    assert!(text.contains("42 SUI (Unknown)"));
}

#[test]
fn balance_lines_keep_input_order_and_huge_amounts() {
    let res = parse(json!({
        "digest": "D8",
        "balanceChanges": [
            {
                "owner": { "AddressOwner": "0x111111111111111111111111111111111111" },
                "coinType": "0x2::sui::SUI",
                "amount": "-18446744073709551616"
            },
            {
                "owner": { "AddressOwner": "0x222222222222222222222222222222222222" },
                "coinType": "0xa1ec::usdc::USDC",
                "amount": "5"
            }
        ]
    }));
    let text = render_plain(&res);
    let first = text.find("-18446744073709551616 SUI").unwrap();
    let second = text.find("5 USDC").unwrap();
    assert!(first < second);
}

#[test]
fn plain_mode_emits_no_ansi_escapes() {
    let text = render_plain(&sample_response());
    assert!(!text.contains('\x1b'));
}

#[test]
fn color_mode_emits_and_resets_ansi_escapes() {
    let mut out = ReportWriter::new(Vec::new(), true);
    render(&sample_response(), &mut out).unwrap();
    let text = String::from_utf8(out.into_inner()).unwrap();

    assert!(text.contains("\x1b[32msuccess\x1b[0m"));
    assert!(text.contains("\x1b[31m-1000000 USDC\x1b[0m"));
    // Stripping every escape yields the plain rendering
    let stripped = strip_ansi(&text);
    assert_eq!(stripped, render_plain(&sample_response()));
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for d in chars.by_ref() {
                if d.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn lookup_object_type_scans_linearly() {
    let changes: Vec<crate::types::ObjectChange> = serde_json::from_value(json!([
        { "type": "published" },
        { "type": "created", "objectId": "0xa", "objectType": "x::y::A" },
        { "type": "created", "objectId": "0xb", "objectType": "x::y::B" }
    ]))
    .unwrap();

    assert_eq!(lookup_object_type(&changes, "0xb"), "x::y::B");
    assert_eq!(lookup_object_type(&changes, "0xc"), "Unknown");
    assert_eq!(lookup_object_type(&[], "0xa"), "Unknown");
}
