//! Declaring a schema and validating records against it.
//!
//! Run with: `cargo run --example basic_usage`

use datashape::prelude::*;
use serde_json::json;

fn main() {
    let user = schema![
        string("username").not_null().alphanumeric().min_length(3).max_length(20),
        string("email").not_null().email(),
        string("role").enumerated(["admin", "editor", "viewer"]),
        integer("age").positive(),
        boolean("active").not_null(),
    ];

    let good = json!({
        "username": "jcarlos42",
        "email": "juan@example.com",
        "role": "editor",
        "age": 35,
        "active": true,
        "note": "this undeclared field is dropped",
    });

    // Fast membership check, stops at the first failure per field.
    println!("good record passes: {}", user.test(&good));

    // Full validation returns the normalized record plus every error.
    let (record, errors) = user.validate(&good);
    println!("normalized: {record}");
    println!("errors: {}", errors.len());

    let bad = json!({
        "username": "jc",
        "email": "not-an-email",
        "role": "superuser",
        "age": 0,
        "active": null,
    });

    let (_, errors) = user.validate(&bad);
    println!("\nbad record produced {} errors:", errors.len());
    for message in errors.messages() {
        println!("  - {message}");
    }
}
