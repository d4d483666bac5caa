//! Basic example demonstrating the encode and decode API
//!
//! This example walks through the life of a token:
//! 1. Encode a claims struct into a signed HS256 token
//! 2. Peek at the token without verifying it
//! 3. Decode and verify the token with the shared secret
//! 4. Observe that a tampered token is rejected
//!
//! Run with `RUST_LOG=jwtcodec=debug` to see the library's log output.

use jwtcodec::*;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    iss: String,
    sub: String,
    admin: bool,
}

fn setup_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() -> Result<()> {
    setup_tracing();
    println!("=== jwtcodec - Basic Example ===\n");

    let key = Key::from("your-256-bit-secret-key-here!");

    // Step 1: Issue a token
    println!("Step 1: Encoding token...");
    let claims = Claims {
        iss: "https://example.com".to_string(),
        sub: "user123".to_string(),
        admin: false,
    };
    let token = encode(&claims, &key)?;
    println!("  ✓ Token: {}\n", token);

    // Step 2: Read the token without a key (untrusted!)
    println!("Step 2: Decoding without verification...");
    let peek: TokenData = decode_unverified(&token)?;
    println!("  → Algorithm: {:?}", peek.header.algorithm_str());
    println!("  → Token type: {:?}\n", peek.header.token_type());

    // Step 3: Verify and decode
    println!("Step 3: Decoding with verification...");
    let data: TokenData<Claims> = decode_verified(&token, &key)?;
    println!("  ✓ Signature verified");
    println!("  ✓ Issuer: {}", data.payload.iss);
    println!("  ✓ Subject: {}", data.payload.sub);
    println!("  ✓ Admin: {}\n", data.payload.admin);

    // Step 4: Tampering is detected
    println!("Step 4: Tampering with the payload...");
    let forged_payload = utils::base64url::encode(
        r#"{"iss":"https://example.com","sub":"user123","admin":true}"#,
    );
    let parts: Vec<&str> = token.split('.').collect();
    let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

    match decode_verified::<Claims>(&forged, &key) {
        Err(Error::InvalidSignature) => println!("  ✓ Forged token rejected"),
        other => println!("  ✗ Unexpected result: {:?}", other),
    }

    println!("\n✅ Done!");

    Ok(())
}
