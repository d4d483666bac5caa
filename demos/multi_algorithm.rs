//! Multi-algorithm example demonstrating HS256, HS384 and HS512
//!
//! This example signs the same claims with every supported algorithm and
//! shows how an algorithm policy restricts which algorithms a decoder
//! accepts for a given key.

use jwtcodec::*;
use serde_json::{json, Value};
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

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
    println!("=== jwtcodec Multi-Algorithm Example ===\n");

    test_hmac()?;
    test_algorithm_policy()?;
    test_rejected_algorithms();

    println!("\n✅ All algorithms tested successfully!");

    Ok(())
}

fn test_hmac() -> Result<()> {
    println!("--- Testing HMAC Algorithms ---");

    let key = Key::from("your-secret-key");
    let claims = json!({"sub": "user123", "scope": ["read", "write"]});

    for alg in ["HS256", "HS384", "HS512"] {
        let token = encode_with_algorithm(&claims, &key, alg)?;
        let data: TokenData = decode_verified(&token, &key)?;

        let signature_len = token.rsplit('.').next().map(str::len).unwrap_or(0);
        println!(
            "  ✓ {} verified (signature: {} chars, sub: {})",
            alg, signature_len, data.payload["sub"]
        );
    }

    println!();
    Ok(())
}

fn test_algorithm_policy() -> Result<()> {
    println!("--- Testing Algorithm Policy ---");

    let key = Key::from("your-secret-key");
    let decoder = Decoder::new()
        .verify_with(key.clone())
        .allow_algorithms(AlgorithmPolicy::hs512_only());

    let strong = Encoder::new(key.clone())
        .algorithm(Algorithm::HS512)
        .key_id("key-2024")
        .encode(&json!({"sub": "user123"}))?;
    let data = decoder.decode::<Value>(&strong)?;
    println!("  ✓ HS512 accepted (kid: {:?})", data.header.key_id());

    let weak = Encoder::new(key).encode(&json!({"sub": "user123"}))?;
    match decoder.decode::<Value>(&weak) {
        Err(err @ Error::AlgorithmNotAllowed { .. }) => println!("  ✓ HS256 rejected: {}", err),
        other => println!("  ✗ Unexpected result: {:?}", other),
    }

    println!();
    Ok(())
}

fn test_rejected_algorithms() {
    println!("--- Testing Unsupported Algorithms ---");

    let key = Key::from("your-secret-key");
    for alg in ["none", "RS256", "ES256", "hs256"] {
        match encode_with_algorithm(&json!({"sub": "user123"}), &key, alg) {
            Err(err) => println!("  ✓ {} rejected: {}", alg, err),
            Ok(_) => println!("  ✗ {} unexpectedly accepted", alg),
        }
    }
}
