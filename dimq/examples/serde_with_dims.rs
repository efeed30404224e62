//! Serialize quantities with and without their exponents.
//!
//! Run with `cargo run --example serde_with_dims --features serde`.

use dimq::{Meters, NewtonsPerMeter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Spring {
    #[serde(with = "dimq::serde_with_dims")]
    stiffness: NewtonsPerMeter,
    rest_length: Meters,
}

fn main() -> anyhow::Result<()> {
    let spring = Spring {
        stiffness: NewtonsPerMeter::new(250.0),
        rest_length: Meters::new(0.3),
    };

    let json = serde_json::to_string_pretty(&spring)?;
    println!("{json}");

    let back: Spring = serde_json::from_str(&json)?;
    assert_eq!(back.stiffness, spring.stiffness);

    // A length stored where a stiffness is expected is rejected.
    let wrong = r#"{"stiffness": {"value": 1.0, "exponents": [0, 0, 1, 0, 0, 0, 0, 0]}, "rest_length": 0.3}"#;
    match serde_json::from_str::<Spring>(wrong) {
        Ok(_) => anyhow::bail!("mismatched exponents were accepted"),
        Err(err) => println!("rejected: {err}"),
    }

    Ok(())
}
