//! Interactive card-and-payment walkthrough against the sandbox
//!
//! Reads the gateway credentials from `PAYME_TOKEN`, `PAYME_SECRET_KEY`
//! and `PAYME_ACCOUNT_KEY_1`, registers a test card, verifies it with the
//! SMS code typed at the prompt, then creates and pays a receipt.
//!
//! Run with: `cargo run --example workflow`

use payme_client::{PaymeClient, PaymeService};
use rust_decimal::Decimal;
use std::io::{self, Write};

// Sandbox test card
const CARD_NUMBER: &str = "8600069195406311";
const CARD_EXPIRE: &str = "0399";

// 1 000 so'm, in tiyin
const PRICE_TIYIN: i64 = 100_000;

const ORDER_ID: &str = "12345";
const RETURN_URL: &str = "https://yourapp.com/return";

#[tokio::main]
async fn main() -> payme_client::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let client = PaymeClient::from_env()?;
    let service = PaymeService::new(client.clone());

    println!("1. Creating card...");
    let created = match client.create_card(CARD_NUMBER, CARD_EXPIRE, false).await?.into_result() {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Card creation refused: {error}");
            return Ok(());
        }
    };
    let token = created["card"]["token"]
        .as_str()
        .expect("card response carries a token")
        .to_string();

    println!("2. Requesting verification code...");
    let sent = match client.get_card_verify_code(&token).await?.into_result() {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Verify-code request refused: {error}");
            return Ok(());
        }
    };
    let phone = sent["phone"].as_str().unwrap_or("your phone");
    println!("   SMS sent to {phone}");

    print!("Enter the SMS code: ");
    io::stdout().flush().expect("flush stdout");
    let mut code = String::new();
    io::stdin().read_line(&mut code).expect("read stdin");

    println!("3. Verifying card...");
    let verified = match client.verify_card(code.trim(), &token).await?.into_result() {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Verification refused: {error}");
            return Ok(());
        }
    };
    let card_token = verified["card"]["token"]
        .as_str()
        .expect("verified card carries a token")
        .to_string();
    println!("   Card verified.");

    println!("4. Creating and paying a receipt...");
    let paid = service
        .create_and_pay_transaction(&card_token, ORDER_ID, Decimal::from(PRICE_TIYIN), None)
        .await?;
    match paid.into_result() {
        Ok(result) => {
            let amount = result["receipt"]["amount"].as_i64().unwrap_or(0);
            println!("   Paid {:.2} so'm.", amount as f64 / 100.0);
        }
        Err(error) => eprintln!("Transaction refused: {error}"),
    }

    let link = service.create_payment_link(
        Decimal::from(PRICE_TIYIN),
        ORDER_ID,
        RETURN_URL,
        None,
    );
    println!("Checkout link for browser flows: {link}");

    Ok(())
}
