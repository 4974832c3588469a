use std::io::{self, Write};

use msgcheck::client::ApiClient;

const DEFAULT_SERVER_URL: &str = "http://server:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let server_url =
        std::env::var("MSGCHECK_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
    let client = ApiClient::new(server_url);

    loop {
        println!("\nMenu:");
        println!("1. Send 'HELLO CS 616'");
        println!("2. Send 'How are you?'");
        println!("3. Send 'What's up?'");
        println!("4. Send custom message");
        println!("9. Exit");

        let choice = prompt("Enter your choice: ")?;

        match choice.as_str() {
            "1" => send_and_print(&client, "HELLO CS 616").await,
            "2" => send_and_print(&client, "How are you?").await,
            "3" => send_and_print(&client, "What's up?").await,
            "4" => {
                let custom = prompt("Enter your custom message: ")?;
                send_and_print(&client, &custom).await;
            }
            "9" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

async fn send_and_print(client: &ApiClient, text: &str) {
    match client.send_message(text).await {
        Ok(reply) => println!("Sent: {} - Received: {}", text, reply.response),
        Err(e) => tracing::error!("{e}"),
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
