//! List members against a running server
//!
//! ```sh
//! cargo run -p purl-client --example list_members
//! ```

use purl_client::ClientConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ClientConfig::new("http://localhost:8080")
        .with_credentials("user", "password")
        .build_client();

    let list = client.list_members().await?;
    println!("{} member(s)", list.members.len());
    for member in list.members {
        println!(
            "#{} {} <{}> - {} stitches, {}",
            member.id, member.name, member.email, member.known_stitches, member.role
        );
    }

    Ok(())
}
