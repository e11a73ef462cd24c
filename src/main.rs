use std::env;

use anyhow::{Context, Result};
use produits_rs::ProduitsClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "produits_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <date> <adresse_mail> [date_livraison]", args[0]);
        eprintln!("  date: order date, DD/MM/YYYY (e.g., 31/03/2025)");
        eprintln!("  adresse_mail: account email registered with the API");
        eprintln!("  date_livraison: optional delivery date, DD/MM/YYYY");
        eprintln!();
        eprintln!("Configuration comes from the environment:");
        eprintln!("  API_KEY, BASE_URL, VERSION, USER_API");
        std::process::exit(1);
    }

    let date = &args[1];
    let adresse_mail = &args[2];
    let date_livraison = args.get(3).map(String::as_str).unwrap_or("");

    let client = ProduitsClient::new().context("Failed to build API client")?;

    println!("Fetching products for {}...", date);
    let response = client
        .get_produits(date, adresse_mail, date_livraison)
        .await
        .context("GET_PRODUITS request failed")?;

    println!(
        "CODE_RETOUR: {}",
        response.code_retour.as_deref().unwrap_or("N/A")
    );

    match &response.produits {
        Some(produits) => match produits.as_array() {
            Some(list) => {
                println!("{} produit(s):", list.len());
                for produit in list {
                    println!("  {}", produit);
                }
            }
            None => println!("PRODUITS: {}", produits),
        },
        None => println!("No PRODUITS in response"),
    }

    if let Some(fournisseurs) = &response.fournisseurs {
        println!("FOURNISSEURS: {}", fournisseurs);
    }
    if let Some(sceau) = &response.sceau {
        println!("Response sceau: {}", sceau);
    }

    Ok(())
}
