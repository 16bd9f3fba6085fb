use facture::{CustomerRecord, InvoiceError, InvoiceRenderer, OrderRecord, RendererConfig, Theme};
use std::env;
use std::fs;

/// A simple CLI to render one invoice PDF from order and customer JSON records.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), InvoiceError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Render an invoice PDF from order and customer JSON records.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/order.json> <path/to/customer.json> [output-dir]",
            args[0]
        );
        std::process::exit(1);
    }

    let order: OrderRecord = serde_json::from_str(&fs::read_to_string(&args[1])?)?;
    let customer: CustomerRecord = serde_json::from_str(&fs::read_to_string(&args[2])?)?;

    let mut config = RendererConfig::default();
    if let Some(dir) = args.get(3) {
        config.output_dir = dir.into();
    }

    let renderer = InvoiceRenderer::new(Theme::default(), config)?;
    let reference = renderer.render(&order, &customer).await?;
    println!("Invoice stored at {}", reference);
    Ok(())
}
