use std::time::Duration;

use glowly_catalog::Catalog;
use glowly_core::{format_price, format_rupiah, AppConfig};
use glowly_store::{CheckoutSummary, Session, ToastQueue};

pub(crate) async fn run_checkout(catalog: &Catalog, config: &AppConfig, ids: &[u64], quantity: u32) {
    let toasts = ToastQueue::new(
        Duration::from_millis(config.toast_ttl_ms),
        config.toast_capacity,
    );
    let mut session = Session::new(toasts);

    for &id in ids {
        match catalog.get_by_id(id).await {
            Some(product) => {
                session.add_to_cart(product.summary(), quantity);
            }
            None => {
                tracing::warn!(product_id = id, "product not found, skipping");
                println!("skipping product {id}: not found");
            }
        }
    }

    for line in session.cart().items() {
        println!(
            "{:>3} x {:<36} {:>14}",
            line.quantity,
            line.title,
            format_price(line.line_total())
        );
    }

    if let Some(summary) = session.checkout() {
        print_summary(&summary);
    }

    for toast in session.toasts().toasts() {
        match toast.subtext {
            Some(subtext) => println!("» {} ({subtext})", toast.message),
            None => println!("» {}", toast.message),
        }
    }
}

fn print_summary(summary: &CheckoutSummary) {
    println!("items:     {}", summary.item_count);
    println!("subtotal:  {}", format_rupiah(summary.subtotal));
    if summary.shipping == 0 {
        println!("shipping:  free");
    } else {
        println!("shipping:  {}", format_rupiah(summary.shipping));
    }
    println!("total:     {}", format_rupiah(summary.grand_total));
    if let Some(remaining) = summary.remaining_for_free_shipping {
        println!(
            "add {} more for free shipping",
            format_rupiah(remaining)
        );
    }
}
