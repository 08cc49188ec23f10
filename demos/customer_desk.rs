//! End-to-end walkthrough: create a customer through the form controller,
//! browse and filter the list, edit the record, then delete it.
//!
//! Lookups go to the real endpoints from the default configuration; when
//! they are unreachable the failures are logged and swallowed, exactly as
//! in an interactive session.
//!
//! ```sh
//! cargo run --example customer_desk
//! ```

use clientele::prelude::*;
use tracing_subscriber::EnvFilter;

struct AutoConfirm;

impl ConfirmationPrompt for AutoConfirm {
    fn confirm_delete(&self, customer: &Customer) -> bool {
        tracing::info!(name = %customer.full_name, "confirming delete");
        true
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = AppConfig::default();
    config.storage.path = std::env::temp_dir().join("clientele-demo.json");

    let slot = Arc::new(FileSlot::new(&config.storage.path));
    let store = Arc::new(CustomerStore::open(slot));
    let lookup: Arc<dyn LookupService> = Arc::new(HttpLookupClient::new(&config.lookup));

    // --- Create ---------------------------------------------------------
    let mut form = FormController::start(store.clone(), lookup.clone());

    if let Some(probe) = form.pan_changed("ABCDE1234F") {
        form.verify_pan(probe).await;
    }
    if form.draft().full_name.is_empty() {
        form.set_full_name("Asha Rao");
    }
    form.set_email("asha@example.com");
    form.set_mobile("9876543210");

    let key = form.draft().addresses[0].key();
    form.set_address_line1(key, "12 MG Road")?;
    if let Some(probe) = form.postcode_changed(key, "560001")? {
        form.lookup_postcode(probe).await;
    }
    let needs_manual_city = form.draft().address(key).is_none_or(|a| a.city.is_empty());
    if needs_manual_city {
        form.set_city(key, "Bangalore")?;
        form.set_state(key, "Karnataka")?;
    }

    let customer = form.submit()?;
    tracing::info!(id = %customer.id, name = %customer.full_name, "customer created");

    // --- Browse ---------------------------------------------------------
    let list = ListController::new(store.clone());
    match list.view("rao") {
        ListOutcome::Customers(rows) => {
            for row in &rows {
                tracing::info!(id = %row.id, name = %row.full_name, email = %row.email, "match");
            }
        }
        ListOutcome::RedirectToForm => tracing::info!("no records, redirecting to form"),
    }

    // --- Edit -----------------------------------------------------------
    let mut form = FormController::edit(store.clone(), lookup, customer.id)?;
    form.set_mobile("9000000001");
    let updated = form.submit()?;
    tracing::info!(id = %updated.id, mobile = %updated.mobile, "customer updated");

    // --- Delete ---------------------------------------------------------
    let outcome = list.request_delete(updated.id, &AutoConfirm)?;
    tracing::info!(?outcome, remaining = store.len(), "delete finished");

    std::fs::remove_file(&config.storage.path).ok();
    Ok(())
}
