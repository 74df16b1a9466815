//! Handlers for the `cart` subcommands.

use std::io::IsTerminal;
use std::sync::Arc;

use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::debug;

use super::command::{AddArgs, CartCommand, ProductArg, QtyArgs};
use super::render::TerminalCartRenderer;
use super::{listing, output, paths};
use crate::adapter::outbound::storage::FileStorage;
use crate::application::{CartStore, QuantityChange};
use crate::domain::ProductId;
use crate::error::{Error, Result};
use crate::infrastructure::config::Config;

/// Open the persisted cart with a terminal renderer attached.
pub fn open_store(config: &Config) -> (CartStore, Arc<TerminalCartRenderer>) {
    let path = paths::storage_path(&config.storage);
    debug!(path = %path.display(), "Opening cart storage");

    let renderer = Arc::new(TerminalCartRenderer::new());
    let store = CartStore::open(Arc::new(FileStorage::new(path)), renderer.clone());
    (store, renderer)
}

/// Execute a cart subcommand and print the resulting cart.
pub async fn execute(command: CartCommand, config: &Config) -> Result<()> {
    let (mut store, renderer) = open_store(config);

    match command {
        CartCommand::Show => {}
        CartCommand::Add(args) => add(&mut store, config, args).await?,
        CartCommand::Remove(args) => remove(&mut store, args),
        CartCommand::Qty(args) => change_quantity(&mut store, &args)?,
        CartCommand::Clear => {
            store.clear();
            output::success("Cart cleared");
        }
    }

    renderer.flush();
    Ok(())
}

async fn add(store: &mut CartStore, config: &Config, args: AddArgs) -> Result<()> {
    let id = ProductId::new(args.id);
    let listing = listing::product_listing(config);

    let Some(details) = listing.item_details(&id).await else {
        return Err(Error::NotFound(format!("product '{id}'")));
    };

    if store.add_details(&details, args.quantity) {
        output::success(&format!("Added {} × {}", args.quantity, details.name()));
    } else {
        output::warning(&format!("Could not add {}", details.name()));
    }
    Ok(())
}

fn remove(store: &mut CartStore, args: ProductArg) {
    let id = ProductId::new(args.id);
    match store.remove_item(&id) {
        Some(item) => output::success(&format!("Removed {}", item.name)),
        None => output::warning(&format!("{id} is not in the cart")),
    }
}

fn change_quantity(store: &mut CartStore, args: &QtyArgs) -> Result<()> {
    let index = usize::try_from(args.position.saturating_sub(1)).unwrap_or(usize::MAX);

    match store.change_quantity(index, args.delta) {
        QuantityChange::Applied {
            product_id,
            quantity,
        } => {
            output::success(&format!("{product_id} quantity is now {quantity}"));
        }
        QuantityChange::OutOfRange { .. } => {
            return Err(Error::NotFound(format!("cart line {}", args.position)));
        }
        QuantityChange::ConfirmationRequired { name, .. } => {
            let confirmed = args.yes || confirm_removal(&name)?;
            match store.confirm_pending_removal(confirmed) {
                Some(item) => output::success(&format!("Removed {}", item.name)),
                None => output::note(&format!("Kept {name}")),
            }
        }
    }
    Ok(())
}

/// Ask before removing a line whose quantity would reach zero.
///
/// Without an interactive terminal the removal is declined.
fn confirm_removal(name: &str) -> Result<bool> {
    if output::is_json() || !std::io::stdin().is_terminal() {
        output::hint("pass --yes to remove items without a prompt");
        return Ok(false);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Remove {name} from the cart?"))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
