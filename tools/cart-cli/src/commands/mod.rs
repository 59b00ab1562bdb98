//! CLI command implementations.

pub mod add;
pub mod checkout;
pub mod config;
pub mod quantity;
pub mod remove;
pub mod show;

use clap::{Args, Subcommand};

use crate::context::FileCart;
use crate::output::Output;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product name; adding an existing name bumps its quantity.
    pub name: String,

    /// Price as displayed, e.g. "₹8,500". Digits are kept, the rest ignored.
    #[arg(short, long, conflicts_with = "free")]
    pub price: Option<String>,

    /// Image reference.
    #[arg(short, long)]
    pub image: Option<String>,

    /// Add the product at price zero.
    #[arg(long)]
    pub free: bool,
}

/// Arguments for the qty command.
#[derive(Args)]
pub struct QuantityArgs {
    /// Row index, as printed by `show`.
    pub index: usize,

    /// Amount to add; negative to take away.
    #[arg(allow_negative_numbers = true)]
    pub delta: i64,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Row index, as printed by `show`.
    pub index: usize,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Print the panel markup instead of a table.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the configuration
    Validate,
}

/// Warn when the last write to the slot did not stick.
pub(crate) fn report_save_failure(cart: &FileCart, output: &Output) {
    if let Some(err) = cart.last_save_error() {
        output.warn(&format!("Cart could not be saved and will not survive this run: {}", err));
    }
}
